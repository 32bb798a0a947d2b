use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use mdpress_core::build_site;
use tracing::error;

use crate::config::{DEFAULT_CONFIG_FILE, load_build_config};

// No default values here: an absent flag must not mask env or file settings.
// Global so `mdpress -o dist build` and `mdpress build -o dist` mean the same.
pub fn add_build_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("posts")
                .global(true)
                .short('p')
                .long("posts")
                .value_name("DIR")
                .help("Directory containing markdown posts [default: posts]"),
        )
        .arg(
            Arg::new("output")
                .global(true)
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for generated pages [default: public]"),
        )
        .arg(
            Arg::new("templates")
                .global(true)
                .short('t')
                .long("templates")
                .value_name("DIR")
                .help("Directory containing post.html and index.html [default: templates]"),
        )
        .arg(
            Arg::new("config")
                .global(true)
                .short('c')
                .long("config")
                .value_name("FILE")
                .help(format!("Configuration file [default: {DEFAULT_CONFIG_FILE}]")),
        )
}

/// The `build` subcommand. Its flags are the root's globals.
pub fn make_subcommand() -> Command {
    Command::new("build").about("Build the site from markdown posts")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_build_config(args)?;

    let summary = build_site(&config).inspect_err(|err| {
        error!(stage = %err.stage(), "build failed: {err}");
    })?;

    println!(
        "Built {} posts into {}",
        summary.collection.len(),
        config.paths.output_dir.display()
    );

    Ok(())
}
