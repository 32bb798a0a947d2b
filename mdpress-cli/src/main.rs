use anyhow::Result;
use clap::{Arg, ArgAction, Command};

mod cmd;
mod config;

fn cli() -> Command {
    // Running without a subcommand builds, so the root takes the build flags too
    cmd::build::add_build_args(Command::new("mdpress"))
        .about("Turn a directory of markdown posts into a static blog")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase verbosity (-v, -vv, -vvv)"),
        )
        .subcommand(cmd::build::make_subcommand())
}

/// Verbosity 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE. `RUST_LOG` directives
/// are honoured on top.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("build", args)) => cmd::build::execute(args),
        _ => cmd::build::execute(&matches),
    }
}
