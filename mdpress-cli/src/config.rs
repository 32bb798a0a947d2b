use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::ArgMatches;
use config::{Config as ConfigBuilder, File};
use mdpress_core::config::Config;

pub const DEFAULT_CONFIG_FILE: &str = "mdpress.toml";

/// Environment variables that override a directory setting.
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("POSTS_DIR", "posts_dir"),
    ("OUTPUT_DIR", "output_dir"),
    ("TEMPLATE_DIR", "template_dir"),
];

/// Command-line flags that override a directory setting.
const ARG_OVERRIDES: [(&str, &str); 3] = [
    ("posts", "posts_dir"),
    ("output", "output_dir"),
    ("templates", "template_dir"),
];

/// Load configuration with cascading precedence:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (`POSTS_DIR`, `OUTPUT_DIR`, `TEMPLATE_DIR`)
/// 3. Configuration file, when it exists
/// 4. Defaults (lowest priority)
///
/// `env` looks up a variable by name; empty values count as unset.
pub fn load<F>(args: &ArgMatches, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit_file = arg_value(args, "config").map(PathBuf::from);
    let config_file = explicit_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    // 1. Start with defaults
    let mut builder = ConfigBuilder::builder().add_source(ConfigBuilder::try_from(&Config::default())?);

    // 2. Add configuration file if it exists. Only the default may be absent.
    if config_file.is_file() {
        builder = builder.add_source(File::from(config_file.as_path()));
    } else if explicit_file.is_some() {
        bail!("config file {} does not exist", config_file.display());
    }

    // 3. Environment, then 4. CLI. Later overrides replace earlier ones.
    for (var, key) in ENV_OVERRIDES {
        builder = builder.set_override_option(key, env(var).filter(|value| !value.is_empty()))?;
    }
    for (arg, key) in ARG_OVERRIDES {
        builder = builder.set_override_option(key, arg_value(args, arg))?;
    }

    let config: Config = builder.build()?.try_deserialize()?;

    Ok(config)
}

/// Load configuration for a build, reading overrides from the process environment.
pub fn load_build_config(args: &ArgMatches) -> Result<Config> {
    load(args, |var| std::env::var(var).ok())
}

// Missing ids are tolerated so the same loader works for any command
fn arg_value(args: &ArgMatches, id: &str) -> Option<String> {
    args.try_get_one::<String>(id).ok().flatten().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    // Matches of the `build` subcommand, as `main` hands them to the loader
    fn matches(argv: &[&str]) -> ArgMatches {
        let mut full = vec!["mdpress"];
        full.extend_from_slice(argv);
        let mut root = crate::cli().try_get_matches_from(full).unwrap();
        let (_, args) = root.remove_subcommand().unwrap();
        args
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn empty_config_file(dir: &TempDir) -> String {
        let file = dir.path().join("mdpress.toml");
        fs::write(&file, "").unwrap();
        file.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config() {
        let dir = TempDir::new().unwrap();
        let file = empty_config_file(&dir);
        let args = matches(&["build", "--config", &file]);

        let config = load(&args, no_env).unwrap();
        assert_eq!(config.paths.posts_dir, PathBuf::from("posts"));
        assert_eq!(config.paths.output_dir, PathBuf::from("public"));
        assert_eq!(config.paths.template_dir, PathBuf::from("templates"));
        assert_eq!(config.site.title, "Blog");
    }

    #[test]
    fn test_config_file_is_read() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("mdpress.toml");
        fs::write(
            &file,
            "posts_dir = \"content\"\n\n[site]\ntitle = \"Field Notes\"\ndescription = \"Odds and ends\"\n",
        )
        .unwrap();
        let args = matches(&["build", "--config", file.to_str().unwrap()]);

        let config = load(&args, no_env).unwrap();
        assert_eq!(config.paths.posts_dir, PathBuf::from("content"));
        assert_eq!(config.paths.output_dir, PathBuf::from("public"));
        assert_eq!(config.site.title, "Field Notes");
        assert_eq!(config.site.description.as_deref(), Some("Odds and ends"));
    }

    #[test]
    fn test_env_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("mdpress.toml");
        fs::write(&file, "posts_dir = \"content\"\noutput_dir = \"dist\"\n").unwrap();
        let args = matches(&["build", "--config", file.to_str().unwrap()]);
        let env = HashMap::from([("POSTS_DIR", "from-env"), ("TEMPLATE_DIR", "")]);

        let config = load(&args, |var| env.get(var).map(|v| v.to_string())).unwrap();
        assert_eq!(config.paths.posts_dir, PathBuf::from("from-env"));
        assert_eq!(config.paths.output_dir, PathBuf::from("dist"));
        // Empty variables fall through to the lower layers
        assert_eq!(config.paths.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_cli_args_override_env() {
        let dir = TempDir::new().unwrap();
        let file = empty_config_file(&dir);
        let args = matches(&[
            "build",
            "--config",
            &file,
            "--posts",
            "/custom/posts",
            "-o",
            "/custom/out",
        ]);
        let env = HashMap::from([("POSTS_DIR", "from-env"), ("OUTPUT_DIR", "from-env")]);

        let config = load(&args, |var| env.get(var).map(|v| v.to_string())).unwrap();
        assert_eq!(config.paths.posts_dir, PathBuf::from("/custom/posts"));
        assert_eq!(config.paths.output_dir, PathBuf::from("/custom/out"));
        // Should still have defaults for non-overridden values
        assert_eq!(config.paths.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_root_flags_reach_the_build_subcommand() {
        let dir = TempDir::new().unwrap();
        let file = empty_config_file(&dir);
        let args = matches(&["-o", "dist", "-c", &file, "build", "-p", "content"]);

        assert_eq!(args.get_one::<String>("output").unwrap(), "dist");
        let config = load(&args, no_env).unwrap();
        assert_eq!(config.paths.output_dir, PathBuf::from("dist"));
        assert_eq!(config.paths.posts_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_explicit_missing_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let args = matches(&["build", "-c", missing.to_str().unwrap()]);

        let err = load(&args, no_env).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_broken_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("mdpress.toml");
        fs::write(&file, "posts_dir = [unterminated").unwrap();
        let args = matches(&["build", "--config", file.to_str().unwrap()]);

        assert!(load(&args, no_env).is_err());
    }
}
