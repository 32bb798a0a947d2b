use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directories the pipeline reads from and writes to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Paths {
    /// Directory scanned for markdown posts (non-recursive)
    pub posts_dir: PathBuf,
    /// Directory receiving the rendered pages and `index.html`
    pub output_dir: PathBuf,
    /// Directory holding `post.html` and `index.html`
    pub template_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            output_dir: PathBuf::from("public"),
            template_dir: PathBuf::from("templates"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".into(),
            description: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(flatten)]
    pub paths: Paths,
    #[serde(default)]
    pub site: SiteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = Paths::default();
        assert_eq!(paths.posts_dir, PathBuf::from("posts"));
        assert_eq!(paths.output_dir, PathBuf::from("public"));
        assert_eq!(paths.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_default_site_title() {
        let config = Config::default();
        assert_eq!(config.site.title, "Blog");
        assert!(config.site.description.is_none());
    }
}
