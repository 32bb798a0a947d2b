use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::config::SiteConfig;

/// Template used for every post page.
pub const POST_TEMPLATE: &str = "post.html";
/// Template used for the aggregate listing.
pub const INDEX_TEMPLATE: &str = "index.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to load templates from {}", dir.display())]
    Load {
        dir: PathBuf,
        #[source]
        source: tera::Error,
    },
    #[error("failed to render template {name}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// The post and index templates plus the context shared by every render.
#[derive(Debug)]
pub struct Templates {
    tera: Tera,
    global: Context,
}

impl Templates {
    /// Load `post.html` and `index.html` from `dir`.
    ///
    /// Both must exist and parse; anything else in the directory is ignored.
    pub fn load<P: AsRef<Path>>(dir: P, site: &SiteConfig) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let mut tera = Tera::default();

        tera.add_template_files(vec![
            (dir.join(POST_TEMPLATE), Some(POST_TEMPLATE)),
            (dir.join(INDEX_TEMPLATE), Some(INDEX_TEMPLATE)),
        ])
        .map_err(|source| TemplateError::Load {
            dir: dir.to_path_buf(),
            source,
        })?;

        Ok(Self::with_tera(tera, site))
    }

    /// Build from in-memory template sources, keyed like files on disk.
    pub fn from_sources(post: &str, index: &str, site: &SiteConfig) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![(POST_TEMPLATE, post), (INDEX_TEMPLATE, index)])
            .map_err(|source| TemplateError::Load {
                dir: PathBuf::new(),
                source,
            })?;

        Ok(Self::with_tera(tera, site))
    }

    fn with_tera(tera: Tera, site: &SiteConfig) -> Self {
        let mut global = Context::new();
        global.insert("site", site);

        Self { tera, global }
    }

    /// Context holding the global values, ready for per-render additions.
    pub fn context(&self) -> Context {
        self.global.clone()
    }

    /// Context with the global values and every field of `data` at the top level.
    pub fn context_from<T: Serialize>(&self, data: &T) -> Result<Context, tera::Error> {
        let mut context = self.context();
        context.extend(Context::from_serialize(data)?);
        Ok(context)
    }

    /// Render a template straight into `writer`.
    pub fn render_to<W: Write>(&self, name: &str, context: &Context, writer: W) -> Result<(), TemplateError> {
        self.tera
            .render_to(name, context, writer)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source,
            })
    }
}
