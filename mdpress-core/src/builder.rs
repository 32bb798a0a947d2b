use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::document::{Collection, Document};
use crate::error::BuildError;
use crate::index::build_index;
use crate::markdown;
use crate::renderer::render_document;
use crate::scanner::PostScanner;
use crate::template::Templates;

/// Scans the posts directory and turns every markdown file into a rendered
/// page, collecting the documents as it goes.
pub struct CollectionBuilder<'a> {
    posts_dir: PathBuf,
    output_dir: PathBuf,
    templates: &'a Templates,
}

impl<'a> CollectionBuilder<'a> {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(posts_dir: P, output_dir: Q, templates: &'a Templates) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            templates,
        }
    }

    /// Read, convert and render each post in scan order. Each page is written
    /// as soon as its document is created, so writes follow the same order.
    pub fn build(self) -> Result<Collection, BuildError> {
        let sources = PostScanner::new(&self.posts_dir).scan()?;
        debug!(dir = %self.posts_dir.display(), count = sources.len(), "scanned posts");

        let mut collection = Collection::new();

        for source in sources {
            let raw = std::fs::read(&source.path).map_err(|err| BuildError::Read {
                path: source.path.clone(),
                source: err,
            })?;

            let content = markdown::to_html(&raw).map_err(|err| BuildError::Convert {
                path: source.path.clone(),
                source: err,
            })?;

            let document = Document::from_source(&source.file_name, content);

            render_document(&document, &self.output_dir, self.templates).map_err(|err| BuildError::Render {
                path: self.output_dir.join(document.filename()),
                source: err,
            })?;

            collection.push(document);
        }

        Ok(collection)
    }
}

/// What a successful build produced.
#[derive(Debug)]
pub struct BuildSummary {
    pub collection: Collection,
    pub index_path: PathBuf,
}

/// Run the whole pipeline once: prepare the output directory, load templates,
/// build every post, then write the index over the finished collection.
pub fn build_site(config: &Config) -> Result<BuildSummary, BuildError> {
    let paths = &config.paths;
    info!(
        posts = %paths.posts_dir.display(),
        output = %paths.output_dir.display(),
        templates = %paths.template_dir.display(),
        "building site"
    );

    std::fs::create_dir_all(&paths.output_dir).map_err(|source| BuildError::CreateOutputDir {
        path: paths.output_dir.clone(),
        source,
    })?;

    let templates = Templates::load(&paths.template_dir, &config.site)?;

    let collection = CollectionBuilder::new(&paths.posts_dir, &paths.output_dir, &templates).build()?;

    let index_path = build_index(&collection, &paths.output_dir, &templates).map_err(|source| BuildError::Index {
        path: paths.output_dir.join(crate::index::INDEX_FILE),
        source,
    })?;

    info!(posts = collection.len(), index = %index_path.display(), "site built");

    Ok(BuildSummary { collection, index_path })
}
