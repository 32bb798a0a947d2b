use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::Collection;
use crate::renderer::{RenderError, write_template};
use crate::template::{INDEX_TEMPLATE, Templates};

/// Name of the aggregate page written next to the posts.
pub const INDEX_FILE: &str = "index.html";

/// Render the index template over the whole collection into
/// `output_dir/index.html`. The template receives the documents as `posts`.
pub fn build_index(collection: &Collection, output_dir: &Path, templates: &Templates) -> Result<PathBuf, RenderError> {
    let mut context = templates.context();
    context.insert("posts", collection);

    let output_path = output_dir.join(INDEX_FILE);
    write_template(&output_path, INDEX_TEMPLATE, &context, templates)?;
    debug!(path = %output_path.display(), posts = collection.len(), "wrote index");

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::document::Document;
    use std::fs;
    use tempfile::TempDir;

    const LISTING: &str = "{% for post in posts %}[{{ post.title }}|{{ post.filename }}]{% else %}empty{% endfor %}";

    fn templates() -> Templates {
        Templates::from_sources("", LISTING, &SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_index_lists_every_document_in_order() {
        let out = TempDir::new().unwrap();
        let mut collection = Collection::new();
        for name in ["zeta.md", "alpha.md", "mid.md"] {
            collection.push(Document::from_source(name, String::new()));
        }

        let path = build_index(&collection, out.path(), &templates()).unwrap();

        assert_eq!(path, out.path().join("index.html"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "[zeta|zeta.html][alpha|alpha.html][mid|mid.html]"
        );
    }

    #[test]
    fn test_empty_collection_still_renders() {
        let out = TempDir::new().unwrap();

        build_index(&Collection::new(), out.path(), &templates()).unwrap();

        assert_eq!(fs::read_to_string(out.path().join("index.html")).unwrap(), "empty");
    }

    #[test]
    fn test_bad_index_template_fails() {
        let out = TempDir::new().unwrap();
        let templates = Templates::from_sources("", "{{ posts.nope.deeper }}", &SiteConfig::default()).unwrap();

        let err = build_index(&Collection::new(), out.path(), &templates).unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }
}
