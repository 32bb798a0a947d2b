use serde::Serialize;

use crate::markdown::MARKUP_SUFFIX;

/// One converted post.
///
/// `content` is HTML produced by the markdown converter and is trusted as-is;
/// templates are expected to emit it unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    title: String,
    content: String,
    filename: String,
}

impl Document {
    /// Build a document from the source file name and its converted HTML.
    ///
    /// The title is the file name without the markup suffix and the output
    /// file name is the title plus `.html`.
    pub fn from_source(source_name: &str, content: String) -> Self {
        let title = source_name
            .strip_suffix(MARKUP_SUFFIX)
            .unwrap_or(source_name)
            .to_string();
        let filename = output_filename(&title);

        Self {
            title,
            content,
            filename,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

fn output_filename(title: &str) -> String {
    format!("{title}.html")
}

/// Every document produced by one build, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Collection {
    documents: Vec<Document>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    // Only the collection builder grows a collection
    pub(crate) fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
