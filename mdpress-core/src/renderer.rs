use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::document::Document;
use crate::template::{POST_TEMPLATE, TemplateError, Templates};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot create output file")]
    Create(#[source] std::io::Error),
    #[error("template execution failed")]
    Template(#[from] TemplateError),
    #[error("template context could not be built")]
    Context(#[source] tera::Error),
    #[error("cannot write output file")]
    Write(#[source] std::io::Error),
}

/// Render `document` through the post template into `output_dir/<filename>`.
///
/// The file is created (or truncated) before the template runs, so a failed
/// render leaves a partial file behind. Returns the written path.
pub fn render_document(document: &Document, output_dir: &Path, templates: &Templates) -> Result<PathBuf, RenderError> {
    let context = templates.context_from(document).map_err(RenderError::Context)?;
    let output_path = output_dir.join(document.filename());

    write_template(&output_path, POST_TEMPLATE, &context, templates)?;
    debug!(path = %output_path.display(), title = document.title(), "wrote post");

    Ok(output_path)
}

/// Create `path` and stream `template` into it. The handle is dropped on every
/// return path, including a failed render.
pub(crate) fn write_template(path: &Path, template: &str, context: &tera::Context, templates: &Templates) -> Result<(), RenderError> {
    let file = File::create(path).map_err(RenderError::Create)?;
    let mut writer = BufWriter::new(file);

    templates.render_to(template, context, &mut writer)?;
    writer.flush().map_err(RenderError::Write)?;

    Ok(())
}
