pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod markdown;
pub mod renderer;
pub mod scanner;
pub mod template;

// Re-export main types
pub use builder::{BuildSummary, CollectionBuilder, build_site};
pub use document::{Collection, Document};
pub use error::{BuildError, Stage};
pub use index::build_index;
pub use renderer::{RenderError, render_document};
pub use scanner::{PostScanner, ScanError, SourceFile};
pub use template::{TemplateError, Templates};
