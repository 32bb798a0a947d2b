//! Errors that abort a build.
//!
//! Every failure is fatal. Each variant names the path it failed on and keeps
//! the underlying cause as its `source`, so printing the chain gives the full
//! story.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::markdown::ConvertError;
use crate::renderer::RenderError;
use crate::scanner::ScanError;
use crate::template::TemplateError;

/// Pipeline stage a build was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Scanning,
    Reading,
    Converting,
    Rendering,
    Aggregating,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Setup => "setup",
            Stage::Scanning => "scan",
            Stage::Reading => "read",
            Stage::Converting => "convert",
            Stage::Rendering => "render",
            Stage::Aggregating => "index",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot create output directory {}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot load templates")]
    Templates(#[from] TemplateError),
    #[error("cannot list posts")]
    Scan(#[from] ScanError),
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot convert {}", path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
    #[error("cannot render {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
    #[error("cannot write index {}", path.display())]
    Index {
        path: PathBuf,
        #[source]
        source: RenderError,
    },
}

impl BuildError {
    pub fn stage(&self) -> Stage {
        match self {
            BuildError::CreateOutputDir { .. } | BuildError::Templates(_) => Stage::Setup,
            BuildError::Scan(_) => Stage::Scanning,
            BuildError::Read { .. } => Stage::Reading,
            BuildError::Convert { .. } => Stage::Converting,
            BuildError::Render { .. } => Stage::Rendering,
            BuildError::Index { .. } => Stage::Aggregating,
        }
    }
}
