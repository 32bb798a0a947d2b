use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::markdown::is_markup_file;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot open posts directory {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("posts path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("cannot read posts directory {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A markdown file picked up by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
}

pub struct PostScanner {
    posts_dir: PathBuf,
}

impl PostScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            posts_dir: path.as_ref().to_path_buf(),
        }
    }

    /// List the markdown files directly inside the posts directory, sorted by
    /// file name. Subdirectories are never entered or returned.
    pub fn scan(&self) -> Result<Vec<SourceFile>, ScanError> {
        let metadata = std::fs::metadata(&self.posts_dir).map_err(|source| ScanError::Open {
            path: self.posts_dir.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: self.posts_dir.clone(),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| ScanError::Read {
                path: self.posts_dir.clone(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            if is_markup_file(entry.file_name()) {
                // Titles come from the name, so invalid UTF-8 is replaced rather than dropped
                files.push(SourceFile {
                    file_name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry.into_path(),
                });
            }
        }

        Ok(files)
    }
}
