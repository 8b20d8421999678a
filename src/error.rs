//! Error types for loading, scanning and writing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a generation run.
///
/// Both variants carry the offending path and the underlying I/O error,
/// and both render the cause in their message.
#[derive(Debug, Error)]
pub enum GenError {
    /// A template could not be read or an output file could not be written.
    #[error("couldn't access file {}: {cause}", path.display())]
    FileAccess { path: PathBuf, cause: io::Error },

    /// The origin directory could not be listed.
    #[error("couldn't scan directory {}: {cause}", path.display())]
    DirectoryAccess { path: PathBuf, cause: io::Error },
}

impl GenError {
    pub fn file(path: impl Into<PathBuf>, cause: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            cause,
        }
    }

    pub fn directory(path: impl Into<PathBuf>, cause: io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            cause,
        }
    }
}
