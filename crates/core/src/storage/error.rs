//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Classifies an I/O error for `path`.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns the path the failed operation touched.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}
