//! Filesystem-backed report sink.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::error::StorageError;

/// Writes and reads text files under a root directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSink {
    /// Creates a sink resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `path` against the root. Absolute paths are kept as-is.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Writes `content` to `path`, creating parent directories and
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if a directory or the file cannot be written.
    pub fn try_write_file(
        &self,
        path: impl AsRef<Path>,
        content: &str,
    ) -> Result<PathBuf, StorageError> {
        let target = self.resolve(path);

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::from_io(parent, e))?;
        }

        fs::write(&target, content).map_err(|e| StorageError::from_io(&target, e))?;
        Ok(target)
    }

    /// Writes `content` to `path`. Returns false on failure.
    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) -> bool {
        match self.try_write_file(path, content) {
            Ok(target) => {
                info!(path = %target.display(), bytes = content.len(), "Successfully wrote file");
                true
            }
            Err(err) => {
                error!(path = %err.path().display(), error = %err, "Error writing file");
                false
            }
        }
    }

    /// Reads `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] for a missing file, otherwise
    /// [`StorageError::Io`].
    pub fn try_read_file(&self, path: impl AsRef<Path>) -> Result<String, StorageError> {
        let target = self.resolve(path);
        fs::read_to_string(&target).map_err(|e| StorageError::from_io(target, e))
    }

    /// Reads `path` as UTF-8. Returns `None` on failure.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.try_read_file(path) {
            Ok(content) => Some(content),
            Err(err @ StorageError::NotFound { .. }) => {
                error!(path = %err.path().display(), "File not found");
                None
            }
            Err(err) => {
                error!(path = %err.path().display(), error = %err, "Error reading file");
                None
            }
        }
    }

    /// Returns true if `path` is an existing regular file.
    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path).is_file()
    }

    /// Returns the size of `path` in bytes, or `None` if it cannot be read.
    pub fn file_size(&self, path: impl AsRef<Path>) -> Option<u64> {
        fs::metadata(self.resolve(path)).ok().map(|meta| meta.len())
    }
}
