use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error produced when a metadata operation fails.
#[derive(Debug, Error)]
#[error("failed to {action} for {}: {source}", path.display())]
pub struct MetadataError {
    action: &'static str,
    path: PathBuf,
    source: io::Error,
}

impl MetadataError {
    /// Creates a new [`MetadataError`] from the supplied action, path, and source error.
    pub(crate) fn new(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the operation being performed when the error occurred.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        self.action
    }

    /// Returns the path involved in the failing operation.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying [`io::Error`] that triggered this failure.
    #[must_use]
    pub const fn source_error(&self) -> &io::Error {
        &self.source
    }

    /// Reports whether the failure was a permission error.
    ///
    /// Timestamp writes may fail transiently with a permission error on some
    /// platforms; the engine retries exactly these failures.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.source.kind() == io::ErrorKind::PermissionDenied
    }
}
