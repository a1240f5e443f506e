use metadata::MetadataError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walk::WalkError;

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error produced by the mirror engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required path does not exist.
    #[error("{} does not exist", path.display())]
    MissingPath {
        /// The absent path.
        path: PathBuf,
    },
    /// A path that must be a directory is something else.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },
    /// A path that needs a final component (for naming its mirror) has none.
    #[error("{} has no final path component", path.display())]
    MissingFileName {
        /// The offending path.
        path: PathBuf,
    },
    /// A mirror pair whose final components differ.
    ///
    /// Reclamation maps destination entries back to source paths by joining
    /// their relative path onto the source namespace, which is only sound
    /// when every destination tree is named after its source tree.
    #[error(
        "destination {} is not named after source {}",
        destination.display(),
        source_dir.display()
    )]
    DestinationNameMismatch {
        /// The job's source directory.
        source_dir: PathBuf,
        /// The rejected destination directory.
        destination: PathBuf,
    },
    /// An unclassified I/O failure; never locally recovered.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// The operation being attempted.
        action: &'static str,
        /// The path involved.
        path: PathBuf,
        /// The underlying failure.
        source: io::Error,
    },
    /// A timestamp or permission-bit operation failed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    /// Enumerating a destination tree failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
}

impl EngineError {
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Validates that `path` exists and is a directory.
///
/// Any violation is fatal for the whole run; no catalog or job list is built
/// on partial validation.
pub(crate) fn validate_directory(path: &Path) -> EngineResult<()> {
    if !path.exists() {
        return Err(EngineError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(EngineError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
