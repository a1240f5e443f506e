use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error returned when traversal fails.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The traversal root could not be inspected.
    #[error("failed to read metadata for walk root {}: {source}", path.display())]
    RootMetadata {
        /// The root passed to [`Walker::open`](crate::Walker::open).
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The traversal root exists but is not a directory.
    #[error("walk root {} is not a directory", path.display())]
    RootNotADirectory {
        /// The root passed to [`Walker::open`](crate::Walker::open).
        path: PathBuf,
    },
    /// A directory's entries could not be listed.
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// One entry of a directory listing could not be read.
    #[error("failed to read an entry of {}: {source}", path.display())]
    ReadDirEntry {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// An entry's metadata could not be captured.
    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata {
        /// The entry being inspected.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

impl WalkError {
    /// Returns the filesystem path associated with the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. }
            | Self::RootNotADirectory { path }
            | Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Metadata { path, .. } => path,
        }
    }
}
