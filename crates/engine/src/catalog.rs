use crate::copy::sorted_child_names;
use crate::error::{EngineResult, validate_directory};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Partition of a source namespace's top-level directories.
///
/// The immediate children of the root split into a `normal` set, mirrored
/// to the primary (cloud) destination, and a `large` set, mirrored to the
/// secondary destination. Membership in `large` is by directory name,
/// configured externally; every top-level entry belongs to exactly one set.
/// All member paths are validated eagerly, so no partial catalog is ever
/// produced.
#[derive(Debug)]
pub struct SourceCatalog {
    root: PathBuf,
    normal: Vec<PathBuf>,
    large: Vec<PathBuf>,
}

impl SourceCatalog {
    /// Builds and validates a catalog over `root`.
    ///
    /// Fails if the root, any of its children, or any configured large
    /// directory is missing or not a directory.
    pub fn new(root: impl Into<PathBuf>, large_names: &[String]) -> EngineResult<Self> {
        let root = root.into();
        validate_directory(&root)?;

        let mut normal = Vec::new();
        for name in sorted_child_names(&root)? {
            if large_names.iter().any(|large| OsStr::new(large) == name) {
                continue;
            }
            normal.push(root.join(name));
        }
        let large: Vec<PathBuf> = large_names.iter().map(|name| root.join(name)).collect();

        for path in normal.iter().chain(&large) {
            debug!("source path: {}", path.display());
            validate_directory(path)?;
        }

        Ok(Self {
            root,
            normal,
            large,
        })
    }

    /// Returns the root of the source namespace.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Top-level directories outside the large set, in sorted order.
    #[must_use]
    pub fn normal(&self) -> &[PathBuf] {
        &self.normal
    }

    /// The configured large directories, in configuration order.
    #[must_use]
    pub fn large(&self) -> &[PathBuf] {
        &self.large
    }

    /// Reports whether `root / relative` currently exists.
    ///
    /// Backs the reclamation pass: a destination entry whose relative path
    /// no longer resolves under the source namespace is stale.
    #[must_use]
    pub fn exists_relative(&self, relative: &Path) -> bool {
        self.root.join(relative).exists()
    }
}
