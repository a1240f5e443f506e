use crate::catalog::SourceCatalog;
use crate::error::{EngineError, EngineResult};
use crate::job::MirrorJob;
use crate::reclaim::reclaim;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base directory under which one set of mirror destinations lives.
///
/// The root owns `base/subfolder`, creating it on construction, and is the
/// unit of reclamation: a reclamation pass only considers entries under one
/// destination root at a time.
#[derive(Debug)]
pub struct DestinationRoot {
    path: PathBuf,
}

impl DestinationRoot {
    /// Opens `base/subfolder` as a destination root, creating it if absent.
    pub fn new(base: impl Into<PathBuf>, subfolder: &str) -> EngineResult<Self> {
        let path = base.into().join(subfolder);
        if !path.exists() {
            info!("create {}", path.display());
            fs::create_dir_all(&path)
                .map_err(|error| EngineError::io("create directory", &path, error))?;
        }
        Ok(Self { path })
    }

    /// Returns the directory the mirrors live under.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds one validated [`MirrorJob`] per source directory.
    ///
    /// Each destination is `base/subfolder/source_basename`. The first
    /// validation failure aborts the whole list; no partial job list is
    /// silently dropped.
    pub fn create_jobs(&self, sources: &[PathBuf]) -> EngineResult<Vec<MirrorJob>> {
        sources
            .iter()
            .map(|source| {
                let name = source
                    .file_name()
                    .ok_or_else(|| EngineError::MissingFileName {
                        path: source.clone(),
                    })?;
                MirrorJob::new(source.clone(), self.path.join(name))
            })
            .collect()
    }

    /// Runs a reclamation pass over this root using the catalog's existence
    /// check.
    pub fn reclaim(&self, catalog: &SourceCatalog) -> EngineResult<()> {
        reclaim(&self.path, |relative| catalog.exists_relative(relative))
    }
}
