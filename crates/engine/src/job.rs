use crate::copy::copy_tree;
use crate::error::{EngineError, EngineResult, validate_directory};
use filters::ExclusionSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walk::Walker;

/// One validated source/destination pair subject to copy and reclamation.
#[derive(Debug)]
pub struct MirrorJob {
    source: PathBuf,
    destination: PathBuf,
}

impl MirrorJob {
    /// Binds `source` to `destination`, validating both sides.
    ///
    /// The source must exist and be a directory, the destination's parent
    /// must exist, and the destination must be named after the source's
    /// final path segment. The last check is what keeps reclamation's
    /// relative-path mapping sound.
    pub fn new(source: PathBuf, destination: PathBuf) -> EngineResult<Self> {
        validate_directory(&source)?;

        let parent = destination
            .parent()
            .ok_or_else(|| EngineError::MissingPath {
                path: destination.clone(),
            })?;
        validate_directory(parent)?;

        if source.file_name() != destination.file_name() {
            return Err(EngineError::DestinationNameMismatch {
                source_dir: source,
                destination,
            });
        }

        let job = Self {
            source,
            destination,
        };
        job.log_existing_destination()?;
        Ok(job)
    }

    /// Returns the source directory.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Mirrors the source tree into the destination with the given
    /// exclusions.
    ///
    /// There is no retry at this level; any unrecovered copy error fails the
    /// job.
    pub fn run(&self, exclusions: &ExclusionSet) -> EngineResult<()> {
        copy_tree(&self.source, &self.destination, exclusions)
    }

    fn log_existing_destination(&self) -> EngineResult<()> {
        if !self.destination.is_dir() {
            return Ok(());
        }
        for entry in Walker::open(&self.destination)? {
            let entry = entry?;
            debug!("existing destination entry: {}", entry.full_path().display());
        }
        Ok(())
    }
}
