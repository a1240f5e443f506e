use crate::error::{EngineError, EngineResult};
use crate::retry::{TIMESTAMP_ATTEMPTS, TIMESTAMP_BACKOFF, with_retries};
use metadata::MetadataError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Copies one entry's bytes and timestamps from `source` to `destination`.
///
/// If the destination already exists with the same modification time the
/// transfer is a no-op and the unchanged destination path is returned. A
/// regular file is copied byte-for-byte with its permission bits
/// (best-effort, via [`fs::copy`]) and its access/modification times. A
/// directory source yields an idempotently created destination directory
/// whose modification time alone is set to match; this covers
/// cross-namespace copies where the host filesystem refuses a generic copy
/// of the directory itself.
///
/// The timestamp write is retried on transient permission errors before the
/// failure is surfaced.
pub fn transfer(source: &Path, destination: &Path) -> EngineResult<PathBuf> {
    let source_metadata =
        fs::metadata(source).map_err(|error| EngineError::io("read metadata for", source, error))?;

    if let Ok(destination_metadata) = fs::symlink_metadata(destination)
        && metadata::times_match(&source_metadata, &destination_metadata)
    {
        debug!("unchanged: {}", destination.display());
        return Ok(destination.to_path_buf());
    }

    info!("copy {} to {}", source.display(), destination.display());

    if source_metadata.is_dir() {
        fs::create_dir_all(destination)
            .map_err(|error| EngineError::io("create directory", destination, error))?;
        let modified = metadata::modification_time(&source_metadata);
        replicate_timestamps(|| metadata::apply_modification_time(destination, modified))?;
    } else {
        fs::copy(source, destination)
            .map_err(|error| EngineError::io("copy file to", destination, error))?;
        replicate_timestamps(|| metadata::apply_file_times(destination, &source_metadata))?;
    }

    Ok(destination.to_path_buf())
}

fn replicate_timestamps<F>(operation: F) -> EngineResult<()>
where
    F: FnMut() -> Result<(), MetadataError>,
{
    with_retries(
        TIMESTAMP_ATTEMPTS,
        TIMESTAMP_BACKOFF,
        MetadataError::is_permission_denied,
        operation,
    )
    .map_err(EngineError::from)
}
