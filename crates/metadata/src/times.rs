use crate::error::MetadataError;
use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Returns the modification timestamp recorded in `metadata`.
#[must_use]
pub fn modification_time(metadata: &fs::Metadata) -> FileTime {
    FileTime::from_last_modification_time(metadata)
}

/// Reports whether two entries carry the same modification timestamp.
///
/// This is the incremental skip rule: equal timestamps mean the destination
/// copy is considered current and no bytes need to move. Comparison keeps
/// the full nanosecond precision [`filetime`] exposes.
#[must_use]
pub fn times_match(source: &fs::Metadata, destination: &fs::Metadata) -> bool {
    modification_time(source) == modification_time(destination)
}

/// Replicates access and modification timestamps from `metadata` onto
/// `destination`.
pub fn apply_file_times(destination: &Path, metadata: &fs::Metadata) -> Result<(), MetadataError> {
    let accessed = FileTime::from_last_access_time(metadata);
    let modified = FileTime::from_last_modification_time(metadata);
    filetime::set_file_times(destination, accessed, modified)
        .map_err(|source| MetadataError::new("set file times", destination, source))
}

/// Sets only the modification timestamp of `destination`.
///
/// Used for directory placeholders, where the source's other attributes are
/// deliberately not replicated.
pub fn apply_modification_time(
    destination: &Path,
    modified: FileTime,
) -> Result<(), MetadataError> {
    filetime::set_file_mtime(destination, modified)
        .map_err(|source| MetadataError::new("set modification time", destination, source))
}
