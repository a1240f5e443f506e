use crate::error::MetadataError;
use std::path::Path;

/// Makes `path` writable by its owner, clearing a read-only attribute.
///
/// Cloud-synced and cross-namespace copies frequently arrive marked
/// read-only, which blocks their later deletion during reclamation. The
/// helper never touches other permission bits.
#[cfg(unix)]
pub fn clear_readonly(path: &Path) -> Result<(), MetadataError> {
    use rustix::fs::{Mode, RawMode};
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::symlink_metadata(path)
        .map_err(|source| MetadataError::new("read permissions", path, source))?;
    let mode = metadata.permissions().mode() & 0o7777;
    if mode & 0o200 != 0 {
        return Ok(());
    }
    rustix::fs::chmod(path, Mode::from_bits_truncate((mode | 0o200) as RawMode))
        .map_err(|errno| MetadataError::new("clear read-only attribute", path, errno.into()))
}

/// Makes `path` writable, clearing the platform read-only attribute.
#[cfg(not(unix))]
pub fn clear_readonly(path: &Path) -> Result<(), MetadataError> {
    let metadata = std::fs::symlink_metadata(path)
        .map_err(|source| MetadataError::new("read permissions", path, source))?;
    let mut permissions = metadata.permissions();
    if !permissions.readonly() {
        return Ok(());
    }
    permissions.set_readonly(false);
    std::fs::set_permissions(path, permissions)
        .map_err(|source| MetadataError::new("clear read-only attribute", path, source))
}
