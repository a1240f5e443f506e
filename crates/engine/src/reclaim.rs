use crate::error::{EngineError, EngineResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walk::{WalkEntry, Walker};

/// Deletes destination entries whose source counterpart no longer exists.
///
/// The destination tree is enumerated once into a snapshot before any
/// deletion, then each entry's root-relative path is checked against
/// `source_exists`. Stale files are unlinked directly; stale directories are
/// removed with their contents, clearing read-only attributes and retrying
/// once when the first removal is blocked by a permission error. Entries
/// beneath an already-removed stale directory are skipped. Surviving
/// entries, and everything inside them, are left untouched.
pub fn reclaim<F>(destination_root: &Path, source_exists: F) -> EngineResult<()>
where
    F: Fn(&Path) -> bool,
{
    let entries: Vec<WalkEntry> = Walker::open(destination_root)?.collect::<Result<_, _>>()?;

    let mut removed_directories: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let relative = entry.relative_path();
        if removed_directories
            .iter()
            .any(|removed| relative.starts_with(removed))
        {
            continue;
        }
        if source_exists(relative) {
            continue;
        }

        info!("remove {}", entry.full_path().display());
        if entry.is_dir() {
            remove_stale_directory(entry.full_path())?;
            removed_directories.push(relative.to_path_buf());
        } else {
            fs::remove_file(entry.full_path())
                .map_err(|error| EngineError::io("remove", entry.full_path(), error))?;
        }
    }
    Ok(())
}

/// Removes a stale directory tree, recovering from read-only attributes.
///
/// Entries that originated from a namespace marking copies read-only cannot
/// be unlinked until the attribute is cleared; when the first removal fails
/// with a permission error the whole stale subtree is made writable and the
/// removal is retried exactly once.
fn remove_stale_directory(path: &Path) -> EngineResult<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::PermissionDenied => {
            warn!(
                "clearing read-only attributes under {} after: {error}",
                path.display()
            );
            clear_readonly_tree(path)?;
            fs::remove_dir_all(path).map_err(|error| EngineError::io("remove", path, error))
        }
        Err(error) => Err(EngineError::io("remove", path, error)),
    }
}

fn clear_readonly_tree(root: &Path) -> EngineResult<()> {
    metadata::clear_readonly(root)?;
    for entry in Walker::open(root)? {
        let entry = entry?;
        metadata::clear_readonly(entry.full_path())?;
    }
    Ok(())
}
