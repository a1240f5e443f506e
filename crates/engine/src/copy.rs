use crate::error::{EngineError, EngineResult};
use crate::transfer::transfer;
use filters::ExclusionSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Recursively mirrors `source_root` into `destination_root`.
///
/// The destination root is created if absent. Children are visited in
/// sorted name order; a child whose basename matches `exclusions` is
/// skipped entirely (for a directory, the whole subtree), a retained
/// directory is created on the destination side and recursed into, and a
/// retained file goes through [`transfer`], which skips it when its
/// modification time is unchanged. Symbolic links are followed: a link to a
/// directory is recursed into and mirrored as a real directory, a link to a
/// file is copied as the target file, and a dangling link is an error.
///
/// Destination entries with no source counterpart are never touched here;
/// removal belongs to the separate reclamation pass so a partially failed
/// copy cannot trigger premature deletion.
pub fn copy_tree(
    source_root: &Path,
    destination_root: &Path,
    exclusions: &ExclusionSet,
) -> EngineResult<()> {
    fs::create_dir_all(destination_root)
        .map_err(|error| EngineError::io("create directory", destination_root, error))?;
    copy_children(source_root, destination_root, exclusions)
}

fn copy_children(
    source_dir: &Path,
    destination_dir: &Path,
    exclusions: &ExclusionSet,
) -> EngineResult<()> {
    for name in sorted_child_names(source_dir)? {
        let source = source_dir.join(&name);
        if exclusions.is_excluded(&name) {
            debug!("skip excluded entry {}", source.display());
            continue;
        }
        let destination = destination_dir.join(&name);
        // Follow symlinks when classifying: a link to a directory must be
        // mirrored as a real directory holding the target's content, not as
        // an empty placeholder.
        let metadata = fs::metadata(&source)
            .map_err(|error| EngineError::io("read metadata for", &source, error))?;

        if metadata.is_dir() {
            if !destination.is_dir() {
                fs::create_dir_all(&destination)
                    .map_err(|error| EngineError::io("create directory", &destination, error))?;
            }
            copy_children(&source, &destination, exclusions)?;
        } else {
            transfer(&source, &destination)?;
        }
    }
    Ok(())
}

/// Lists the immediate children of `dir` in sorted name order.
///
/// Sorting keeps traversal deterministic so repeated runs visit entries in
/// the same sequence.
pub(crate) fn sorted_child_names(dir: &Path) -> EngineResult<Vec<OsString>> {
    let read_dir =
        fs::read_dir(dir).map_err(|error| EngineError::io("read directory", dir, error))?;
    let mut names = Vec::new();
    for entry in read_dir {
        let entry =
            entry.map_err(|error| EngineError::io("read an entry of", dir, error))?;
        names.push(entry.file_name());
    }
    names.sort();
    Ok(names)
}
