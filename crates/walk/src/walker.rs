use crate::entry::WalkEntry;
use crate::error::WalkError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Depth-first iterator over the entries beneath a directory.
pub struct Walker {
    stack: Vec<DirectoryState>,
    finished: bool,
}

impl Walker {
    /// Opens a traversal over the tree rooted at `root`.
    ///
    /// The root must exist and be a directory; it is not itself yielded.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, WalkError> {
        let root = root.into();
        let metadata = fs::symlink_metadata(&root).map_err(|source| WalkError::RootMetadata {
            path: root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(WalkError::RootNotADirectory { path: root });
        }

        let state = DirectoryState::new(root, PathBuf::new())?;
        Ok(Self {
            stack: vec![state],
            finished: false,
        })
    }

    fn prepare_entry(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
    ) -> Result<WalkEntry, WalkError> {
        let metadata =
            fs::symlink_metadata(&full_path).map_err(|source| WalkError::Metadata {
                path: full_path.clone(),
                source,
            })?;

        if metadata.is_dir() {
            let state = DirectoryState::new(full_path.clone(), relative_path.clone())?;
            self.stack.push(state);
        }

        Ok(WalkEntry {
            full_path,
            relative_path,
            metadata,
        })
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let (full_path, relative_path) = {
                let state = self.stack.last_mut()?;
                if let Some(name) = state.next_name() {
                    let full_path = state.fs_path.join(&name);
                    let relative_path = join_relative(&state.relative_prefix, &name);
                    (full_path, relative_path)
                } else {
                    self.stack.pop();
                    continue;
                }
            };

            match self.prepare_entry(full_path, relative_path) {
                Ok(entry) => return Some(Ok(entry)),
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

fn join_relative(prefix: &Path, name: &OsString) -> PathBuf {
    if prefix.as_os_str().is_empty() {
        PathBuf::from(name)
    } else {
        let mut relative = prefix.to_path_buf();
        relative.push(name);
        relative
    }
}

/// Sorted snapshot of one directory's child names plus a cursor.
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: Vec<OsString>,
    index: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf) -> Result<Self, WalkError> {
        let read_dir = fs::read_dir(&fs_path).map_err(|source| WalkError::ReadDir {
            path: fs_path.clone(),
            source,
        })?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| WalkError::ReadDirEntry {
                path: fs_path.clone(),
                source,
            })?;
            entries.push(entry.file_name());
        }
        entries.sort();

        Ok(Self {
            fs_path,
            relative_prefix,
            entries,
            index: 0,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.entries.get(self.index)?.clone();
        self.index += 1;
        Some(name)
    }
}
