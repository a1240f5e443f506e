#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides a deterministic depth-first iterator over a directory
//! tree. Each yielded [`WalkEntry`] carries the absolute path, the path
//! relative to the traversal root, and the [`std::fs::Metadata`] captured
//! when the entry was visited. Children of every directory are visited in
//! sorted name order so repeated runs over the same tree produce identical
//! sequences.
//!
//! # Design
//!
//! - [`Walker`] keeps an explicit stack of directory states instead of
//!   recursing; each state snapshots the sorted child names of one directory
//!   the moment it is entered.
//! - Symbolic links are yielded as plain entries and never followed, so the
//!   walker cannot loop and needs no visited-set.
//! - The root itself is not yielded; the iteration covers everything beneath
//!   it.
//!
//! # Errors
//!
//! Traversal stops at the first failure. [`WalkError`] names the operation
//! that failed and the offending path.
//!
//! # Examples
//!
//! ```
//! use walk::Walker;
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::write(temp.path().join("a.txt"), b"data")?;
//! let mut walker = Walker::open(temp.path())?;
//! let entry = walker.next().expect("one entry")?;
//! assert_eq!(entry.relative_path(), std::path::Path::new("a.txt"));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry;
mod error;
mod walker;

pub use entry::WalkEntry;
pub use error::WalkError;
pub use walker::Walker;
