#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` provides the directory exclusion rules used by the wsmirror
//! engine. A rule is a plain directory basename; any path segment equal to a
//! configured basename prunes the entire subtree rooted there, regardless of
//! nesting depth. No glob or prefix matching is performed.
//!
//! # Design
//!
//! - [`ExclusionSet`] owns the configured basenames in definition order and
//!   answers membership queries against [`OsStr`](std::ffi::OsStr) values so
//!   callers can test `fs::DirEntry` file names without lossy conversions.
//! - [`DEFAULT_EXCLUDED_DIRS`] lists the build/tool cache directories a
//!   personal workspace accumulates; it is the default rule set when the run
//!   configuration does not override it.
//!
//! # Invariants
//!
//! - Matching is exact basename equality. `.venv` excludes a directory named
//!   `.venv` at any depth but never `.venv-old`.
//! - A matched directory is never traversed, so nothing beneath it is copied
//!   and nothing beneath it participates in reclamation.
//!
//! # Examples
//!
//! ```
//! use filters::ExclusionSet;
//! use std::ffi::OsStr;
//!
//! let exclusions = ExclusionSet::default();
//! assert!(exclusions.is_excluded(OsStr::new("__pycache__")));
//! assert!(!exclusions.is_excluded(OsStr::new("src")));
//! ```

mod set;

pub use set::{DEFAULT_EXCLUDED_DIRS, ExclusionSet};

#[cfg(test)]
mod tests;
