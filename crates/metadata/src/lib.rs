#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `metadata` wraps the timestamp and permission-bit primitives the mirror
//! engine relies on: reading a file's modification time, replicating
//! timestamps onto a copied entry, comparing two entries' modification times
//! for the incremental skip rule, and clearing the read-only attribute that
//! blocks stale-entry deletion.
//!
//! Timestamp work goes through the [`filetime`] crate so comparisons keep
//! full nanosecond precision. Permission bits are manipulated with
//! `rustix::fs` on Unix and `std::fs` elsewhere.
//!
//! # Errors
//!
//! Every operation reports [`MetadataError`], which names the action, the
//! offending path, and the underlying [`std::io::Error`]. Callers that retry
//! transient failures can classify errors with
//! [`MetadataError::is_permission_denied`].

mod error;
mod readonly;
mod times;

pub use error::MetadataError;
pub use readonly::clear_readonly;
pub use times::{apply_file_times, apply_modification_time, modification_time, times_match};

#[cfg(test)]
mod tests;
