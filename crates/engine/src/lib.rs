#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` implements the incremental mirror: a filtered recursive tree
//! copy with an mtime-based skip rule, followed by a separate reclamation
//! pass that deletes destination entries whose source counterpart no longer
//! exists.
//!
//! # Design
//!
//! - [`transfer()`] moves one entry (bytes plus timestamps) and is where the
//!   skip rule lives: a destination whose modification time already equals
//!   the source's is left untouched.
//! - [`copy_tree`] walks a source directory in sorted order, prunes
//!   subtrees whose basename matches the [`ExclusionSet`], and delegates
//!   retained files to [`transfer()`]. It never deletes anything.
//! - [`reclaim()`] walks a destination tree once, maps each entry back to its
//!   would-be source path, and removes entries the source no longer has,
//!   recovering from read-only attributes before giving up.
//! - [`MirrorJob`], [`SourceCatalog`] and [`DestinationRoot`] are the
//!   sequencing glue: one validated source/destination pair per job, an
//!   eagerly validated partition of the source namespace, and a backup base
//!   directory that owns its jobs and its reclamation pass.
//!
//! Copy and reclamation are deliberately separate passes so a partially
//! failed copy never triggers premature deletion.
//!
//! # Errors
//!
//! All operations report [`EngineError`]. Validation failures abort
//! immediately; the only locally recovered failures are the transient
//! permission error on timestamp writes (bounded retry, see [`retry`]) and
//! the read-only attribute blocking a stale directory's deletion (one
//! recovery pass, one retry).

mod catalog;
mod copy;
mod destination;
mod error;
mod job;
mod reclaim;
pub mod retry;
mod transfer;

pub use catalog::SourceCatalog;
pub use copy::copy_tree;
pub use destination::DestinationRoot;
pub use error::{EngineError, EngineResult};
pub use filters::ExclusionSet;
pub use job::MirrorJob;
pub use reclaim::reclaim;
pub use transfer::transfer;
