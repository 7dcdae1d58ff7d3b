//! Core types for sstlens
//!
//! This crate defines the foundational types shared by the extraction
//! pipeline and the CLI:
//! - FileDescriptor: one SST file entry discovered in a manifest dump
//! - OpKind / OpCounts: record operation-type classification and counters
//! - FileHistogram: per-file operation statistics
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{FileDescriptor, FileHistogram, OpCounts, OpKind};
