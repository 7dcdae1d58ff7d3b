//! Extraction pipeline for sstlens
//!
//! This crate turns the diagnostic text produced by an LSM engine's tooling
//! into the structured model from `sstlens-core`:
//! - manifest: manifest-dump text → levels and file descriptors
//! - dump: SST record-dump text → operation-type histogram
//! - loader: bounded-concurrency fan-out of dump parses over a level
//! - aggregate: per-level roll-up of file histograms
//! - source: the external-tool seam (`DumpSource`) and the real
//!   `ldb`/`sst_dump` toolchain behind it

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod dump;
pub mod loader;
pub mod manifest;
pub mod source;

pub use aggregate::LevelSummary;
pub use dump::scan_op_markers;
pub use loader::MAX_PARALLEL_DUMPS;
pub use manifest::{parse_manifest_text, Manifest, ManifestScan};
pub use source::{DumpSource, LdbToolchain};
