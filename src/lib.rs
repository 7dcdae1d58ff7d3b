//! sstlens — per-level write-operation statistics for LSM storage engines.
//!
//! sstlens drives an engine's diagnostic binaries (`ldb manifest_dump`,
//! `sst_dump`) and turns their free-form text output into a structured model:
//! which SST files belong to which level, and how many records of each
//! operation type (insert, delete, merge, single-deletion, other) each file
//! holds. It never opens the binary file formats itself.
//!
//! # Quick Start
//!
//! ```ignore
//! use sstlens::{LdbToolchain, Manifest};
//!
//! let tools = LdbToolchain::new("/usr/local/bin/ldb", "/usr/local/bin/sst_dump")?;
//! let manifest = Manifest::load("db/MANIFEST-5881114".as_ref(), "db".as_ref(), &tools)?;
//! manifest.load_level("level 0", &tools);
//! for summary in manifest.level_summaries() {
//!     println!("{}: {} keys", summary.level, summary.key_count);
//! }
//! ```

// Re-export the public API from the member crates
pub use sstlens_core::*;
pub use sstlens_inspect::*;
