//! Bounded-concurrency level loading
//!
//! One `load_level` call drains a level's descriptor list through a small
//! worker pool: at most [`MAX_PARALLEL_DUMPS`] dump parses are in flight at
//! once, each worker pulling the next descriptor off a shared cursor.
//! Results merge into the manifest's histogram mapping by filename, so the
//! final state is independent of completion order. A failed file is logged
//! and left out; it never fails the level or its siblings.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use sstlens_core::{FileDescriptor, FileHistogram, Result};
use tracing::{debug, info, warn};

use crate::dump::scan_op_markers;
use crate::manifest::Manifest;
use crate::source::DumpSource;

/// Upper bound on concurrently in-flight dump parses per `load_level` call.
///
/// The cap is per call: a caller running several levels' loaders
/// concurrently gets up to this many parses per active level, so callers
/// wanting a global bound must serialize level loads.
pub const MAX_PARALLEL_DUMPS: usize = 5;

impl Manifest {
    /// Populate `histograms[level]` from the level's file descriptors.
    ///
    /// Returns once every file has been attempted. A level absent from the
    /// descriptors, or present with zero files, is a no-op apart from an
    /// empty histogram entry, so the aggregator later reports it as zero
    /// activity rather than missing. Per-file failures are logged at
    /// `warn` and the file is simply absent from the result.
    pub fn load_level(&self, level: &str, source: &dyn DumpSource) {
        let Some(files) = self.descriptors().get(level) else {
            info!(target: "sstlens::loader", level, "level not present in manifest, nothing to load");
            return;
        };
        self.histograms
            .lock()
            .insert(level.to_string(), Default::default());
        if files.is_empty() {
            info!(target: "sstlens::loader", level, "level has no files");
            return;
        }

        let cursor = AtomicUsize::new(0);
        let workers = files.len().min(MAX_PARALLEL_DUMPS);
        thread::scope(|s| {
            for _ in 0..workers {
                s.spawn(|| loop {
                    let idx = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(desc) = files.get(idx) else { break };
                    match load_file(self, level, desc, source) {
                        Ok(hist) => {
                            // lock covers the insertion only; the parse
                            // above ran unlocked
                            let mut levels = self.histograms.lock();
                            if let Some(entries) = levels.get_mut(level) {
                                entries.insert(desc.filename.clone(), hist);
                            }
                        }
                        Err(err) => {
                            warn!(target: "sstlens::loader", level, file = %desc.filename, error = %err, "sstable dump failed, file skipped");
                        }
                    }
                });
            }
        });
        info!(target: "sstlens::loader", level, files = files.len(), "level load complete");
    }
}

/// Parse one SST file's record dump into a histogram.
///
/// The key-range and size metadata come from the manifest descriptor, not
/// from the dump itself.
fn load_file(
    manifest: &Manifest,
    level: &str,
    desc: &FileDescriptor,
    source: &dyn DumpSource,
) -> Result<FileHistogram> {
    let file_name = format!("{}.sst", desc.filename);
    let sst_path = manifest.db_dir.join(&file_name);
    debug!(target: "sstlens::loader", path = %sst_path.display(), "scanning sstable");
    let text = source.sst_dump(&sst_path)?;
    let ops = scan_op_markers(&text);
    Ok(FileHistogram {
        key_count: ops.total(),
        ops,
        file_name,
        level_id: level.to_string(),
        min_key: desc.min_key.clone(),
        max_key: desc.max_key.clone(),
        size: desc.size.clone(),
    })
}
