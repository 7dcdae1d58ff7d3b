//! Per-level aggregation
//!
//! Rolls the loaded per-file histograms up into one summary per level.
//! Runs after the relevant level loads have joined; it takes the manifest
//! lock once to snapshot the mapping and does all summation outside it.

use serde::Serialize;
use sstlens_core::OpCounts;

use crate::manifest::Manifest;

/// Operation-type totals for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    /// Level id, e.g. `"level 0"`
    pub level: String,
    /// Number of files that produced a histogram (failed files excluded)
    pub file_count: usize,
    /// Total operation markers across the level's files
    pub key_count: u64,
    /// Summed operation-type counters, `other_tags` unioned
    pub ops: OpCounts,
}

impl Manifest {
    /// Sum each loaded level's histograms into per-level totals.
    ///
    /// Levels that were loaded but produced no histograms (empty levels,
    /// or levels whose every file failed) appear with all-zero totals;
    /// levels never loaded do not appear at all.
    pub fn level_summaries(&self) -> Vec<LevelSummary> {
        let levels = self.histograms.lock();
        levels
            .iter()
            .map(|(level, files)| {
                let mut ops = OpCounts::default();
                let mut key_count = 0u64;
                for hist in files.values() {
                    ops.merge_from(&hist.ops);
                    key_count += hist.key_count;
                }
                LevelSummary {
                    level: level.clone(),
                    file_count: files.len(),
                    key_count,
                    ops,
                }
            })
            .collect()
    }
}
