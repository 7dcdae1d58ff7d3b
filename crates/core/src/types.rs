//! Model types for manifest and SST-dump extraction
//!
//! This module defines the data model produced by the pipeline:
//! - FileDescriptor: one file entry under a level in the manifest dump
//! - OpKind: classification of a record's operation-type marker
//! - OpCounts: per-file (or per-level, after aggregation) operation counters
//! - FileHistogram: the complete per-file result

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One SST file entry discovered in the manifest dump for a level.
///
/// Immutable after manifest parsing; owned by the level's descriptor list.
/// `size` is kept verbatim as a string: the dump's size field may carry
/// formatting the source tool chose, and nothing downstream compares sizes
/// numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File number as printed in the manifest (no `.sst` suffix)
    pub filename: String,
    /// Smallest key in the file, hex-encoded as dumped
    pub min_key: String,
    /// Largest key in the file, hex-encoded as dumped
    pub max_key: String,
    /// File size exactly as printed in the dump
    pub size: String,
}

/// The kind of mutation a stored record represents.
///
/// The closed set maps the engine's type codes 0/1/2/7; every other code
/// falls into [`OpKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Tombstone (`type:0`)
    Delete,
    /// Insertion or update (`type:1`)
    Value,
    /// Merge operand (`type:2`)
    Merge,
    /// Single-deletion tombstone (`type:7`)
    SingleDeletion,
    /// Any other engine-specific type code
    Other,
}

impl OpKind {
    /// Classify a raw operation-type marker (e.g. `"type:1"`).
    pub fn classify(tag: &str) -> OpKind {
        match tag {
            "type:0" => OpKind::Delete,
            "type:1" => OpKind::Value,
            "type:2" => OpKind::Merge,
            "type:7" => OpKind::SingleDeletion,
            _ => OpKind::Other,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Delete => "delete",
            OpKind::Value => "value",
            OpKind::Merge => "merge",
            OpKind::SingleDeletion => "singleDeletion",
            OpKind::Other => "else",
        };
        write!(f, "{}", name)
    }
}

/// Operation-type counters for one file, or for a whole level after
/// aggregation.
///
/// The five counters form a partition of all matched markers, so
/// `total()` is exact. Unrecognized markers additionally record their
/// literal tag in `other_tags` so the raw type code survives for
/// diagnostics; `other_tags` totals are a breakdown of `other`, never
/// added on top of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounts {
    /// Tombstones (`type:0`)
    pub delete: u64,
    /// Insertions/updates (`type:1`)
    pub value: u64,
    /// Merge operands (`type:2`)
    pub merge: u64,
    /// Single-deletion tombstones (`type:7`)
    pub single_deletion: u64,
    /// Everything else
    pub other: u64,
    /// Per-literal-tag breakdown of `other`, keyed by the raw marker text
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub other_tags: BTreeMap<String, u64>,
}

impl OpCounts {
    /// Record one occurrence of a raw operation-type marker.
    pub fn record(&mut self, tag: &str) {
        match OpKind::classify(tag) {
            OpKind::Delete => self.delete += 1,
            OpKind::Value => self.value += 1,
            OpKind::Merge => self.merge += 1,
            OpKind::SingleDeletion => self.single_deletion += 1,
            OpKind::Other => {
                self.other += 1;
                *self.other_tags.entry(tag.to_string()).or_insert(0) += 1;
            }
        }
    }

    /// Total number of markers recorded.
    pub fn total(&self) -> u64 {
        self.delete + self.value + self.merge + self.single_deletion + self.other
    }

    /// Fold another counter set into this one. Used by the aggregator to
    /// roll per-file counts into per-level totals.
    pub fn merge_from(&mut self, other: &OpCounts) {
        self.delete += other.delete;
        self.value += other.value;
        self.merge += other.merge;
        self.single_deletion += other.single_deletion;
        self.other += other.other;
        for (tag, count) in &other.other_tags {
            *self.other_tags.entry(tag.clone()).or_insert(0) += count;
        }
    }
}

/// Per-file result of scanning one SST record dump.
///
/// Written once by a single dump parse, then published into the manifest's
/// shared per-level mapping. `key_count` equals `ops.total()` by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHistogram {
    /// Total operation markers matched in the dump
    pub key_count: u64,
    /// Breakdown of matched markers by operation type
    pub ops: OpCounts,
    /// On-disk file name (with `.sst` suffix)
    pub file_name: String,
    /// Level this file belongs to, e.g. `"level 0"`
    pub level_id: String,
    /// Smallest key, copied from the file's descriptor
    pub min_key: String,
    /// Largest key, copied from the file's descriptor
    pub max_key: String,
    /// File size string, copied from the file's descriptor
    pub size: String,
}
