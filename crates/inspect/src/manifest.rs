//! Manifest dump parsing
//!
//! The manifest dump is line-oriented: a level header (`level N`) opens a
//! scope, and the indented lines that follow describe that level's files
//! until a line stops looking like a file entry. The scanner is a small
//! two-state machine over those lines:
//!
//! ```text
//! OutsideLevel --level header--> InsideLevel(id)
//! InsideLevel  --file entry----> InsideLevel(id)   (descriptor appended)
//! InsideLevel  --short line----> OutsideLevel      (scope ends, no error)
//! InsideLevel  --no quoted keys> InsideLevel(id)   (malformed, skipped)
//! ```
//!
//! A final segment with no line terminator stops the scan and marks the
//! result incomplete; everything parsed up to that point is kept.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use sstlens_core::{FileDescriptor, FileHistogram, Result};
use tracing::{debug, info, warn};

use crate::source::DumpSource;

/// Literal tag opening a level header line.
const LEVEL_TAG: &str = "level ";

/// Raw outcome of scanning one manifest dump text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestScan {
    /// Level id → ordered file descriptors, as encountered
    pub levels: BTreeMap<String, Vec<FileDescriptor>>,
    /// Number of distinct level headers seen, including empty levels
    pub level_count: u32,
    /// False if the scan stopped before consuming the whole text
    pub complete: bool,
}

enum ScanState {
    OutsideLevel,
    InsideLevel(String),
}

enum EntryOutcome {
    Entry(FileDescriptor),
    Malformed,
    EndOfScope,
}

/// Scan a manifest dump text into levels and file descriptors.
///
/// Pure over its input: the same text always yields the same scan. Lines
/// outside any level scope are ignored; malformed entries inside a scope
/// are skipped without ending the scope.
pub fn parse_manifest_text(text: &str) -> ManifestScan {
    let mut levels: BTreeMap<String, Vec<FileDescriptor>> = BTreeMap::new();
    let mut level_count = 0u32;
    let mut complete = true;
    let mut state = ScanState::OutsideLevel;
    let mut rest = text;

    while !rest.is_empty() {
        let Some(nl) = rest.find('\n') else {
            // Trailing bytes with no terminator: the scanner cannot make
            // progress, so stop here and keep what we have.
            warn!(target: "sstlens::manifest", "line terminator not found, manifest scan incomplete");
            complete = false;
            break;
        };
        let line = &rest[..nl];
        rest = &rest[nl + 1..];

        if let Some(level_id) = level_header(line) {
            if !levels.contains_key(&level_id) {
                level_count += 1;
                levels.insert(level_id.clone(), Vec::new());
            }
            state = ScanState::InsideLevel(level_id);
            continue;
        }

        if let ScanState::InsideLevel(ref level) = state {
            match file_entry(line) {
                EntryOutcome::Entry(desc) => {
                    debug!(target: "sstlens::manifest", level = %level, file = %desc.filename, "file entry");
                    levels.entry(level.clone()).or_default().push(desc);
                }
                EntryOutcome::Malformed => {
                    warn!(target: "sstlens::manifest", level = %level, line, "malformed file entry skipped");
                }
                EntryOutcome::EndOfScope => {
                    state = ScanState::OutsideLevel;
                }
            }
        }
    }

    ManifestScan {
        levels,
        level_count,
        complete,
    }
}

/// Recognize a level header and return its id (`"level N"`).
///
/// The header is the literal `level ` tag followed by at least one digit,
/// anywhere in the line. All following digits belong to the id, so levels
/// past 9 parse correctly.
fn level_header(line: &str) -> Option<String> {
    let idx = line.find(LEVEL_TAG)?;
    let after = &line[idx + LEVEL_TAG.len()..];
    let digits: &str = after
        .split_once(|c: char| !c.is_ascii_digit())
        .map(|(d, _)| d)
        .unwrap_or(after);
    if digits.is_empty() {
        return None;
    }
    Some(format!("{}{}", LEVEL_TAG, digits))
}

/// Interpret one in-scope line as a file entry.
///
/// Example input:
/// `312169:270758074['00000011648465F1' seq:52258151830, type:1 .. '000000116484845D' seq:52270611945, type:1]`
///
/// A line with no `:` field separator ends the level's file list. A line
/// with the separator but without both single-quoted keys is malformed and
/// skipped.
fn file_entry(line: &str) -> EntryOutcome {
    let Some((first, _)) = line.split_once(':') else {
        return EntryOutcome::EndOfScope;
    };
    let filename = first.trim().to_string();

    let quoted: Vec<&str> = line.trim().split('\'').collect();
    // parts[1] and parts[3] are the two quoted keys; anything shorter is
    // missing at least one of them
    if quoted.len() < 5 {
        return EntryOutcome::Malformed;
    }
    let min_key = quoted[1].to_string();
    let max_key = quoted[3].to_string();

    let Some(size_field) = quoted[0].split(':').nth(1) else {
        return EntryOutcome::Malformed;
    };
    let size = size_field.strip_suffix('[').unwrap_or(size_field).to_string();

    EntryOutcome::Entry(FileDescriptor {
        filename,
        min_key,
        max_key,
        size,
    })
}

/// Aggregate root for one inspection run.
///
/// Populated progressively: descriptors at construction, histograms
/// level-by-level via [`Manifest::load_level`]. The histogram mapping is
/// the only concurrently-mutated state and is guarded by one mutex; the
/// lock is held for map insertions only, never across a dump parse.
pub struct Manifest {
    level_count: u32,
    complete: bool,
    descriptors: BTreeMap<String, Vec<FileDescriptor>>,
    pub(crate) histograms: Mutex<BTreeMap<String, BTreeMap<String, FileHistogram>>>,
    pub(crate) db_dir: PathBuf,
}

impl Manifest {
    /// Obtain the manifest dump via `source` and scan it.
    ///
    /// `db_dir` is the directory the level loader will later resolve
    /// `.sst` files against.
    ///
    /// # Errors
    /// `InputUnreadable` if the manifest path does not exist,
    /// `ExternalToolFailure` if the dump could not be produced. An
    /// incomplete scan is NOT an error: the manifest is returned with
    /// [`Manifest::is_complete`] reporting false.
    pub fn load(manifest_path: &Path, db_dir: &Path, source: &dyn DumpSource) -> Result<Self> {
        let text = source.manifest_dump(manifest_path)?;
        info!(target: "sstlens::manifest", path = %manifest_path.display(), bytes = text.len(), "manifest dump captured");
        let scan = parse_manifest_text(&text);
        if scan.complete {
            info!(target: "sstlens::manifest", levels = scan.level_count, "manifest scan complete");
        } else {
            warn!(target: "sstlens::manifest", levels = scan.level_count, "manifest scan stopped early, results are partial");
        }
        Ok(Manifest {
            level_count: scan.level_count,
            complete: scan.complete,
            descriptors: scan.levels,
            histograms: Mutex::new(BTreeMap::new()),
            db_dir: db_dir.to_path_buf(),
        })
    }

    /// Number of distinct level headers seen in the manifest dump.
    pub fn level_count(&self) -> u32 {
        self.level_count
    }

    /// False if the manifest text could not be fully scanned; the
    /// descriptors cover only the prefix that did scan.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Level id → ordered file descriptors.
    pub fn descriptors(&self) -> &BTreeMap<String, Vec<FileDescriptor>> {
        &self.descriptors
    }

    /// Snapshot of one level's loaded histograms, if that level has been
    /// loaded.
    pub fn level_histograms(&self, level: &str) -> Option<BTreeMap<String, FileHistogram>> {
        self.histograms.lock().get(level).cloned()
    }
}
