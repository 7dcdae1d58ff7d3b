//! SST record-dump parsing
//!
//! `sst_dump --command=scan` prints one line per stored record, each
//! carrying a `type:N` marker for the record's operation type. Everything
//! around the markers is noise to us: the scanner pulls all non-overlapping
//! markers out of the text and classifies them, nothing more.

use once_cell::sync::Lazy;
use regex::Regex;
use sstlens_core::OpCounts;

/// Matches one operation-type marker: the literal tag plus one digit.
static OP_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"type:[0-9]").expect("op marker pattern is valid"));

/// Count every operation-type marker in a record dump text.
///
/// Zero-length text and marker-free text both yield all-zero counts; an
/// empty SST dump is a valid, empty file, not an error. The returned
/// counts satisfy `counts.total() == number of markers matched`.
pub fn scan_op_markers(text: &str) -> OpCounts {
    let mut ops = OpCounts::default();
    for m in OP_MARKER.find_iter(text) {
        ops.record(m.as_str());
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mixed_markers() {
        let text = "'AA' seq:1, type:0 => x\n'BB' seq:2, type:1 => y\n\
                    'CC' seq:3, type:1 => z\n'DD' seq:4, type:9 => w\n";
        let ops = scan_op_markers(text);
        assert_eq!(ops.total(), 4);
        assert_eq!(ops.delete, 1);
        assert_eq!(ops.value, 2);
        assert_eq!(ops.merge, 0);
        assert_eq!(ops.single_deletion, 0);
        assert_eq!(ops.other, 1);
        assert_eq!(ops.other_tags.get("type:9"), Some(&1));
    }

    #[test]
    fn test_empty_text_yields_zero_counts() {
        let ops = scan_op_markers("");
        assert_eq!(ops, OpCounts::default());
        assert_eq!(ops.total(), 0);
    }

    #[test]
    fn test_marker_free_text_yields_zero_counts() {
        let ops = scan_op_markers("Sst file format: block-based\nfooter checksum ok\n");
        assert_eq!(ops.total(), 0);
    }

    #[test]
    fn test_every_digit_classified() {
        let text = "type:0 type:1 type:2 type:3 type:4 type:5 type:6 type:7 type:8 type:9";
        let ops = scan_op_markers(text);
        assert_eq!(ops.delete, 1);
        assert_eq!(ops.value, 1);
        assert_eq!(ops.merge, 1);
        assert_eq!(ops.single_deletion, 1);
        assert_eq!(ops.other, 6);
        for digit in ["3", "4", "5", "6", "8", "9"] {
            let tag = format!("type:{}", digit);
            assert_eq!(ops.other_tags.get(&tag), Some(&1), "tag {}", tag);
        }
        assert_eq!(ops.total(), 10);
    }

    #[test]
    fn test_marker_without_digit_ignored() {
        let ops = scan_op_markers("type: type:x type:");
        assert_eq!(ops.total(), 0);
    }

    #[test]
    fn test_adjacent_markers_all_counted() {
        let ops = scan_op_markers("type:1type:2type:7");
        assert_eq!(ops.value, 1);
        assert_eq!(ops.merge, 1);
        assert_eq!(ops.single_deletion, 1);
        assert_eq!(ops.total(), 3);
    }

    proptest! {
        /// For any sequence of digit markers embedded in junk, the total
        /// always equals the number of markers and the classification is
        /// exact per digit.
        #[test]
        fn prop_total_matches_marker_count(digits in proptest::collection::vec(0u8..10, 0..64)) {
            let mut text = String::from("header line\n");
            for d in &digits {
                text.push_str(&format!("'K' seq:9, type:{} => v\n", d));
            }
            let ops = scan_op_markers(&text);
            prop_assert_eq!(ops.total(), digits.len() as u64);
            prop_assert_eq!(ops.delete, digits.iter().filter(|&&d| d == 0).count() as u64);
            prop_assert_eq!(ops.value, digits.iter().filter(|&&d| d == 1).count() as u64);
            prop_assert_eq!(ops.merge, digits.iter().filter(|&&d| d == 2).count() as u64);
            prop_assert_eq!(ops.single_deletion, digits.iter().filter(|&&d| d == 7).count() as u64);
            let unknown = digits.iter().filter(|&&d| !matches!(d, 0 | 1 | 2 | 7)).count() as u64;
            prop_assert_eq!(ops.other, unknown);
        }

        /// Scanning is idempotent: same text, same counts.
        #[test]
        fn prop_scan_is_idempotent(text in "[ -~\n]{0,256}") {
            prop_assert_eq!(scan_op_markers(&text), scan_op_markers(&text));
        }
    }
}
