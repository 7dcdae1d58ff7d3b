//! Report formatting.
//!
//! Two modes:
//! - **Human** (default): aligned per-level blocks
//! - **JSON** (`--json`): `serde_json::to_string_pretty` over the summaries

use sstlens_core::Error;
use sstlens_inspect::LevelSummary;
use std::fmt::Write;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the per-level report.
pub fn format_report(summaries: &[LevelSummary], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(summaries)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => format_human(summaries),
    }
}

/// Format an error for the terminal.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_human(summaries: &[LevelSummary]) -> String {
    if summaries.is_empty() {
        return "(no levels loaded)".to_string();
    }
    let mut out = String::new();
    for s in summaries {
        let _ = writeln!(
            out,
            "{}: {} file(s), {} key(s)",
            s.level, s.file_count, s.key_count
        );
        let _ = writeln!(out, "  value:           {:>12}", s.ops.value);
        let _ = writeln!(out, "  delete:          {:>12}", s.ops.delete);
        let _ = writeln!(out, "  merge:           {:>12}", s.ops.merge);
        let _ = writeln!(out, "  single-deletion: {:>12}", s.ops.single_deletion);
        let _ = writeln!(out, "  other:           {:>12}", s.ops.other);
        for (tag, count) in &s.ops.other_tags {
            let _ = writeln!(out, "    {}: {}", tag, count);
        }
    }
    // drop the trailing newline, println! adds one
    out.pop();
    out
}
