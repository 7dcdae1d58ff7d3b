//! sstlens CLI — per-level write-operation statistics for RocksDB-style
//! databases.
//!
//! Drives `ldb manifest_dump` to discover which SST files belong to which
//! level, fans `sst_dump --command=scan` out over the requested levels'
//! files, and prints one operation-type histogram per level. Exactly one of
//! `--level` / `--max-level` selects the scope.

mod commands;
mod format;

use std::path::Path;
use std::process;

use sstlens_core::Error;
use sstlens_inspect::{LdbToolchain, Manifest};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_report, OutputMode};

fn main() {
    // diagnostics go to stderr so the report stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ldb = required_arg(&matches, "ldb");
    let sst_dump = required_arg(&matches, "sst-dump");
    let db = required_arg(&matches, "db");
    let manifest_path = required_arg(&matches, "manifest");

    info!(
        target: "sstlens::cli",
        ldb = %ldb,
        sst_dump = %sst_dump,
        db = %db,
        manifest = %manifest_path,
        "starting inspection"
    );

    let tools = match LdbToolchain::new(ldb, sst_dump) {
        Ok(tools) => tools,
        Err(err) => exit_with(&err, output_mode),
    };

    let manifest = match Manifest::load(Path::new(manifest_path), Path::new(db), &tools) {
        Ok(manifest) => manifest,
        Err(err) => exit_with(&err, output_mode),
    };
    if !manifest.is_complete() {
        warn!(target: "sstlens::cli", "manifest scan was incomplete, report covers parsed levels only");
    }

    let levels: Vec<String> = match (
        matches.get_one::<String>("level"),
        matches.get_one::<u32>("max-level"),
    ) {
        (Some(level), _) => vec![level.clone()],
        (None, Some(&max)) => (0..=max).map(|i| format!("level {}", i)).collect(),
        (None, None) => {
            // the arg group makes one of the two mandatory
            eprintln!("(error) one of --level or --max-level is required");
            process::exit(2);
        }
    };

    // levels load sequentially so the dump-parse cap never compounds
    for level in &levels {
        manifest.load_level(level, &tools);
    }

    println!("{}", format_report(&manifest.level_summaries(), output_mode));
}

fn exit_with(err: &Error, mode: OutputMode) -> ! {
    eprintln!("{}", format_error(err, mode));
    process::exit(1);
}

/// Fetch an argument clap already validated as required.
///
/// Absence after a successful parse means the flag definition changed;
/// that exits with a usage error rather than panicking.
fn required_arg<'a>(matches: &'a clap::ArgMatches, id: &str) -> &'a String {
    match matches.get_one::<String>(id) {
        Some(value) => value,
        None => {
            eprintln!("(error) missing required --{} argument", id);
            process::exit(2);
        }
    }
}
