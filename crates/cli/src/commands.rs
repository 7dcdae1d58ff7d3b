//! Clap command tree definition.

use clap::{Arg, ArgGroup, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("sstlens")
        .about("Per-level write-operation statistics for RocksDB-style SST files")
        .arg(
            Arg::new("ldb")
                .long("ldb")
                .help("Path to the ldb binary")
                .required(true),
        )
        .arg(
            Arg::new("sst-dump")
                .long("sst-dump")
                .help("Path to the sst_dump binary")
                .required(true),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .help("Database directory containing the .sst files")
                .required(true),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .help("Path to the MANIFEST-* file to dump")
                .required(true),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .help("Single level to scan, e.g. \"level 0\""),
        )
        .arg(
            Arg::new("max-level")
                .long("max-level")
                .value_parser(clap::value_parser!(u32))
                .help("Scan every level from 0 through N inclusive")
                .conflicts_with("level"),
        )
        .group(
            ArgGroup::new("scope")
                .args(["level", "max-level"])
                .required(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue),
        )
}
