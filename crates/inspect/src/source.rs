//! External diagnostic tool seam
//!
//! The pipeline never reads binary SST or manifest formats itself; it
//! consumes the text output of the engine's own diagnostic binaries. The
//! [`DumpSource`] trait is that boundary: the real implementation
//! ([`LdbToolchain`]) shells out to `ldb` and `sst_dump`, while tests
//! substitute an in-memory fake.

use std::path::{Path, PathBuf};
use std::process::Command;

use sstlens_core::{Error, Result};
use tracing::debug;

/// Producer of raw diagnostic text for a manifest or an SST file.
///
/// Implementations must be shareable across the loader's worker threads.
pub trait DumpSource: Send + Sync {
    /// Produce the manifest dump text for the manifest file at `manifest_path`.
    ///
    /// # Errors
    /// `InputUnreadable` if the path does not exist, `ExternalToolFailure`
    /// if the dump could not be produced.
    fn manifest_dump(&self, manifest_path: &Path) -> Result<String>;

    /// Produce the record dump text for the SST file at `sst_path`.
    ///
    /// Zero-length output is not an error; it simply contains no markers.
    ///
    /// # Errors
    /// `InputUnreadable` if the path does not exist, `ExternalToolFailure`
    /// if the dump could not be produced.
    fn sst_dump(&self, sst_path: &Path) -> Result<String>;
}

/// The real toolchain: RocksDB's `ldb` and `sst_dump` binaries.
#[derive(Debug, Clone)]
pub struct LdbToolchain {
    ldb_path: PathBuf,
    sst_dump_path: PathBuf,
}

impl LdbToolchain {
    /// Create a toolchain from the paths to the two binaries.
    ///
    /// # Errors
    /// `InvalidConfig` if either path is empty.
    pub fn new(ldb_path: impl Into<PathBuf>, sst_dump_path: impl Into<PathBuf>) -> Result<Self> {
        let ldb_path = ldb_path.into();
        let sst_dump_path = sst_dump_path.into();
        if ldb_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("ldb path is empty".to_string()));
        }
        if sst_dump_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("sst_dump path is empty".to_string()));
        }
        Ok(LdbToolchain {
            ldb_path,
            sst_dump_path,
        })
    }

    /// Run one binary to completion and hand back its stdout.
    ///
    /// Spawn failures and non-zero exits both map to `ExternalToolFailure`;
    /// stderr is carried in the message so the operator sees what the tool
    /// printed.
    fn capture(tool: &Path, cmd: &mut Command) -> Result<String> {
        let tool_name = tool
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| tool.display().to_string());
        let output = cmd.output().map_err(|e| Error::ExternalToolFailure {
            tool: tool_name.clone(),
            message: e.to_string(),
        })?;
        if !output.status.success() {
            return Err(Error::ExternalToolFailure {
                tool: tool_name,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl DumpSource for LdbToolchain {
    fn manifest_dump(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(Error::InputUnreadable(manifest_path.to_path_buf()));
        }
        debug!(target: "sstlens::source", path = %manifest_path.display(), "running ldb manifest_dump");
        Self::capture(
            &self.ldb_path,
            Command::new(&self.ldb_path)
                .arg("manifest_dump")
                .arg("--hex")
                .arg(format!("--path={}", manifest_path.display())),
        )
    }

    fn sst_dump(&self, sst_path: &Path) -> Result<String> {
        if !sst_path.exists() {
            return Err(Error::InputUnreadable(sst_path.to_path_buf()));
        }
        debug!(target: "sstlens::source", path = %sst_path.display(), "running sst_dump scan");
        Self::capture(
            &self.sst_dump_path,
            Command::new(&self.sst_dump_path)
                .arg(format!("--file={}", sst_path.display()))
                .arg("--command=scan")
                .arg("--output_hex"),
        )
    }
}
