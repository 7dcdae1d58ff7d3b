//! Error types for sstlens
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Malformed manifest lines and incomplete manifest scans
//! are deliberately NOT errors: the former are skipped in place, the latter
//! surface as `Manifest::is_complete() == false` with partial data.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sstlens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the extraction pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// The requested input path does not exist.
    ///
    /// Fatal to the operation that needed the path; never retried.
    #[error("{} does not exist", .0.display())]
    InputUnreadable(PathBuf),

    /// An external diagnostic binary failed to produce output.
    ///
    /// Covers both spawn failures and non-zero exits. Fatal to the file or
    /// manifest it was invoked for, but never to sibling work.
    #[error("{tool} failed: {message}")]
    ExternalToolFailure {
        /// Name of the binary that failed (e.g. `ldb`, `sst_dump`)
        tool: String,
        /// Spawn error or captured stderr
        message: String,
    },

    /// A required tool or target path was empty or missing from the
    /// configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_unreadable_display() {
        let err = Error::InputUnreadable(PathBuf::from("/tmp/MANIFEST-000001"));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/MANIFEST-000001"));
        assert!(msg.contains("does not exist"));
    }

    #[test]
    fn test_external_tool_failure_display() {
        let err = Error::ExternalToolFailure {
            tool: "sst_dump".to_string(),
            message: "file corrupted".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sst_dump failed"));
        assert!(msg.contains("file corrupted"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig("ldb path is empty".to_string());
        assert!(err.to_string().contains("ldb path is empty"));
    }
}
