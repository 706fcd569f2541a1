//! Error types for the mediamanifest-core library.
//!
//! Every failure here is fatal to a run except an unsupported extension,
//! which is not an error at all: the classifier reports it as
//! [`Classification::Unsupported`](crate::classify::Classification) and the
//! assembler skips the item with a warning.

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Plain `http://` references are rejected by the target platform.
    #[error("Insecure resource '{0}': only https:// URLs are accepted")]
    InsecureResource(String),

    #[error("No file extension found for {0}")]
    NoExtension(String),

    #[error("Unable to create manifest: no primary source found")]
    NoPrimarySource,

    #[error("Failed to invoke ffprobe for {0}: {1}")]
    ProbeUnavailable(String, String),

    #[error("ffprobe output empty for {0}: {1}")]
    ProbeEmptyOutput(String, String),

    #[error("Unable to parse ffprobe output for {0}: {1}")]
    ProbeParse(String, String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for mediamanifest-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a [`CoreError::ProbeUnavailable`] for a probe process that never started.
pub fn probe_start_error(input: impl Into<String>, err: std::io::Error) -> CoreError {
    CoreError::ProbeUnavailable(input.into(), err.to_string())
}

/// Builds a [`CoreError::ProbeUnavailable`] for a probe process that exited unsuccessfully.
pub fn probe_failed_error(input: impl Into<String>, status: ExitStatus, stderr: String) -> CoreError {
    let stderr = stderr.trim();
    let detail = if stderr.is_empty() {
        format!("exited with {status}")
    } else {
        format!("exited with {status}: {stderr}")
    };
    CoreError::ProbeUnavailable(input.into(), detail)
}
