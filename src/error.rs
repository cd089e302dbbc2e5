//! Error types for the log producer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing log lines.
#[derive(Error, Debug)]
pub enum ProduceError {
    /// Template file could not be opened for replay.
    #[error("Failed to open source file '{path}': {source}")]
    SourceOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Destination log file could not be created.
    #[error("Failed to create destination file '{path}': {source}")]
    DestinationCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
