//! Error types for the bridge reconciler
//!
//! The merge routine itself is infallible; these errors come from the
//! surrounding harness (config, snapshot sources, rendering, metrics).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the reconciler harness
#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read snapshot {path:?}: {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot {path:?}: {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReconcilerError {
    /// Check if the operator can fix this by correcting input files or config
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReconcilerError::Config(_)
                | ReconcilerError::SnapshotRead { .. }
                | ReconcilerError::SnapshotParse { .. }
        )
    }
}

impl From<prometheus::Error> for ReconcilerError {
    fn from(e: prometheus::Error) -> Self {
        ReconcilerError::Metrics(e.to_string())
    }
}

/// Result type for reconciler operations
pub type ReconcilerResult<T> = Result<T, ReconcilerError>;
