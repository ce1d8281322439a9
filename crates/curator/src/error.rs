//! Error types for the curator library.

use thiserror::Error;

/// Main error type for curator operations.
#[derive(Debug, Error)]
pub enum CurationError {
    /// A startup snapshot returned by the bridge was not valid JSON.
    #[error("Failed to parse {snapshot} snapshot: {source}")]
    Parse {
        snapshot: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error (console output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by the host bridge while serving a forwarded call.
    #[error("Bridge error in {operation}: {message}")]
    Bridge {
        operation: &'static str,
        message: String,
    },

    /// A curation program aborted its run.
    #[error("Program error: {0}")]
    Program(String),
}

impl CurationError {
    /// Create a bridge error for the named operation.
    pub fn bridge(operation: &'static str, message: impl Into<String>) -> Self {
        CurationError::Bridge {
            operation,
            message: message.into(),
        }
    }

    /// Create a program error.
    pub fn program(message: impl Into<String>) -> Self {
        CurationError::Program(message.into())
    }

    /// Short name of the error kind, used in program output reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CurationError::Parse { .. } => "ParseError",
            CurationError::Json(_) => "JsonError",
            CurationError::Bridge { .. } => "BridgeError",
            CurationError::Program(_) => "ProgramError",
        }
    }
}

/// Result type alias for curator operations.
pub type Result<T> = std::result::Result<T, CurationError>;
