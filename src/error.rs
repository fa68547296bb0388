//! Error types for the evaluation harness.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur in the evaluation harness.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error reading or writing files.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error during serialization/deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP request error.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The query API returned a non-success status.
    #[error("Query API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Failed to decode a response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The health endpoint did not report a healthy service.
    #[error("Health check failed: {0}")]
    HealthCheck(String),
}

impl EvalError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for EvalError {
    fn from(err: reqwest::Error) -> Self {
        EvalError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Decode(err.to_string())
    }
}
