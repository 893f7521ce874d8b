//! Error types for cflr-analysis
//!
//! Provides unified error handling across the crate. The solver core
//! itself is infallible: once a graph is loaded, saturation cannot fail.
//! Errors arise only at the loading and serialization boundaries.

use thiserror::Error;

/// Main error type for cflr-analysis operations
#[derive(Debug, Error)]
pub enum CflrError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CflrError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        CflrError::Config(msg.into())
    }
}

/// Result type alias for cflr-analysis operations
pub type Result<T> = std::result::Result<T, CflrError>;
