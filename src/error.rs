//! Error types for the extension library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    /// Indexed lookup on a key that is not stored
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Global log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// File system failure in one of the helpers
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV input or failed CSV write
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
