//! Error types for oobhunt.
//!
//! The scanning core never fails; these errors cover the surrounding
//! plumbing (reading dumps, loading configuration, parsing layouts).

use thiserror::Error;

/// Main error type for oobhunt operations.
#[derive(Debug, Error)]
pub enum OobError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dump exceeds the configured size limit
    #[error("Dump size of {found} bytes exceeds the maximum allowed size of {limit} bytes")]
    FileTooLarge { limit: u64, found: u64 },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed `PAGE:OOB` layout string
    #[error("Invalid layout '{input}': {reason}")]
    InvalidLayout { input: String, reason: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for oobhunt operations
pub type Result<T> = std::result::Result<T, OobError>;
