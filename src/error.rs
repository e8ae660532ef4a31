//! Error types for bankocr
//!
//! Illegible and erroneous account numbers are *not* errors: they are
//! classifications carried by [`crate::core::models::Status`]. This enum only
//! covers conditions that stop a run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the reader, writer, and configuration layers
#[derive(Debug, Error)]
pub enum OcrError {
    /// Underlying I/O failure while reading records or writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file does not exist
    #[error("the file '{}' could not be found", path.display())]
    InputNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// An account was constructed without an account number
    #[error("account number cannot be absent")]
    MissingAccountNumber,

    /// Configuration file could not be read or parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A result could not be serialized for JSON output
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience alias used across the library
pub type Result<T> = std::result::Result<T, OcrError>;
