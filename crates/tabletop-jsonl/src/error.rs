//! Error types for tabletop-jsonl operations.

use std::io;
use thiserror::Error;

/// The error type for tabletop-jsonl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line could not be interpreted as JSONL at all.
    #[error("Invalid JSONL format: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for tabletop-jsonl operations.
pub type Result<T> = std::result::Result<T, Error>;
