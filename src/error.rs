//! Error types for the Waypost library.
//!
//! All fallible operations return [`Result`], with [`WaypostError`] as the
//! error type. Query-time operations (search, related-content matching,
//! section tracking) are infallible by contract: malformed content is
//! rejected when the index is built, never at query time.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Waypost operations.
#[derive(Error, Debug)]
pub enum WaypostError {
    /// I/O errors (reading index files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index construction errors (duplicate ids, unknown taxonomy keys, etc.)
    #[error("Index error: {0}")]
    Index(String),

    /// Document validation errors
    #[error("Document error: {0}")]
    Document(String),

    /// Query-related errors (CLI argument handling)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WaypostError.
pub type Result<T> = std::result::Result<T, WaypostError>;

impl WaypostError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        WaypostError::Index(msg.into())
    }

    /// Create a new document error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        WaypostError::Document(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        WaypostError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WaypostError::Other(msg.into())
    }
}
