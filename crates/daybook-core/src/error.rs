//! Error types for Daybook core operations.
//!
//! Errors are descriptive at the core level; the entry store decides which
//! of them get absorbed and which the caller ever sees.

use thiserror::Error;

/// Result type alias for Daybook operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Core error type for Daybook operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (open/read/write against the journal database)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}
