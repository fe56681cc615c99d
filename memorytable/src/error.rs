//! Error types for table operations.

use thiserror::Error;

/// Errors returned by the fallible table operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// No record satisfied the lookup predicate.
    #[error("record not found")]
    RecordNotFound,

    /// The records could not be encoded to or decoded from JSON.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
