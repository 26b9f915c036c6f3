//! Storage Errors

use thiserror::Error;

/// Result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures at the key-value store boundary.
///
/// None of these reach the user; callers log them and keep going.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("malformed value under `{key}`")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
