//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing persisted values.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read a stored value
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a stored value
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the storage directory
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stored order is not a permutation of the primary destinations
    #[error("Invalid navigation order: {0}")]
    InvalidOrder(String),

    /// Failed to encode or decode JSON
    #[error("Failed to encode navigation order: {0}")]
    Serialization(#[from] serde_json::Error),
}
