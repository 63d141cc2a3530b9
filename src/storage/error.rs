/// Error types for storage operations

use crate::types::CityId;
use thiserror::Error;

/// Storage operation errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// No adjacency record from `from` leads to `to`
    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: CityId, to: CityId },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
