//! Storage-specific error type wrapping file and JSON errors.

use shelf_domain::error::ShelfError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing, or creating the data file failed.
    #[error("data file I/O error")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the collection.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for ShelfError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
