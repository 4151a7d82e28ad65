//! Store-specific error types and conversions.

use homevalue_core::error::CoreError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema setup failed: {0}")]
    Schema(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Json(e) => CoreError::Serialization(e.to_string()),
            other => CoreError::Storage(other.to_string()),
        }
    }
}
