//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Painting not found.
    #[error("painting not found: {0}")]
    PaintingNotFound(Uuid),

    /// Identifier did not parse as a painting ID.
    #[error("invalid painting identifier: {0}")]
    InvalidIdentifier(String),

    /// Stored record failed validation - its attribute document is not
    /// a JSON object.
    #[error("malformed record: painting {0} has a non-object attribute document")]
    MalformedRecord(Uuid),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
