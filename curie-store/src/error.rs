//! Error types for repository operations

use thiserror::Error;
use uuid::Uuid;

/// Store error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced entity does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind ("project", "document", ...)
        kind: &'static str,
        /// The id that was looked up
        id: Uuid,
    },

    /// Insert collided with an existing entity
    #[error("{kind} already exists: {id}")]
    Duplicate {
        /// Entity kind
        kind: &'static str,
        /// The colliding id
        id: Uuid,
    },

    /// Backend failure (connection loss, serialization, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Check if this error should be logged at error level.
    ///
    /// Missing rows are expected; backend failures are not.
    pub fn is_server_error(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}
