//! Error types for policy evaluation

use thiserror::Error;

use curie_store::StoreError;

/// Policy error types.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The decision was Deny.
    ///
    /// Deliberately carries no detail: a denied actor must see the same
    /// response whether or not the entity exists.
    #[error("Permission denied")]
    PermissionDenied,

    /// Fact gathering failed in a repository
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

impl PolicyError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PolicyError::PermissionDenied => "PERMISSION_DENIED",
            PolicyError::Store(_) => "STORE_ERROR",
        }
    }
}
