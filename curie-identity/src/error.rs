//! Error types for identity resolution

use thiserror::Error;

/// Identity error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// No authenticated user is present on the current request
    #[error("No authenticated actor")]
    NotAuthenticated,

    /// The session references a user that no longer exists
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// The stored role id does not map to a known role
    #[error("Unknown role rank: {0}")]
    UnknownRole(u8),
}

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

impl IdentityError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            IdentityError::NotAuthenticated => "NOT_AUTHENTICATED",
            IdentityError::UnknownUser(_) => "UNKNOWN_USER",
            IdentityError::UnknownRole(_) => "UNKNOWN_ROLE",
        }
    }
}
