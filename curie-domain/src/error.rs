//! Error types for domain operations
//!
//! This module defines the errors produced by guarded constructors and
//! status transitions in the domain models.

use thiserror::Error;

/// Domain error types.
///
/// These cover input validation and illegal state-machine moves. Both are
/// recoverable by the caller: reject the input and re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation (zero quantity, missing required date, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A status transition that the state machine does not permit
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStateTransition {
        /// Status the entity currently holds
        from: &'static str,
        /// Status the caller asked for
        to: &'static str,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
        }
    }
}
