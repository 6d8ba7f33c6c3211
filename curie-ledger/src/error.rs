//! Error types for ledger operations

use thiserror::Error;
use uuid::Uuid;

use curie_store::StoreError;

/// Ledger error types.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Input failed validation (zero quantity, return before allocation,
    /// administratively unavailable resource)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested quantity exceeds what is currently available.
    ///
    /// Carries the maximum available so the caller can offer a corrected
    /// value.
    #[error("Insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity {
        /// What the caller asked for
        requested: u32,
        /// The most that could be allocated right now
        available: u32,
    },

    /// The allocation is already returned
    #[error("Allocation {0} is already returned")]
    InvalidStateTransition(Uuid),

    /// The referenced resource does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(Uuid),

    /// The referenced allocation does not exist
    #[error("Allocation not found: {0}")]
    AllocationNotFound(Uuid),

    /// The allocation store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            LedgerError::Validation(_) => "VALIDATION_ERROR",
            LedgerError::InsufficientQuantity { .. } => "INSUFFICIENT_QUANTITY",
            LedgerError::InvalidStateTransition(_) => "INVALID_STATE_TRANSITION",
            LedgerError::ResourceNotFound(_) => "RESOURCE_NOT_FOUND",
            LedgerError::AllocationNotFound(_) => "ALLOCATION_NOT_FOUND",
            LedgerError::Store(_) => "STORE_ERROR",
        }
    }

    /// Check if this error should be logged at error level.
    ///
    /// Rejected inputs are expected; storage failures are not.
    pub fn is_server_error(&self) -> bool {
        matches!(self, LedgerError::Store(e) if e.is_server_error())
    }
}
