//! Error types for portal operations
//!
//! [`PortalError`] unifies the crate-level errors into the taxonomy the
//! surrounding application presents: validation, insufficient quantity,
//! invalid state transition, permission denied, and not found.

use thiserror::Error;
use uuid::Uuid;

use curie_domain::DomainError;
use curie_identity::IdentityError;
use curie_ledger::LedgerError;
use curie_policy::PolicyError;
use curie_store::StoreError;

/// Portal error types.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The policy decision was Deny.
    ///
    /// Deliberately detail-free: a denied actor sees this whether or not
    /// the entity exists.
    #[error("Permission denied")]
    PermissionDenied,

    /// The referenced entity does not exist (only surfaced after an Allow)
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind
        kind: &'static str,
        /// The id that was looked up
        id: Uuid,
    },

    /// Identity resolution failed
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Domain validation or state-machine guard failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Ledger operation failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Repository operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for portal operations.
pub type PortalResult<T> = Result<T, PortalError>;

impl From<PolicyError> for PortalError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::PermissionDenied => PortalError::PermissionDenied,
            PolicyError::Store(e) => PortalError::Store(e),
        }
    }
}

impl PortalError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::PermissionDenied => "PERMISSION_DENIED",
            PortalError::NotFound { .. } => "NOT_FOUND",
            PortalError::Identity(e) => e.error_code(),
            PortalError::Domain(e) => e.error_code(),
            PortalError::Ledger(e) => e.error_code(),
            PortalError::Store(_) => "STORE_ERROR",
        }
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            PortalError::PermissionDenied => 403,
            PortalError::NotFound { .. } => 404,
            PortalError::Identity(_) => 401,
            PortalError::Domain(DomainError::Validation(_)) => 400,
            PortalError::Domain(DomainError::InvalidStateTransition { .. }) => 409,
            PortalError::Ledger(LedgerError::Validation(_)) => 400,
            PortalError::Ledger(LedgerError::InsufficientQuantity { .. }) => 409,
            PortalError::Ledger(LedgerError::InvalidStateTransition(_)) => 409,
            PortalError::Ledger(LedgerError::ResourceNotFound(_))
            | PortalError::Ledger(LedgerError::AllocationNotFound(_)) => 404,
            PortalError::Ledger(LedgerError::Store(_)) | PortalError::Store(_) => 500,
        }
    }

    /// Check if this error should be logged at error level.
    ///
    /// Rejected inputs and denials are expected; backend failures are not.
    pub fn is_server_error(&self) -> bool {
        matches!(self, PortalError::Store(e) if e.is_server_error())
            || matches!(self, PortalError::Ledger(e) if e.is_server_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::PermissionDenied.error_code(), "PERMISSION_DENIED");
        assert_eq!(
            PortalError::NotFound {
                kind: "patent",
                id: Uuid::now_v7()
            }
            .error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            PortalError::Ledger(LedgerError::InsufficientQuantity {
                requested: 3,
                available: 2
            })
            .error_code(),
            "INSUFFICIENT_QUANTITY"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PortalError::PermissionDenied.status_code(), 403);
        assert_eq!(
            PortalError::Domain(DomainError::Validation("bad".to_string())).status_code(),
            400
        );
        assert_eq!(
            PortalError::Ledger(LedgerError::InvalidStateTransition(Uuid::now_v7()))
                .status_code(),
            409
        );
    }

    #[test]
    fn test_policy_error_conversion() {
        let err: PortalError = PolicyError::PermissionDenied.into();
        assert!(matches!(err, PortalError::PermissionDenied));
    }
}
