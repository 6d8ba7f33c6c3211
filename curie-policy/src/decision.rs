//! Decision types
//!
//! The outcome of a policy evaluation. Allow decisions carry the rule
//! family that granted access, which audit logging and tests lean on.

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};

/// The outcome of a policy evaluation.
///
/// # Examples
///
/// ```
/// use curie_policy::{Decision, GrantReason};
///
/// let allow = Decision::Allow(GrantReason::Ownership);
/// assert!(allow.is_allow());
/// assert!(allow.require().is_ok());
///
/// assert!(Decision::Deny.require().is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Access granted, by the named rule family.
    Allow(GrantReason),
    /// Access denied.
    Deny,
}

impl Decision {
    /// Check whether access was granted.
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    /// Get the grant reason, if access was granted.
    pub fn reason(&self) -> Option<GrantReason> {
        match self {
            Decision::Allow(reason) => Some(*reason),
            Decision::Deny => None,
        }
    }

    /// Convert a denial into `PolicyError::PermissionDenied`.
    ///
    /// Mutating call sites use this to turn a decision into a typed error
    /// before touching any state.
    pub fn require(&self) -> PolicyResult<()> {
        match self {
            Decision::Allow(_) => Ok(()),
            Decision::Deny => Err(PolicyError::PermissionDenied),
        }
    }
}

/// The rule family that granted access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrantReason {
    /// Rule 1: the actor is an admin.
    AdminOverride,

    /// Rule 2: the actor created/uploaded the entity.
    Ownership,

    /// Rule 3: project-manager authority over an owned project's entities.
    ProjectManagerScope,

    /// Rule 4: department head acting within their department.
    DepartmentScope,

    /// Rule 5: project membership.
    MembershipScope,
}

impl GrantReason {
    /// Get the string representation of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantReason::AdminOverride => "admin_override",
            GrantReason::Ownership => "ownership",
            GrantReason::ProjectManagerScope => "project_manager_scope",
            GrantReason::DepartmentScope => "department_scope",
            GrantReason::MembershipScope => "membership_scope",
        }
    }
}
