//! Actor and role rank types
//!
//! This module defines the authenticated actor value and the closed role
//! enumeration. Role ranks carry the numeric ids the rest of the
//! organization uses (1 = admin through 5 = faculty), but authority is NOT
//! linear in the rank: researchers and faculty hold narrow membership-scoped
//! authority, while department heads are scoped to their department rather
//! than globally senior.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user, as seen by the policy engine and ledger.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_identity::{Actor, RoleRank};
///
/// let dept_id = Uuid::now_v7();
/// let actor = Actor::new(Uuid::now_v7(), RoleRank::DepartmentHead).with_department(dept_id);
/// assert!(actor.in_department(dept_id));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    /// User ID
    pub id: Uuid,

    /// Role rank
    pub role: RoleRank,

    /// Department the actor belongs to (if any)
    pub department_id: Option<Uuid>,
}

impl Actor {
    /// Creates a new actor with no department.
    ///
    /// # Arguments
    ///
    /// * `id` - The user ID
    /// * `role` - The user's role rank
    pub fn new(id: Uuid, role: RoleRank) -> Self {
        Self {
            id,
            role,
            department_id: None,
        }
    }

    /// Set the actor's department.
    pub fn with_department(mut self, department_id: Uuid) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Check whether the actor belongs to the given department.
    ///
    /// An actor with no department belongs to none.
    pub fn in_department(&self, department_id: Uuid) -> bool {
        self.department_id == Some(department_id)
    }
}

/// Role ranks across the portal.
///
/// The numeric discriminants match the role ids used throughout the
/// organization's records. Lower rank means broader authority, but the
/// ordering is not a strict hierarchy (see the module docs).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoleRank {
    /// Full access to everything
    Admin = 1,

    /// Owns projects; manages their documents, patents, and allocations
    ProjectManager = 2,

    /// Membership-scoped read access
    Researcher = 3,

    /// Department-scoped view/edit/allocate access
    DepartmentHead = 4,

    /// Membership-scoped read access (teaching staff)
    Faculty = 5,
}

impl RoleRank {
    /// Get the numeric rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_identity::RoleRank;
    ///
    /// assert_eq!(RoleRank::Admin.rank(), 1);
    /// assert_eq!(RoleRank::Faculty.rank(), 5);
    /// ```
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Look up a role by its numeric rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_identity::RoleRank;
    ///
    /// assert_eq!(RoleRank::from_rank(2), Some(RoleRank::ProjectManager));
    /// assert_eq!(RoleRank::from_rank(9), None);
    /// ```
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Admin),
            2 => Some(Self::ProjectManager),
            3 => Some(Self::Researcher),
            4 => Some(Self::DepartmentHead),
            5 => Some(Self::Faculty),
            _ => None,
        }
    }

    /// Parse role from string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_identity::RoleRank;
    ///
    /// assert_eq!(RoleRank::parse("admin"), Some(RoleRank::Admin));
    /// assert_eq!(RoleRank::parse("PROJECT_MANAGER"), Some(RoleRank::ProjectManager));
    /// assert_eq!(RoleRank::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "project_manager" | "project manager" => Some(Self::ProjectManager),
            "researcher" => Some(Self::Researcher),
            "department_head" | "department head" => Some(Self::DepartmentHead),
            "faculty" => Some(Self::Faculty),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ProjectManager => "project_manager",
            Self::Researcher => "researcher",
            Self::DepartmentHead => "department_head",
            Self::Faculty => "faculty",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ProjectManager => "Project Manager",
            Self::Researcher => "Researcher",
            Self::DepartmentHead => "Department Head",
            Self::Faculty => "Faculty",
        }
    }

    /// Check if this is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role's authority is scoped by project membership.
    ///
    /// Researchers and faculty only see what their project memberships
    /// grant them.
    pub fn is_membership_scoped(&self) -> bool {
        matches!(self, Self::Researcher | Self::Faculty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_round_trip() {
        for role in [
            RoleRank::Admin,
            RoleRank::ProjectManager,
            RoleRank::Researcher,
            RoleRank::DepartmentHead,
            RoleRank::Faculty,
        ] {
            assert_eq!(RoleRank::from_rank(role.rank()), Some(role));
        }
        assert_eq!(RoleRank::from_rank(0), None);
        assert_eq!(RoleRank::from_rank(6), None);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(RoleRank::parse("admin"), Some(RoleRank::Admin));
        assert_eq!(RoleRank::parse("department head"), Some(RoleRank::DepartmentHead));
        assert_eq!(RoleRank::parse("FACULTY"), Some(RoleRank::Faculty));
        assert_eq!(RoleRank::parse("invalid"), None);
    }

    #[test]
    fn test_role_predicates() {
        assert!(RoleRank::Admin.is_admin());
        assert!(!RoleRank::ProjectManager.is_admin());

        assert!(RoleRank::Researcher.is_membership_scoped());
        assert!(RoleRank::Faculty.is_membership_scoped());
        assert!(!RoleRank::DepartmentHead.is_membership_scoped());
        assert!(!RoleRank::Admin.is_membership_scoped());
    }

    #[test]
    fn test_actor_department() {
        let dept_id = Uuid::now_v7();
        let other = Uuid::now_v7();

        let actor = Actor::new(Uuid::now_v7(), RoleRank::DepartmentHead).with_department(dept_id);
        assert!(actor.in_department(dept_id));
        assert!(!actor.in_department(other));

        let no_dept = Actor::new(Uuid::now_v7(), RoleRank::Researcher);
        assert!(!no_dept.in_department(dept_id));
    }
}
