//! Project domain models
//!
//! This module provides the Project entity and its membership records.
//! Projects are the unit of ownership and membership scoping: documents,
//! patents, and resource allocations all associate back to a project by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A research project.
///
/// Ownership is the `created_by` user; department scoping is the optional
/// `department_id`. The membership set drives the membership-scope
/// authorization rules for researchers and faculty.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_domain::{Project, ProjectStatus};
///
/// let creator = Uuid::now_v7();
/// let project = Project::new("Polymer battery study", creator);
/// assert_eq!(project.created_by, creator);
/// assert_eq!(project.status, ProjectStatus::Proposed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// Project description
    pub description: Option<String>,

    /// User who created the project (the owner)
    pub created_by: Uuid,

    /// Department this project belongs to (if scoped to one)
    pub department_id: Option<Uuid>,

    /// Current lifecycle status
    pub status: ProjectStatus,

    /// Project members with their roles and responsibilities
    #[serde(default)]
    pub members: Vec<ProjectMember>,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project in the `Proposed` status.
    ///
    /// # Arguments
    ///
    /// * `name` - Project name
    /// * `created_by` - User who created the project
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use curie_domain::Project;
    ///
    /// let creator = Uuid::now_v7();
    /// let project = Project::new("Gene therapy pilot", creator);
    /// assert!(project.members.is_empty());
    /// ```
    pub fn new(name: impl Into<String>, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: None,
            created_by,
            department_id: None,
            status: ProjectStatus::Proposed,
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the department this project belongs to.
    pub fn with_department(mut self, department_id: Uuid) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a member to the project.
    ///
    /// Adding a user who is already a member is a no-op; the existing
    /// membership record is kept unchanged.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user to add
    /// * `role` - The member's role within the project (free-form title)
    pub fn add_member(&mut self, user_id: Uuid, role: impl Into<String>) {
        if self.is_member(user_id) {
            return;
        }
        self.members.push(ProjectMember::new(user_id, role));
        self.updated_at = Utc::now();
    }

    /// Remove a member from the project.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user to remove
    pub fn remove_member(&mut self, user_id: Uuid) {
        let before = self.members.len();
        self.members.retain(|m| m.user_id != user_id);
        if self.members.len() != before {
            self.updated_at = Utc::now();
        }
    }

    /// Check whether a user is a member of this project.
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }

    /// Get a user's membership record, if any.
    pub fn member(&self, user_id: Uuid) -> Option<&ProjectMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Get the member user ids.
    pub fn member_ids(&self) -> Vec<Uuid> {
        self.members.iter().map(|m| m.user_id).collect()
    }
}

/// A user's membership in a project.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_domain::ProjectMember;
///
/// let user_id = Uuid::now_v7();
/// let member = ProjectMember::new(user_id, "research assistant");
/// assert_eq!(member.role, "research assistant");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    /// User ID
    pub user_id: Uuid,

    /// The member's role within the project (free-form title)
    pub role: String,

    /// What the member is responsible for
    pub responsibilities: Option<String>,

    /// When the user was added
    pub added_at: DateTime<Utc>,
}

impl ProjectMember {
    /// Creates a new membership record.
    pub fn new(user_id: Uuid, role: impl Into<String>) -> Self {
        Self {
            user_id,
            role: role.into(),
            responsibilities: None,
            added_at: Utc::now(),
        }
    }

    /// Set the member's responsibilities.
    pub fn with_responsibilities(mut self, responsibilities: impl Into<String>) -> Self {
        self.responsibilities = Some(responsibilities.into());
        self
    }
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Proposed but not yet started
    Proposed,

    /// Actively running
    Active,

    /// Finished
    Completed,

    /// Archived (soft delete)
    Archived,
}

impl ProjectStatus {
    /// Get the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Parse status from string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_domain::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
    /// assert_eq!(ProjectStatus::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "proposed" => Some(Self::Proposed),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Proposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let creator = Uuid::now_v7();
        let project = Project::new("Polymer battery study", creator);

        assert_eq!(project.name, "Polymer battery study");
        assert_eq!(project.created_by, creator);
        assert_eq!(project.status, ProjectStatus::Proposed);
        assert!(project.department_id.is_none());
        assert!(project.members.is_empty());
    }

    #[test]
    fn test_project_with_department() {
        let creator = Uuid::now_v7();
        let dept_id = Uuid::now_v7();
        let project = Project::new("Gene therapy pilot", creator).with_department(dept_id);

        assert_eq!(project.department_id, Some(dept_id));
    }

    #[test]
    fn test_membership() {
        let creator = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let mut project = Project::new("Membership test", creator);

        assert!(!project.is_member(user_id));

        project.add_member(user_id, "research assistant");
        assert!(project.is_member(user_id));
        assert_eq!(project.member(user_id).unwrap().role, "research assistant");

        // Duplicate add is a no-op
        project.add_member(user_id, "different role");
        assert_eq!(project.members.len(), 1);
        assert_eq!(project.member(user_id).unwrap().role, "research assistant");

        project.remove_member(user_id);
        assert!(!project.is_member(user_id));
    }

    #[test]
    fn test_member_ids() {
        let creator = Uuid::now_v7();
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let mut project = Project::new("Roster", creator);
        project.add_member(a, "lead");
        project.add_member(b, "analyst");

        let ids = project.member_ids();
        assert!(ids.contains(&a));
        assert!(ids.contains(&b));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_project_status_parse() {
        assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("ARCHIVED"), Some(ProjectStatus::Archived));
        assert_eq!(ProjectStatus::parse("invalid"), None);
    }
}
