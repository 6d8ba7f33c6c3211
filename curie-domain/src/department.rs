//! Department domain models
//!
//! This module provides the Department entity. Departments are the
//! organizational units that scope resources, projects, and the
//! department-head authorization rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A department within the research organization.
///
/// Resources and projects may carry a `department_id` pointing here; the
/// policy engine compares it against an actor's department when evaluating
/// department-head scope.
///
/// # Examples
///
/// ```
/// use curie_domain::Department;
///
/// let dept = Department::new("Materials Science", "materials-science");
/// assert_eq!(dept.name, "Materials Science");
/// assert!(dept.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across the portal)
    pub slug: String,

    /// Optional description
    pub description: Option<String>,

    /// User who heads this department (if assigned)
    pub head_id: Option<Uuid>,

    /// Whether the department is active
    pub is_active: bool,

    /// When the department was created
    pub created_at: DateTime<Utc>,

    /// When the department was last updated
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Creates a new active department.
    ///
    /// # Arguments
    ///
    /// * `name` - The department name
    /// * `slug` - URL-friendly slug (must be unique)
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_domain::Department;
    ///
    /// let dept = Department::new("Applied Physics", "applied-physics");
    /// assert!(dept.head_id.is_none());
    /// ```
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            head_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the department head.
    ///
    /// # Arguments
    ///
    /// * `head_id` - The user ID of the department head
    pub fn with_head(mut self, head_id: Uuid) -> Self {
        self.head_id = Some(head_id);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_creation() {
        let dept = Department::new("Materials Science", "materials-science");

        assert_eq!(dept.name, "Materials Science");
        assert_eq!(dept.slug, "materials-science");
        assert!(dept.is_active);
        assert!(dept.head_id.is_none());
    }

    #[test]
    fn test_department_with_head() {
        let head_id = Uuid::now_v7();
        let dept = Department::new("Chemistry", "chemistry").with_head(head_id);

        assert_eq!(dept.head_id, Some(head_id));
    }
}
