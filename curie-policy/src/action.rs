//! Access actions
//!
//! Defines the actions an actor can attempt against a portal entity.

use serde::{Deserialize, Serialize};

/// Actions the policy engine decides on.
///
/// - **View**: open/read an entity
/// - **Edit**: modify an existing entity
/// - **Delete**: remove an entity
/// - **Allocate**: check out or return a resource (resource-specific)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    /// Open/read an entity.
    View,

    /// Modify an existing entity.
    Edit,

    /// Remove an entity.
    Delete,

    /// Check out or return a resource.
    Allocate,
}

impl AccessAction {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessAction::View => "view",
            AccessAction::Edit => "edit",
            AccessAction::Delete => "delete",
            AccessAction::Allocate => "allocate",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Example
    ///
    /// ```
    /// use curie_policy::AccessAction;
    ///
    /// assert_eq!(AccessAction::parse("view"), Some(AccessAction::View));
    /// assert_eq!(AccessAction::parse("read"), Some(AccessAction::View)); // Alias
    /// assert_eq!(AccessAction::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "view" | "read" | "open" => Some(AccessAction::View),
            "edit" | "update" | "modify" | "write" => Some(AccessAction::Edit),
            "delete" | "remove" => Some(AccessAction::Delete),
            "allocate" | "checkout" | "return" => Some(AccessAction::Allocate),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            AccessAction::View,
            AccessAction::Edit,
            AccessAction::Delete,
            AccessAction::Allocate,
        ]
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        matches!(self, AccessAction::View)
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, AccessAction::Delete)
    }
}
