//! Entity kinds and references
//!
//! Defines the entity kinds the policy engine decides over and the typed
//! reference callers pass into a decision.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity kinds that authorization decisions apply to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Research projects.
    Project,
    /// Uploaded documents.
    Document,
    /// Patent records.
    Patent,
    /// Allocatable resources.
    Resource,
}

impl EntityKind {
    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Document => "document",
            EntityKind::Patent => "patent",
            EntityKind::Resource => "resource",
        }
    }

    /// Parse kind from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "project" => Some(EntityKind::Project),
            "document" => Some(EntityKind::Document),
            "patent" => Some(EntityKind::Patent),
            "resource" => Some(EntityKind::Resource),
            _ => None,
        }
    }
}

/// A typed reference to the entity a decision concerns.
///
/// Resources additionally carry the project context the action concerns:
/// the target project for a checkout, the allocation's project for a
/// return, or the membership context a viewer is claiming. Project-scoped
/// rules cannot match a resource reference without it.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_policy::{EntityKind, EntityRef};
///
/// let id = Uuid::now_v7();
/// let entity = EntityRef::Document(id);
/// assert_eq!(entity.kind(), EntityKind::Document);
/// assert_eq!(entity.id(), id);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntityRef {
    /// A project by id.
    Project(Uuid),
    /// A document by id.
    Document(Uuid),
    /// A patent by id.
    Patent(Uuid),
    /// A resource by id, with the project context the action concerns.
    Resource {
        /// Resource id
        id: Uuid,
        /// Project context (if the action concerns one)
        project_id: Option<Uuid>,
    },
}

impl EntityRef {
    /// Reference a resource with no project context.
    pub fn resource(id: Uuid) -> Self {
        EntityRef::Resource {
            id,
            project_id: None,
        }
    }

    /// Reference a resource together with the project the action concerns.
    pub fn resource_in_project(id: Uuid, project_id: Uuid) -> Self {
        EntityRef::Resource {
            id,
            project_id: Some(project_id),
        }
    }

    /// Get the kind of the referenced entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Project(_) => EntityKind::Project,
            EntityRef::Document(_) => EntityKind::Document,
            EntityRef::Patent(_) => EntityKind::Patent,
            EntityRef::Resource { .. } => EntityKind::Resource,
        }
    }

    /// Get the referenced entity id.
    pub fn id(&self) -> Uuid {
        match self {
            EntityRef::Project(id)
            | EntityRef::Document(id)
            | EntityRef::Patent(id)
            | EntityRef::Resource { id, .. } => *id,
        }
    }
}
