//! The ordered rule table
//!
//! [`evaluate`] is the portal's one authorization decision point: a pure
//! function from `(actor, action, facts)` to a [`Decision`]. The rule
//! families run in a fixed order and the first match wins; the
//! document-view privacy gate runs ahead of the scope families so none of
//! them can leak a view grant it is supposed to narrow.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use curie_domain::{Document, Patent, Project, Resource};
use curie_identity::{Actor, RoleRank};

use crate::action::AccessAction;
use crate::decision::{Decision, GrantReason};
use crate::entity::EntityKind;

/// The facts about a project that the rule table consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectFacts {
    /// Project id
    pub id: Uuid,

    /// User who created the project
    pub created_by: Uuid,

    /// Department the project belongs to (if any)
    pub department_id: Option<Uuid>,

    /// Ids of all project members
    pub member_ids: HashSet<Uuid>,
}

impl ProjectFacts {
    /// Snapshot the policy-relevant facts of a project.
    pub fn of(project: &Project) -> Self {
        Self {
            id: project.id,
            created_by: project.created_by,
            department_id: project.department_id,
            member_ids: project.member_ids().into_iter().collect(),
        }
    }
}

/// The fact snapshot a decision is evaluated against.
///
/// The engine assembles one of these from the repositories; tests build
/// them directly. An absent fact (`None`) simply means the rules that need
/// it cannot match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityFacts {
    /// What kind of entity the decision concerns
    pub kind: EntityKind,

    /// The entity's creator/uploader (if the entity exists)
    pub owner_id: Option<Uuid>,

    /// The entity's department, directly or via its associated project
    pub department_id: Option<Uuid>,

    /// The associated project (for a project entity, itself)
    pub project: Option<ProjectFacts>,
}

impl EntityFacts {
    /// Facts for a decision about a project.
    pub fn for_project(project: &Project) -> Self {
        Self {
            kind: EntityKind::Project,
            owner_id: Some(project.created_by),
            department_id: project.department_id,
            project: Some(ProjectFacts::of(project)),
        }
    }

    /// Facts for a decision about a document, with its project if associated.
    pub fn for_document(document: &Document, project: Option<&Project>) -> Self {
        Self {
            kind: EntityKind::Document,
            owner_id: Some(document.uploaded_by),
            department_id: project.and_then(|p| p.department_id),
            project: project.map(ProjectFacts::of),
        }
    }

    /// Facts for a decision about a patent, with its project if associated.
    pub fn for_patent(patent: &Patent, project: Option<&Project>) -> Self {
        Self {
            kind: EntityKind::Patent,
            owner_id: Some(patent.created_by),
            department_id: project.and_then(|p| p.department_id),
            project: project.map(ProjectFacts::of),
        }
    }

    /// Facts for a decision about a resource, with the project context the
    /// action concerns.
    ///
    /// A resource's department is its own when set, otherwise the context
    /// project's. Resources have no owner: nobody reaches them through the
    /// ownership rule.
    pub fn for_resource(resource: &Resource, project: Option<&Project>) -> Self {
        Self {
            kind: EntityKind::Resource,
            owner_id: None,
            department_id: resource
                .department_id
                .or_else(|| project.and_then(|p| p.department_id)),
            project: project.map(ProjectFacts::of),
        }
    }

    /// Facts for an entity that does not exist.
    ///
    /// Nothing can match except the admin override, so missing entities
    /// deny exactly like forbidden ones.
    pub fn missing(kind: EntityKind) -> Self {
        Self {
            kind,
            owner_id: None,
            department_id: None,
            project: None,
        }
    }
}

/// Evaluate the rule table for one decision.
///
/// Pure and side-effect-free; safe to call concurrently.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_policy::{rules, AccessAction, Decision, EntityFacts};
/// use curie_identity::{Actor, RoleRank};
/// use curie_domain::Document;
///
/// let uploader = Uuid::now_v7();
/// let document = Document::new("Lab notes", uploader);
/// let facts = EntityFacts::for_document(&document, None);
///
/// // Uploader may view their own document
/// let owner = Actor::new(uploader, RoleRank::Researcher);
/// assert!(rules::evaluate(&owner, AccessAction::View, &facts).is_allow());
///
/// // Anyone else may not
/// let stranger = Actor::new(Uuid::now_v7(), RoleRank::ProjectManager);
/// assert_eq!(rules::evaluate(&stranger, AccessAction::View, &facts), Decision::Deny);
/// ```
pub fn evaluate(actor: &Actor, action: AccessAction, facts: &EntityFacts) -> Decision {
    // Rule 1: admin override.
    if actor.role.is_admin() {
        return Decision::Allow(GrantReason::AdminOverride);
    }

    // Rule 6: document-view privacy gate. Runs ahead of the scope families
    // so none of them can leak a view grant; the only grant left below the
    // admin override is ownership.
    if facts.kind == EntityKind::Document && action == AccessAction::View {
        return if facts.owner_id == Some(actor.id) {
            Decision::Allow(GrantReason::Ownership)
        } else {
            Decision::Deny
        };
    }

    // Rule 2: ownership. Grants view/edit/delete, never allocate.
    if action != AccessAction::Allocate && facts.owner_id == Some(actor.id) {
        return Decision::Allow(GrantReason::Ownership);
    }

    // Rule 3: project-manager scope.
    if actor.role == RoleRank::ProjectManager {
        let owns_project = facts
            .project
            .as_ref()
            .map(|p| p.created_by == actor.id)
            .unwrap_or(false);

        let granted = match facts.kind {
            EntityKind::Project => {
                matches!(action, AccessAction::View | AccessAction::Edit)
            }
            EntityKind::Document | EntityKind::Patent => {
                owns_project && matches!(action, AccessAction::Edit | AccessAction::Delete)
            }
            EntityKind::Resource => owns_project && action == AccessAction::Allocate,
        };
        if granted {
            return Decision::Allow(GrantReason::ProjectManagerScope);
        }
    }

    // Rule 4: department-head scope.
    if actor.role == RoleRank::DepartmentHead
        && matches!(
            action,
            AccessAction::View | AccessAction::Edit | AccessAction::Allocate
        )
    {
        if let (Some(entity_dept), Some(actor_dept)) = (facts.department_id, actor.department_id) {
            if entity_dept == actor_dept {
                return Decision::Allow(GrantReason::DepartmentScope);
            }
        }
    }

    // Rule 5: membership scope.
    if actor.role.is_membership_scoped() && action == AccessAction::View {
        if let Some(project) = &facts.project {
            if project.member_ids.contains(&actor.id) {
                return Decision::Allow(GrantReason::MembershipScope);
            }
        }
    }

    // Rule 7: default deny.
    Decision::Deny
}
