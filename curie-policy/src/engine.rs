//! Policy engine
//!
//! Wraps the pure rule table with the async fact gathering every decision
//! needs: owner ids, department ids (direct or via the associated project),
//! and membership sets, all read through the repository contracts.

use std::sync::Arc;

use curie_identity::Actor;
use curie_store::{DocumentRepo, PatentRepo, ProjectRepo, ResourceRepo};

use crate::action::AccessAction;
use crate::decision::Decision;
use crate::entity::{EntityKind, EntityRef};
use crate::error::PolicyResult;
use crate::rules::{self, EntityFacts};

/// The authorization decision service.
///
/// Holds the repositories it reads facts from; owns no state of its own and
/// is safe to share and call concurrently.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use uuid::Uuid;
/// use curie_policy::{AccessAction, EntityRef, PolicyEngine};
/// use curie_identity::{Actor, RoleRank};
/// use curie_store::{MemoryDocumentRepo, MemoryPatentRepo, MemoryProjectRepo, MemoryResourceRepo};
///
/// # async fn demo() {
/// let engine = PolicyEngine::new(
///     Arc::new(MemoryProjectRepo::new()),
///     Arc::new(MemoryDocumentRepo::new()),
///     Arc::new(MemoryPatentRepo::new()),
///     Arc::new(MemoryResourceRepo::new()),
/// );
///
/// let actor = Actor::new(Uuid::now_v7(), RoleRank::Admin);
/// let decision = engine
///     .decide(&actor, AccessAction::View, &EntityRef::Project(Uuid::now_v7()))
///     .await
///     .unwrap();
/// assert!(decision.is_allow());
/// # }
/// ```
pub struct PolicyEngine {
    projects: Arc<dyn ProjectRepo>,
    documents: Arc<dyn DocumentRepo>,
    patents: Arc<dyn PatentRepo>,
    resources: Arc<dyn ResourceRepo>,
}

impl PolicyEngine {
    /// Create an engine over the given repositories.
    pub fn new(
        projects: Arc<dyn ProjectRepo>,
        documents: Arc<dyn DocumentRepo>,
        patents: Arc<dyn PatentRepo>,
        resources: Arc<dyn ResourceRepo>,
    ) -> Self {
        Self {
            projects,
            documents,
            patents,
            resources,
        }
    }

    /// Decide whether `actor` may perform `action` on the referenced entity.
    ///
    /// A decision about an entity that does not exist evaluates against
    /// empty facts and so denies every non-admin: callers can surface the
    /// same response for "forbidden" and "missing" without a second check.
    ///
    /// # Errors
    ///
    /// Only repository failures propagate; a denial is a `Decision`, not an
    /// error.
    pub async fn decide(
        &self,
        actor: &Actor,
        action: AccessAction,
        entity: &EntityRef,
    ) -> PolicyResult<Decision> {
        let facts = self.gather_facts(entity).await?;
        let decision = rules::evaluate(actor, action, &facts);

        tracing::debug!(
            actor = %actor.id,
            role = actor.role.as_str(),
            action = action.as_str(),
            kind = facts.kind.as_str(),
            entity = %entity.id(),
            allowed = decision.is_allow(),
            "Access decision"
        );

        Ok(decision)
    }

    /// Assemble the fact snapshot for an entity reference.
    async fn gather_facts(&self, entity: &EntityRef) -> PolicyResult<EntityFacts> {
        let facts = match entity {
            EntityRef::Project(id) => match self.projects.get(*id).await? {
                Some(project) => EntityFacts::for_project(&project),
                None => EntityFacts::missing(EntityKind::Project),
            },
            EntityRef::Document(id) => match self.documents.get(*id).await? {
                Some(document) => {
                    let project = match document.project_id {
                        Some(project_id) => self.projects.get(project_id).await?,
                        None => None,
                    };
                    EntityFacts::for_document(&document, project.as_ref())
                }
                None => EntityFacts::missing(EntityKind::Document),
            },
            EntityRef::Patent(id) => match self.patents.get(*id).await? {
                Some(patent) => {
                    let project = match patent.project_id {
                        Some(project_id) => self.projects.get(project_id).await?,
                        None => None,
                    };
                    EntityFacts::for_patent(&patent, project.as_ref())
                }
                None => EntityFacts::missing(EntityKind::Patent),
            },
            EntityRef::Resource { id, project_id } => match self.resources.get(*id).await? {
                Some(resource) => {
                    let project = match project_id {
                        Some(project_id) => self.projects.get(*project_id).await?,
                        None => None,
                    };
                    EntityFacts::for_resource(&resource, project.as_ref())
                }
                None => EntityFacts::missing(EntityKind::Resource),
            },
        };
        Ok(facts)
    }
}
