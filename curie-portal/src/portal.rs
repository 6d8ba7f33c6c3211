//! Portal facade implementation
//!
//! One struct owning the identity seam, the policy engine, the ledger, and
//! the patent repository, exposing the operations page collaborators call.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use curie_domain::{Patent, PatentStatus};
use curie_identity::Identity;
use curie_ledger::{Allocation, AllocationRequest, AllocationStore, ResourceLedger};
use curie_policy::{
    rules, AccessAction, Decision, EntityFacts, EntityKind, EntityRef, PolicyEngine,
};
use curie_store::{DocumentRepo, PatentRepo, ProjectRepo, ResourceRepo};

use crate::error::{PortalError, PortalResult};

/// The operation surface of the portal core.
///
/// Every method resolves the actor, asks the policy engine, and only then
/// touches the ledger or a repository. See the crate docs for the masking
/// and decide-before-mutate rules this type enforces.
pub struct Portal {
    identity: Arc<dyn Identity>,
    engine: PolicyEngine,
    ledger: ResourceLedger,
    patents: Arc<dyn PatentRepo>,
}

impl std::fmt::Debug for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portal").finish()
    }
}

impl Portal {
    /// Wire a portal over the given collaborators.
    pub fn new(
        identity: Arc<dyn Identity>,
        projects: Arc<dyn ProjectRepo>,
        documents: Arc<dyn DocumentRepo>,
        patents: Arc<dyn PatentRepo>,
        resources: Arc<dyn ResourceRepo>,
        allocations: Arc<dyn AllocationStore>,
    ) -> Self {
        let engine = PolicyEngine::new(
            projects,
            documents,
            patents.clone(),
            resources.clone(),
        );
        let ledger = ResourceLedger::new(resources, allocations);
        Self {
            identity,
            engine,
            ledger,
            patents,
        }
    }

    /// The ledger, for read-only projections (allocation listings,
    /// utilization, stats).
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Decide whether the current actor may perform `action` on the
    /// referenced entity.
    pub async fn decide(&self, action: AccessAction, entity: &EntityRef) -> PortalResult<Decision> {
        let actor = self.identity.current_actor().await?;
        Ok(self.engine.decide(&actor, action, entity).await?)
    }

    /// Allocate a quantity of a resource to a project.
    ///
    /// Policy-checked as `allocate` on the resource with the target project
    /// as context; the ledger then re-validates availability atomically
    /// before committing.
    pub async fn allocate(&self, request: AllocationRequest) -> PortalResult<Allocation> {
        let actor = self.identity.current_actor().await?;
        let entity = EntityRef::resource_in_project(request.resource_id, request.project_id);
        self.engine
            .decide(&actor, AccessAction::Allocate, &entity)
            .await?
            .require()?;

        Ok(self.ledger.allocate(request).await?)
    }

    /// Record the return of an allocation.
    ///
    /// Policy-checked as `allocate` on the allocation's resource with the
    /// allocation's project as context.
    pub async fn return_resource(
        &self,
        allocation_id: Uuid,
        return_date: NaiveDate,
        notes: Option<String>,
    ) -> PortalResult<Allocation> {
        let actor = self.identity.current_actor().await?;

        match self.ledger.allocation(allocation_id).await? {
            Some(allocation) => {
                let entity = EntityRef::resource_in_project(
                    allocation.resource_id,
                    allocation.project_id,
                );
                self.engine
                    .decide(&actor, AccessAction::Allocate, &entity)
                    .await?
                    .require()?;

                Ok(self
                    .ledger
                    .return_resource(allocation_id, return_date, notes)
                    .await?)
            }
            None => {
                // Unknown allocation: evaluate against empty facts so only
                // actors the rules would let through see NotFound; everyone
                // else gets the same denial an existing record would give.
                rules::evaluate(
                    &actor,
                    AccessAction::Allocate,
                    &EntityFacts::missing(EntityKind::Resource),
                )
                .require()?;
                Err(PortalError::NotFound {
                    kind: "allocation",
                    id: allocation_id,
                })
            }
        }
    }

    /// How much of a resource can still be allocated.
    ///
    /// Policy-checked as `view` on the resource.
    pub async fn available_quantity(&self, resource_id: Uuid) -> PortalResult<u32> {
        let actor = self.identity.current_actor().await?;
        self.engine
            .decide(&actor, AccessAction::View, &EntityRef::resource(resource_id))
            .await?
            .require()?;

        Ok(self.ledger.available_quantity(resource_id).await?)
    }

    /// How much of a resource is in use, as a percentage of its total.
    ///
    /// Policy-checked as `view` on the resource.
    pub async fn usage_percentage(&self, resource_id: Uuid) -> PortalResult<f64> {
        let actor = self.identity.current_actor().await?;
        self.engine
            .decide(&actor, AccessAction::View, &EntityRef::resource(resource_id))
            .await?
            .require()?;

        Ok(self.ledger.usage_percentage(resource_id).await?)
    }

    /// Move a patent to a new status, enforcing the state-machine guards.
    ///
    /// Policy-checked as `edit` on the patent.
    pub async fn transition_patent_status(
        &self,
        patent_id: Uuid,
        new_status: PatentStatus,
        filing_date: Option<NaiveDate>,
        approval_date: Option<NaiveDate>,
    ) -> PortalResult<Patent> {
        let actor = self.identity.current_actor().await?;
        self.engine
            .decide(&actor, AccessAction::Edit, &EntityRef::Patent(patent_id))
            .await?
            .require()?;

        let mut patent = self
            .patents
            .get(patent_id)
            .await?
            .ok_or(PortalError::NotFound {
                kind: "patent",
                id: patent_id,
            })?;

        patent.transition_to(new_status, filing_date, approval_date)?;
        self.patents.update(patent.clone()).await?;

        tracing::debug!(
            patent = %patent.id,
            status = patent.status.as_str(),
            "Patent status transition committed"
        );

        Ok(patent)
    }
}
