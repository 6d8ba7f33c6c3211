//! End-to-end tests for the portal operation surface.
//!
//! These drive the full wiring (identity, policy engine, ledger, and
//! in-memory repositories) the way page collaborators do, covering the
//! authorization matrix, the allocation lifecycle, and the concurrent
//! checkout race.

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use curie_domain::{Document, Patent, PatentStatus, Project, Resource, ResourceKind};
use curie_identity::{Actor, RoleRank, StaticIdentity};
use curie_ledger::{AllocationRequest, MemoryAllocationStore};
use curie_policy::{AccessAction, EntityRef};
use curie_portal::Portal;
use curie_store::{
    DocumentRepo, MemoryDocumentRepo, MemoryPatentRepo, MemoryProjectRepo, MemoryResourceRepo,
    PatentRepo, ProjectRepo, ResourceRepo,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Shared backing stores, so portals for different actors see one world.
#[derive(Clone)]
struct World {
    projects: Arc<MemoryProjectRepo>,
    documents: Arc<MemoryDocumentRepo>,
    patents: Arc<MemoryPatentRepo>,
    resources: Arc<MemoryResourceRepo>,
    allocations: Arc<MemoryAllocationStore>,
}

impl World {
    fn new() -> Self {
        Self {
            projects: Arc::new(MemoryProjectRepo::new()),
            documents: Arc::new(MemoryDocumentRepo::new()),
            patents: Arc::new(MemoryPatentRepo::new()),
            resources: Arc::new(MemoryResourceRepo::new()),
            allocations: Arc::new(MemoryAllocationStore::new()),
        }
    }

    fn portal_for(&self, actor: Actor) -> Portal {
        Portal::new(
            Arc::new(StaticIdentity::new(actor)),
            self.projects.clone(),
            self.documents.clone(),
            self.patents.clone(),
            self.resources.clone(),
            self.allocations.clone(),
        )
    }
}

#[tokio::test]
async fn admin_views_any_document() {
    let world = World::new();
    let document = Document::new("Someone's upload", Uuid::now_v7());
    let doc_id = document.id;
    world.documents.insert(document).await.unwrap();

    let admin = world.portal_for(Actor::new(Uuid::now_v7(), RoleRank::Admin));
    let decision = admin
        .decide(AccessAction::View, &EntityRef::Document(doc_id))
        .await
        .unwrap();
    assert!(decision.is_allow());
}

#[tokio::test]
async fn project_manager_document_privacy_vs_allocation_rights() {
    let world = World::new();
    let pm_id = Uuid::now_v7();

    // The PM created the project; a teammate uploaded a document under it.
    let project = Project::new("Battery study", pm_id);
    let project_id = project.id;
    let document = Document::new("Teammate upload", Uuid::now_v7()).with_project(project_id);
    let doc_id = document.id;
    let resource = Resource::new("Microscope", ResourceKind::Equipment, 2, "unit").unwrap();
    let resource_id = resource.id;

    world.projects.insert(project).await.unwrap();
    world.documents.insert(document).await.unwrap();
    world.resources.insert(resource).await.unwrap();

    let pm = world.portal_for(Actor::new(pm_id, RoleRank::ProjectManager));

    // Privacy override: the PM may not open the teammate's document...
    let view = pm
        .decide(AccessAction::View, &EntityRef::Document(doc_id))
        .await
        .unwrap();
    assert!(!view.is_allow());

    // ...but may edit it through project ownership...
    let edit = pm
        .decide(AccessAction::Edit, &EntityRef::Document(doc_id))
        .await
        .unwrap();
    assert!(edit.is_allow());

    // ...and may allocate resources to the project.
    let allocation = pm
        .allocate(AllocationRequest::new(
            resource_id,
            project_id,
            1,
            date(2026, 8, 8),
        ))
        .await
        .unwrap();
    assert_eq!(allocation.quantity, 1);
}

#[tokio::test]
async fn department_head_scoped_to_own_department() {
    let world = World::new();
    let dept_id = Uuid::now_v7();
    let other_dept_id = Uuid::now_v7();

    let in_dept = Resource::new("Cleanroom", ResourceKind::Facility, 1, "room")
        .unwrap()
        .with_department(dept_id);
    let in_dept_id = in_dept.id;
    let elsewhere = Resource::new("Other cleanroom", ResourceKind::Facility, 1, "room")
        .unwrap()
        .with_department(other_dept_id);
    let elsewhere_id = elsewhere.id;
    world.resources.insert(in_dept).await.unwrap();
    world.resources.insert(elsewhere).await.unwrap();

    let head = world.portal_for(
        Actor::new(Uuid::now_v7(), RoleRank::DepartmentHead).with_department(dept_id),
    );

    assert!(head
        .decide(AccessAction::View, &EntityRef::resource(in_dept_id))
        .await
        .unwrap()
        .is_allow());
    assert!(!head
        .decide(AccessAction::View, &EntityRef::resource(elsewhere_id))
        .await
        .unwrap()
        .is_allow());

    // The view-gated reads follow the same split
    assert_eq!(head.available_quantity(in_dept_id).await.unwrap(), 1);
    let err = head.available_quantity(elsewhere_id).await.unwrap_err();
    assert_eq!(err.error_code(), "PERMISSION_DENIED");
}

#[tokio::test]
async fn researcher_needs_membership() {
    let world = World::new();
    let member_id = Uuid::now_v7();

    let mut project = Project::new("Members only", Uuid::now_v7());
    project.add_member(member_id, "research assistant");
    let project_id = project.id;
    world.projects.insert(project).await.unwrap();

    let member = world.portal_for(Actor::new(member_id, RoleRank::Researcher));
    assert!(member
        .decide(AccessAction::View, &EntityRef::Project(project_id))
        .await
        .unwrap()
        .is_allow());

    let outsider = world.portal_for(Actor::new(Uuid::now_v7(), RoleRank::Researcher));
    assert!(!outsider
        .decide(AccessAction::View, &EntityRef::Project(project_id))
        .await
        .unwrap()
        .is_allow());
}

#[tokio::test]
async fn allocation_lifecycle_through_portal() {
    let world = World::new();
    let resource = Resource::new("Sequencer", ResourceKind::Equipment, 5, "unit").unwrap();
    let resource_id = resource.id;
    world.resources.insert(resource).await.unwrap();

    let admin = world.portal_for(Actor::new(Uuid::now_v7(), RoleRank::Admin));
    let project_id = Uuid::now_v7();
    let today = date(2026, 8, 8);

    let first = admin
        .allocate(AllocationRequest::new(resource_id, project_id, 3, today))
        .await
        .unwrap();
    assert_eq!(admin.available_quantity(resource_id).await.unwrap(), 2);

    // Overdraw is rejected with the true remainder in the payload
    let err = admin
        .allocate(AllocationRequest::new(resource_id, project_id, 3, today))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INSUFFICIENT_QUANTITY");
    assert!(err.to_string().contains("available 2"));

    // Return frees the capacity again
    admin.return_resource(first.id, today, None).await.unwrap();
    assert_eq!(admin.available_quantity(resource_id).await.unwrap(), 5);
    assert_eq!(admin.usage_percentage(resource_id).await.unwrap(), 0.0);

    // Second return of the same allocation fails and changes nothing
    let err = admin
        .return_resource(first.id, today, None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_STATE_TRANSITION");
    assert_eq!(admin.available_quantity(resource_id).await.unwrap(), 5);
}

#[tokio::test]
async fn patent_lifecycle_through_portal() {
    let world = World::new();
    let creator_id = Uuid::now_v7();
    let patent = Patent::new("Solid-state electrolyte", creator_id);
    let patent_id = patent.id;
    world.patents.insert(patent).await.unwrap();

    // The creator edits their own patent through ownership
    let creator = world.portal_for(Actor::new(creator_id, RoleRank::Researcher));

    let filed = creator
        .transition_patent_status(patent_id, PatentStatus::Filed, Some(date(2026, 3, 14)), None)
        .await
        .unwrap();
    assert_eq!(filed.status, PatentStatus::Filed);

    let approved = creator
        .transition_patent_status(
            patent_id,
            PatentStatus::Approved,
            None,
            Some(date(2026, 9, 1)),
        )
        .await
        .unwrap();
    assert_eq!(approved.status, PatentStatus::Approved);
    assert_eq!(approved.filing_date, Some(date(2026, 3, 14)));

    // A stranger cannot even see that the patent exists
    let stranger = world.portal_for(Actor::new(Uuid::now_v7(), RoleRank::Faculty));
    let err = stranger
        .transition_patent_status(patent_id, PatentStatus::Rejected, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "PERMISSION_DENIED");

    let stored = world.patents.get(patent_id).await.unwrap().unwrap();
    assert_eq!(stored.status, PatentStatus::Approved);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_checkouts_cannot_overdraw() {
    let world = World::new();
    let resource = Resource::new("GPU node", ResourceKind::Equipment, 5, "node").unwrap();
    let resource_id = resource.id;
    world.resources.insert(resource).await.unwrap();

    let portal = Arc::new(world.portal_for(Actor::new(Uuid::now_v7(), RoleRank::Admin)));
    let today = date(2026, 8, 8);

    let a = {
        let portal = portal.clone();
        tokio::spawn(async move {
            portal
                .allocate(AllocationRequest::new(resource_id, Uuid::now_v7(), 3, today))
                .await
        })
    };
    let b = {
        let portal = portal.clone();
        tokio::spawn(async move {
            portal
                .allocate(AllocationRequest::new(resource_id, Uuid::now_v7(), 3, today))
                .await
        })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let overdraws = results
        .iter()
        .filter(|r| {
            r.as_ref()
                .err()
                .map(|e| e.error_code() == "INSUFFICIENT_QUANTITY")
                .unwrap_or(false)
        })
        .count();

    assert_eq!(successes, 1);
    assert_eq!(overdraws, 1);
    assert_eq!(portal.available_quantity(resource_id).await.unwrap(), 2);
}
