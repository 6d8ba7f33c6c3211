//! In-memory repository implementations
//!
//! These back the test suites and single-process embedding. Each repository
//! keeps its rows in a `HashMap` behind a `tokio::sync::RwLock`; clones
//! share the same underlying map.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use curie_domain::{Document, Patent, Project, Resource};

use crate::error::{StoreError, StoreResult};
use crate::repos::{DocumentRepo, PatentRepo, ProjectRepo, ResourceRepo};

/// In-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectRepo {
    rows: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl MemoryProjectRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepo for MemoryProjectRepo {
    async fn get(&self, id: Uuid) -> StoreResult<Option<Project>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_by_creator(&self, user_id: Uuid) -> StoreResult<Vec<Project>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.created_by == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_department(&self, department_id: Uuid) -> StoreResult<Vec<Project>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.department_id == Some(department_id))
            .cloned()
            .collect())
    }

    async fn list_by_member(&self, user_id: Uuid) -> StoreResult<Vec<Project>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.is_member(user_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, project: Project) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&project.id) {
            return Err(StoreError::Duplicate {
                kind: "project",
                id: project.id,
            });
        }
        rows.insert(project.id, project);
        Ok(())
    }

    async fn update(&self, project: Project) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&project.id) {
            return Err(StoreError::NotFound {
                kind: "project",
                id: project.id,
            });
        }
        rows.insert(project.id, project);
        Ok(())
    }
}

/// In-memory document repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentRepo {
    rows: Arc<RwLock<HashMap<Uuid, Document>>>,
}

impl MemoryDocumentRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepo for MemoryDocumentRepo {
    async fn get(&self, id: Uuid) -> StoreResult<Option<Document>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_by_uploader(&self, user_id: Uuid) -> StoreResult<Vec<Document>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|d| d.uploaded_by == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Document>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|d| d.project_id == Some(project_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, document: Document) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&document.id) {
            return Err(StoreError::Duplicate {
                kind: "document",
                id: document.id,
            });
        }
        rows.insert(document.id, document);
        Ok(())
    }

    async fn update(&self, document: Document) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&document.id) {
            return Err(StoreError::NotFound {
                kind: "document",
                id: document.id,
            });
        }
        rows.insert(document.id, document);
        Ok(())
    }
}

/// In-memory patent repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryPatentRepo {
    rows: Arc<RwLock<HashMap<Uuid, Patent>>>,
}

impl MemoryPatentRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatentRepo for MemoryPatentRepo {
    async fn get(&self, id: Uuid) -> StoreResult<Option<Patent>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Patent>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.project_id == Some(project_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, patent: Patent) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&patent.id) {
            return Err(StoreError::Duplicate {
                kind: "patent",
                id: patent.id,
            });
        }
        rows.insert(patent.id, patent);
        Ok(())
    }

    async fn update(&self, patent: Patent) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&patent.id) {
            return Err(StoreError::NotFound {
                kind: "patent",
                id: patent.id,
            });
        }
        rows.insert(patent.id, patent);
        Ok(())
    }
}

/// In-memory resource repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceRepo {
    rows: Arc<RwLock<HashMap<Uuid, Resource>>>,
}

impl MemoryResourceRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceRepo for MemoryResourceRepo {
    async fn get(&self, id: Uuid) -> StoreResult<Option<Resource>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_by_department(&self, department_id: Uuid) -> StoreResult<Vec<Resource>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.department_id == Some(department_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, resource: Resource) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&resource.id) {
            return Err(StoreError::Duplicate {
                kind: "resource",
                id: resource.id,
            });
        }
        rows.insert(resource.id, resource);
        Ok(())
    }

    async fn update(&self, resource: Resource) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&resource.id) {
            return Err(StoreError::NotFound {
                kind: "resource",
                id: resource.id,
            });
        }
        rows.insert(resource.id, resource);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curie_domain::ResourceKind;

    #[tokio::test]
    async fn test_project_repo_round_trip() {
        let repo = MemoryProjectRepo::new();
        let creator = Uuid::now_v7();
        let member = Uuid::now_v7();

        let mut project = Project::new("Polymer battery study", creator);
        project.add_member(member, "research assistant");
        let id = project.id;

        repo.insert(project).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_some());
        assert_eq!(repo.list_by_creator(creator).await.unwrap().len(), 1);
        assert_eq!(repo.list_by_member(member).await.unwrap().len(), 1);
        assert!(repo.list_by_member(creator).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_duplicate_rejected() {
        let repo = MemoryProjectRepo::new();
        let project = Project::new("Dup", Uuid::now_v7());

        repo.insert(project.clone()).await.unwrap();
        let err = repo.insert(project).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { kind: "project", .. }));
    }

    #[tokio::test]
    async fn test_update_missing_rejected() {
        let repo = MemoryDocumentRepo::new();
        let doc = Document::new("Ghost", Uuid::now_v7());

        let err = repo.update(doc).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "document", .. }));
    }

    #[tokio::test]
    async fn test_resource_department_listing() {
        let repo = MemoryResourceRepo::new();
        let dept = Uuid::now_v7();

        let scoped = Resource::new("Microscope", ResourceKind::Equipment, 2, "unit")
            .unwrap()
            .with_department(dept);
        let unscoped = Resource::new("Cluster time", ResourceKind::Other, 100, "hours").unwrap();

        repo.insert(scoped).await.unwrap();
        repo.insert(unscoped).await.unwrap();

        assert_eq!(repo.list_by_department(dept).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let repo = MemoryPatentRepo::new();
        let clone = repo.clone();

        let patent = Patent::new("Electrolyte", Uuid::now_v7());
        let id = patent.id;
        repo.insert(patent).await.unwrap();

        assert!(clone.get(id).await.unwrap().is_some());
    }
}
