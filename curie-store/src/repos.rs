//! Repository contracts
//!
//! Each persisted entity kind gets a narrow trait the surrounding
//! application implements against its database. `get` returns `None` for a
//! missing row; mutation methods return `NotFound`/`Duplicate` errors so
//! callers never partially apply a change.

use async_trait::async_trait;
use uuid::Uuid;

use curie_domain::{Document, Patent, Project, Resource};

use crate::error::StoreResult;

/// Read/write access to projects.
#[async_trait]
pub trait ProjectRepo: Send + Sync {
    /// Get a project by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<Project>>;

    /// List projects created by a user.
    async fn list_by_creator(&self, user_id: Uuid) -> StoreResult<Vec<Project>>;

    /// List projects in a department.
    async fn list_by_department(&self, department_id: Uuid) -> StoreResult<Vec<Project>>;

    /// List projects a user is a member of.
    async fn list_by_member(&self, user_id: Uuid) -> StoreResult<Vec<Project>>;

    /// Insert a new project.
    async fn insert(&self, project: Project) -> StoreResult<()>;

    /// Replace an existing project.
    async fn update(&self, project: Project) -> StoreResult<()>;
}

/// Read/write access to documents.
#[async_trait]
pub trait DocumentRepo: Send + Sync {
    /// Get a document by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<Document>>;

    /// List documents uploaded by a user.
    async fn list_by_uploader(&self, user_id: Uuid) -> StoreResult<Vec<Document>>;

    /// List documents in a project.
    async fn list_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Document>>;

    /// Insert a new document.
    async fn insert(&self, document: Document) -> StoreResult<()>;

    /// Replace an existing document.
    async fn update(&self, document: Document) -> StoreResult<()>;
}

/// Read/write access to patents.
#[async_trait]
pub trait PatentRepo: Send + Sync {
    /// Get a patent by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<Patent>>;

    /// List patents in a project.
    async fn list_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Patent>>;

    /// Insert a new patent.
    async fn insert(&self, patent: Patent) -> StoreResult<()>;

    /// Replace an existing patent.
    async fn update(&self, patent: Patent) -> StoreResult<()>;
}

/// Read/write access to resources.
#[async_trait]
pub trait ResourceRepo: Send + Sync {
    /// Get a resource by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<Resource>>;

    /// List resources owned by a department.
    async fn list_by_department(&self, department_id: Uuid) -> StoreResult<Vec<Resource>>;

    /// Insert a new resource.
    async fn insert(&self, resource: Resource) -> StoreResult<()>;

    /// Replace an existing resource.
    async fn update(&self, resource: Resource) -> StoreResult<()>;
}
