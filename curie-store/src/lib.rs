//! # Curie Store
//!
//! Repository contracts for the Curie R&D management portal, plus in-memory
//! implementations for tests and single-process embedding.
//!
//! ## Overview
//!
//! The core never performs its own storage I/O. The policy engine, ledger,
//! and portal gather every fact they need (owner ids, department ids,
//! membership lists) through the narrow trait contracts defined here:
//!
//! - [`ProjectRepo`]: `get`, `list_by_creator`, `list_by_department`, `list_by_member`
//! - [`DocumentRepo`]: `get`, `list_by_uploader`, `list_by_project`
//! - [`PatentRepo`]: `get`, `list_by_project`
//! - [`ResourceRepo`]: `get`, `list_by_department`
//!
//! The surrounding application implements these against its database; the
//! `Memory*` implementations here back the test suites.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curie_store::{MemoryProjectRepo, ProjectRepo};
//! use curie_domain::Project;
//! use uuid::Uuid;
//!
//! # async fn demo() {
//! let repo = MemoryProjectRepo::new();
//! let project = Project::new("Polymer battery study", Uuid::now_v7());
//! let id = project.id;
//! repo.insert(project).await.unwrap();
//! assert!(repo.get(id).await.unwrap().is_some());
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod repos;

// Re-export main types for convenience
pub use error::{StoreError, StoreResult};
pub use memory::{MemoryDocumentRepo, MemoryPatentRepo, MemoryProjectRepo, MemoryResourceRepo};
pub use repos::{DocumentRepo, PatentRepo, ProjectRepo, ResourceRepo};
