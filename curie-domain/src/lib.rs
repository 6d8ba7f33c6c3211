//! # Curie Domain Models
//!
//! This crate provides the persisted entity models for the Curie R&D
//! management portal, shared across the policy, ledger, and portal crates.
//!
//! ## Overview
//!
//! The curie-domain crate handles:
//! - **Departments**: Organizational units that scope resources and projects
//! - **Projects**: Research projects with creator ownership and member lists
//! - **Resources**: Bounded inventory items (equipment, personnel, ...)
//! - **Documents**: Uploaded research documents with a strict privacy boundary
//! - **Patents**: Patent records with a guarded status state machine
//!
//! ## Architecture
//!
//! ```text
//! Department
//!   ├─ Resources (department_id)
//!   └─ Projects (department_id)
//!         ├─ ProjectMember (membership set)
//!         ├─ Documents (project_id)
//!         └─ Patents (project_id)
//! ```
//!
//! All cross-entity relationships are id references resolved through the
//! repository contracts in `curie-store`; no entity embeds another.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curie_domain::{Project, Resource, ResourceKind};
//! use uuid::Uuid;
//!
//! let creator = Uuid::now_v7();
//! let mut project = Project::new("Polymer battery study", creator);
//! project.add_member(creator, "principal investigator");
//!
//! let resource = Resource::new("Electron microscope", ResourceKind::Equipment, 2, "unit").unwrap();
//! assert_eq!(resource.quantity, 2);
//! ```
//!
//! ## Status Fields
//!
//! Every status in this crate is a closed enumeration (`ProjectStatus`,
//! `PatentStatus`, `Availability`), so illegal values are unrepresentable.
//! Patent status changes go through a single guarded transition method.

pub mod department;
pub mod document;
pub mod error;
pub mod patent;
pub mod project;
pub mod resource;

// Re-export main types for convenience
pub use department::Department;
pub use document::Document;
pub use error::{DomainError, DomainResult};
pub use patent::{Patent, PatentStatus};
pub use project::{Project, ProjectMember, ProjectStatus};
pub use resource::{Availability, Resource, ResourceKind};
