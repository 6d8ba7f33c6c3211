//! # Curie Policy Engine
//!
//! This crate is the single source of truth for authorization in the Curie
//! R&D management portal. Every sensitive operation asks it for a decision
//! before touching anything; no page or controller carries its own role
//! checks.
//!
//! ## Overview
//!
//! The curie-policy crate handles:
//! - **Actions**: `view`, `edit`, `delete`, `allocate`
//! - **Entity kinds**: Project, Document, Patent, Resource
//! - **Rules**: the ordered rule table, pure over an [`EntityFacts`] snapshot
//! - **Engine**: async fact gathering through the repository contracts
//!
//! ## Rule Table
//!
//! Evaluated in order, first match wins:
//!
//! ```text
//! 1. Admin override        admin          -> allow everything
//! 2. Ownership             creator/uploader -> view/edit/delete (never allocate)
//! 3. Project-manager scope PM             -> edit/delete docs+patents and allocate
//!                                            resources under own projects;
//!                                            view/edit any project
//! 4. Department-head scope dept head      -> view/edit/allocate within department
//! 5. Membership scope      researcher/faculty -> view within member projects
//! 6. Document-view privacy  document view  -> ONLY admin or uploader
//! 7. Default deny
//! ```
//!
//! Rule 6 narrows what rules 3-5 would otherwise grant: project or
//! department scope can make a document editable without ever making it
//! viewable. The implementation evaluates the privacy gate before the scope
//! families so no lower rule can leak a view grant.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curie_policy::{rules, AccessAction, EntityFacts};
//! use curie_identity::{Actor, RoleRank};
//! use curie_domain::Project;
//! use uuid::Uuid;
//!
//! let admin = Actor::new(Uuid::now_v7(), RoleRank::Admin);
//! let project = Project::new("Polymer battery study", Uuid::now_v7());
//! let facts = EntityFacts::for_project(&project);
//!
//! let decision = rules::evaluate(&admin, AccessAction::Delete, &facts);
//! assert!(decision.is_allow());
//! ```
//!
//! ## Purity
//!
//! [`rules::evaluate`] is a pure function: no I/O, no locks, safely callable
//! concurrently. [`PolicyEngine::decide`] adds the async fact gathering and
//! is the form collaborators normally consume.

pub mod action;
pub mod decision;
pub mod engine;
pub mod entity;
pub mod error;
pub mod rules;

// Re-export main types for convenience
pub use action::AccessAction;
pub use decision::{Decision, GrantReason};
pub use engine::PolicyEngine;
pub use entity::{EntityKind, EntityRef};
pub use error::{PolicyError, PolicyResult};
pub use rules::{EntityFacts, ProjectFacts};
