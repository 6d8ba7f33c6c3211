//! # Curie Portal
//!
//! The facade page and controller collaborators talk to. It wires the
//! identity seam, the policy engine, the allocation ledger, and the
//! repositories into one operation surface, and enforces the two rules
//! every entry point must honor:
//!
//! 1. **Decide before mutate**: every operation asks the policy engine
//!    first; resource checkout/return additionally flows through the
//!    ledger, which re-validates availability atomically before committing.
//! 2. **Existence masking**: a denied actor receives `PermissionDenied`
//!    whether or not the entity exists; `NotFound` is only ever surfaced
//!    after an Allow.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//! use curie_identity::{Actor, RoleRank, StaticIdentity};
//! use curie_ledger::{AllocationRequest, MemoryAllocationStore};
//! use curie_portal::Portal;
//! use curie_store::{MemoryDocumentRepo, MemoryPatentRepo, MemoryProjectRepo, MemoryResourceRepo};
//!
//! # async fn demo(resource_id: Uuid, project_id: Uuid) {
//! let identity = Arc::new(StaticIdentity::new(Actor::new(Uuid::now_v7(), RoleRank::Admin)));
//! let portal = Portal::new(
//!     identity,
//!     Arc::new(MemoryProjectRepo::new()),
//!     Arc::new(MemoryDocumentRepo::new()),
//!     Arc::new(MemoryPatentRepo::new()),
//!     Arc::new(MemoryResourceRepo::new()),
//!     Arc::new(MemoryAllocationStore::new()),
//! );
//!
//! let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
//! let allocation = portal
//!     .allocate(AllocationRequest::new(resource_id, project_id, 1, date))
//!     .await
//!     .unwrap();
//! portal.return_resource(allocation.id, date, None).await.unwrap();
//! # }
//! ```

pub mod error;
pub mod portal;

// Re-export main types for convenience
pub use error::{PortalError, PortalResult};
pub use portal::Portal;
