//! # Curie Allocation Ledger
//!
//! This crate owns the portal's one hard inventory invariant: for every
//! resource, the quantity out on active allocations never exceeds the
//! resource's total quantity. It is the only component that creates or
//! mutates allocation records.
//!
//! ## Overview
//!
//! The curie-ledger crate handles:
//! - **Allocations**: records committing a quantity of one resource to one
//!   project for a bounded time span
//! - **Availability**: `available = resource.quantity - Σ(active allocations)`
//! - **Atomicity**: the availability check and the allocation insert commit
//!   as one unit per resource, so concurrent checkouts cannot jointly
//!   overdraw
//! - **Projections**: per-resource and per-project allocation listings for
//!   the policy engine and reporting collaborators
//!
//! ## Concurrency
//!
//! [`ResourceLedger`] keeps an async mutex per resource id. `allocate` and
//! `return_resource` on the same resource serialize; operations on
//! different resources proceed without coordination. The invariant holds
//! after every committed operation, not just eventually.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//! use curie_ledger::{AllocationRequest, MemoryAllocationStore, ResourceLedger};
//! use curie_store::MemoryResourceRepo;
//!
//! # async fn demo(resource_id: Uuid, project_id: Uuid) {
//! let ledger = ResourceLedger::new(
//!     Arc::new(MemoryResourceRepo::new()),
//!     Arc::new(MemoryAllocationStore::new()),
//! );
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
//! let request = AllocationRequest::new(resource_id, project_id, 2, today);
//! let allocation = ledger.allocate(request).await.unwrap();
//! assert_eq!(allocation.quantity, 2);
//! # }
//! ```
//!
//! ## Error Policy
//!
//! Every failure is a typed [`LedgerError`] returned to the caller; nothing
//! is logged-and-swallowed. Committed mutations emit a single debug-level
//! tracing event.

pub mod allocation;
pub mod error;
pub mod ledger;

// Re-export main types for convenience
pub use allocation::{Allocation, AllocationRequest, AllocationStatus};
pub use error::{LedgerError, LedgerResult};
pub use ledger::{
    AllocationStore, LedgerStats, MemoryAllocationStore, ResourceLedger, ResourceUtilization,
};
