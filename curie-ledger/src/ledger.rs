//! Resource ledger implementation
//!
//! This module provides the allocation store abstraction and the
//! [`ResourceLedger`] service that enforces the inventory invariant.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use curie_store::{ResourceRepo, StoreError, StoreResult};

use crate::allocation::{Allocation, AllocationRequest, AllocationStatus};
use crate::error::{LedgerError, LedgerResult};

/// Persistence seam for allocation records.
///
/// The ledger is the only caller of the mutating methods; implementations
/// only need to store and list faithfully, all invariant enforcement
/// happens above them.
#[async_trait]
pub trait AllocationStore: Send + Sync {
    /// Get an allocation by id.
    async fn get(&self, id: Uuid) -> StoreResult<Option<Allocation>>;

    /// Insert a new allocation.
    async fn insert(&self, allocation: Allocation) -> StoreResult<()>;

    /// Replace an existing allocation.
    async fn update(&self, allocation: Allocation) -> StoreResult<()>;

    /// List all allocations for a resource, any status.
    async fn list_by_resource(&self, resource_id: Uuid) -> StoreResult<Vec<Allocation>>;

    /// List all allocations for a project, any status.
    async fn list_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Allocation>>;
}

/// In-memory allocation store.
///
/// Backs the test suites and single-process embedding; clones share the
/// same underlying rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryAllocationStore {
    rows: Arc<RwLock<HashMap<Uuid, Allocation>>>,
}

impl MemoryAllocationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AllocationStore for MemoryAllocationStore {
    async fn get(&self, id: Uuid) -> StoreResult<Option<Allocation>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, allocation: Allocation) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&allocation.id) {
            return Err(StoreError::Duplicate {
                kind: "allocation",
                id: allocation.id,
            });
        }
        rows.insert(allocation.id, allocation);
        Ok(())
    }

    async fn update(&self, allocation: Allocation) -> StoreResult<()> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&allocation.id) {
            return Err(StoreError::NotFound {
                kind: "allocation",
                id: allocation.id,
            });
        }
        rows.insert(allocation.id, allocation);
        Ok(())
    }

    async fn list_by_resource(&self, resource_id: Uuid) -> StoreResult<Vec<Allocation>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|a| a.resource_id == resource_id)
            .cloned()
            .collect())
    }

    async fn list_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Allocation>> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect())
    }
}

/// Utilization snapshot for one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceUtilization {
    /// The resource
    pub resource_id: Uuid,

    /// Total inventory
    pub total: u32,

    /// Quantity out on active allocations
    pub allocated: u32,

    /// Quantity still available
    pub available: u32,

    /// `allocated / total`, as a percentage
    pub usage_percentage: f64,

    /// Number of active allocations
    pub active_allocations: usize,
}

/// Ledger statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerStats {
    /// Allocations committed
    pub allocations_created: u64,

    /// Returns recorded
    pub returns_recorded: u64,

    /// Allocation attempts rejected for insufficient quantity
    pub overdraws_rejected: u64,
}

/// The allocation ledger.
///
/// Owns allocation records exclusively and keeps, for every resource,
/// `Σ(active allocation quantities) <= resource.quantity`. The availability
/// check and the insert run under one per-resource mutex, so two concurrent
/// checkouts can never both pass the check against a stale snapshot.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use curie_ledger::{AllocationRequest, MemoryAllocationStore, ResourceLedger};
/// use curie_store::MemoryResourceRepo;
///
/// # async fn demo(resource_id: Uuid, project_id: Uuid) {
/// let ledger = ResourceLedger::new(
///     Arc::new(MemoryResourceRepo::new()),
///     Arc::new(MemoryAllocationStore::new()),
/// );
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
/// let allocation = ledger
///     .allocate(AllocationRequest::new(resource_id, project_id, 1, date))
///     .await
///     .unwrap();
/// ledger
///     .return_resource(allocation.id, date, None)
///     .await
///     .unwrap();
/// # }
/// ```
pub struct ResourceLedger {
    /// Resource lookups (quantity, availability flag)
    resources: Arc<dyn ResourceRepo>,

    /// Allocation persistence
    store: Arc<dyn AllocationStore>,

    /// Per-resource mutation locks
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,

    /// Counters
    stats: RwLock<LedgerStats>,
}

impl std::fmt::Debug for ResourceLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceLedger").finish()
    }
}

impl ResourceLedger {
    /// Create a ledger over the given resource repository and allocation
    /// store.
    pub fn new(resources: Arc<dyn ResourceRepo>, store: Arc<dyn AllocationStore>) -> Self {
        Self {
            resources,
            store,
            locks: Mutex::new(HashMap::new()),
            stats: RwLock::new(LedgerStats::default()),
        }
    }

    /// Get the mutation lock for one resource, creating it on first use.
    async fn resource_lock(&self, resource_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(resource_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Sum the active allocation quantities for a resource.
    async fn allocated_total(&self, resource_id: Uuid) -> LedgerResult<u32> {
        let allocations = self.store.list_by_resource(resource_id).await?;
        Ok(allocations
            .iter()
            .filter(|a| a.is_active())
            .map(|a| a.quantity)
            .sum())
    }

    /// How much of a resource can still be allocated.
    ///
    /// Never negative by construction: every committed allocation passed
    /// the availability check under the resource's lock.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the resource does not exist.
    pub async fn available_quantity(&self, resource_id: Uuid) -> LedgerResult<u32> {
        let resource = self
            .resources
            .get(resource_id)
            .await?
            .ok_or(LedgerError::ResourceNotFound(resource_id))?;
        let allocated = self.allocated_total(resource_id).await?;
        Ok(resource.quantity.saturating_sub(allocated))
    }

    /// Allocate a quantity of a resource to a project.
    ///
    /// The availability check and the insert commit as one atomic unit
    /// relative to other calls on the same resource.
    ///
    /// # Errors
    ///
    /// - `Validation` for a zero quantity or an administratively
    ///   unavailable resource
    /// - `ResourceNotFound` when the resource does not exist
    /// - `InsufficientQuantity` when the request exceeds what is available,
    ///   carrying the maximum available
    pub async fn allocate(&self, request: AllocationRequest) -> LedgerResult<Allocation> {
        if request.quantity == 0 {
            return Err(LedgerError::Validation(
                "allocation quantity must be greater than zero".to_string(),
            ));
        }

        let lock = self.resource_lock(request.resource_id).await;
        let _guard = lock.lock().await;

        let resource = self
            .resources
            .get(request.resource_id)
            .await?
            .ok_or(LedgerError::ResourceNotFound(request.resource_id))?;

        if !resource.is_available() {
            return Err(LedgerError::Validation(format!(
                "resource '{}' is administratively unavailable",
                resource.name
            )));
        }

        let allocated = self.allocated_total(request.resource_id).await?;
        let available = resource.quantity.saturating_sub(allocated);
        if request.quantity > available {
            self.stats.write().await.overdraws_rejected += 1;
            return Err(LedgerError::InsufficientQuantity {
                requested: request.quantity,
                available,
            });
        }

        let allocation = Allocation::new(
            request.resource_id,
            request.project_id,
            request.quantity,
            request.allocation_date,
            request.notes,
        );
        self.store.insert(allocation.clone()).await?;
        self.stats.write().await.allocations_created += 1;

        tracing::debug!(
            allocation = %allocation.id,
            resource = %allocation.resource_id,
            project = %allocation.project_id,
            quantity = allocation.quantity,
            remaining = available - allocation.quantity,
            "Allocation committed"
        );

        Ok(allocation)
    }

    /// Record the return of an allocation, freeing its quantity.
    ///
    /// # Errors
    ///
    /// - `AllocationNotFound` when the allocation does not exist
    /// - `InvalidStateTransition` when it is already returned
    /// - `Validation` when the return date predates the allocation date
    pub async fn return_resource(
        &self,
        allocation_id: Uuid,
        return_date: NaiveDate,
        notes: Option<String>,
    ) -> LedgerResult<Allocation> {
        // First read is only to learn which resource to lock.
        let resource_id = self
            .store
            .get(allocation_id)
            .await?
            .ok_or(LedgerError::AllocationNotFound(allocation_id))?
            .resource_id;

        let lock = self.resource_lock(resource_id).await;
        let _guard = lock.lock().await;

        // Re-read under the lock: a concurrent return may have won.
        let mut allocation = self
            .store
            .get(allocation_id)
            .await?
            .ok_or(LedgerError::AllocationNotFound(allocation_id))?;

        if allocation.status == AllocationStatus::Returned {
            return Err(LedgerError::InvalidStateTransition(allocation_id));
        }
        if return_date < allocation.allocation_date {
            return Err(LedgerError::Validation(format!(
                "return date {} predates allocation date {}",
                return_date, allocation.allocation_date
            )));
        }

        allocation.mark_returned(return_date, notes);
        self.store.update(allocation.clone()).await?;
        self.stats.write().await.returns_recorded += 1;

        tracing::debug!(
            allocation = %allocation.id,
            resource = %allocation.resource_id,
            quantity = allocation.quantity,
            "Return recorded"
        );

        Ok(allocation)
    }

    /// Get one allocation by id.
    ///
    /// Read-only projection; `None` when the id is unknown.
    pub async fn allocation(&self, allocation_id: Uuid) -> LedgerResult<Option<Allocation>> {
        Ok(self.store.get(allocation_id).await?)
    }

    /// All allocations for a resource, newest allocation date first.
    pub async fn allocations_for_resource(
        &self,
        resource_id: Uuid,
    ) -> LedgerResult<Vec<Allocation>> {
        let mut allocations = self.store.list_by_resource(resource_id).await?;
        sort_newest_first(&mut allocations);
        Ok(allocations)
    }

    /// All allocations for a project, newest allocation date first.
    pub async fn allocations_for_project(
        &self,
        project_id: Uuid,
    ) -> LedgerResult<Vec<Allocation>> {
        let mut allocations = self.store.list_by_project(project_id).await?;
        sort_newest_first(&mut allocations);
        Ok(allocations)
    }

    /// How much of a resource is in use, as a percentage of its total.
    ///
    /// Zero when the total quantity is zero (a hand-constructed or legacy
    /// row; `Resource::new` rejects zero quantities).
    pub async fn usage_percentage(&self, resource_id: Uuid) -> LedgerResult<f64> {
        Ok(self.utilization(resource_id).await?.usage_percentage)
    }

    /// Full utilization snapshot for a resource.
    pub async fn utilization(&self, resource_id: Uuid) -> LedgerResult<ResourceUtilization> {
        let resource = self
            .resources
            .get(resource_id)
            .await?
            .ok_or(LedgerError::ResourceNotFound(resource_id))?;
        let allocations = self.store.list_by_resource(resource_id).await?;
        let active: Vec<_> = allocations.iter().filter(|a| a.is_active()).collect();
        let allocated: u32 = active.iter().map(|a| a.quantity).sum();
        let available = resource.quantity.saturating_sub(allocated);
        let usage_percentage = if resource.quantity == 0 {
            0.0
        } else {
            f64::from(allocated) / f64::from(resource.quantity) * 100.0
        };

        Ok(ResourceUtilization {
            resource_id,
            total: resource.quantity,
            allocated,
            available,
            usage_percentage,
            active_allocations: active.len(),
        })
    }

    /// Get ledger stats.
    pub async fn stats(&self) -> LedgerStats {
        *self.stats.read().await
    }
}

/// Order by allocation date descending, ties by creation time descending.
fn sort_newest_first(allocations: &mut [Allocation]) {
    allocations.sort_by(|a, b| {
        b.allocation_date
            .cmp(&a.allocation_date)
            .then(b.created_at.cmp(&a.created_at))
    });
}
