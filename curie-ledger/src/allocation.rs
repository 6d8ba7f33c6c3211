//! Allocation records
//!
//! An allocation commits a quantity of one resource to one project. Records
//! are created by the ledger in the `Allocated` status and make exactly one
//! irreversible transition to `Returned`; a returned allocation is never
//! reopened, a new record is created instead.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quantity of one resource committed to one project.
///
/// Only the ledger constructs and mutates these; everything else sees them
/// as read-only projections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// Unique identifier for the allocation
    pub id: Uuid,

    /// The resource being allocated
    pub resource_id: Uuid,

    /// The project the resource is allocated to
    pub project_id: Uuid,

    /// How much of the resource is committed (always > 0)
    pub quantity: u32,

    /// The date the allocation starts
    pub allocation_date: NaiveDate,

    /// The date the resource was returned (set on return)
    pub return_date: Option<NaiveDate>,

    /// Current status
    pub status: AllocationStatus,

    /// Free-form notes
    pub notes: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Allocation {
    /// Creates a new allocation in the `Allocated` status.
    ///
    /// Crate-private: the ledger is the only constructor, after it has
    /// validated the request and holds the resource's mutation lock.
    pub(crate) fn new(
        resource_id: Uuid,
        project_id: Uuid,
        quantity: u32,
        allocation_date: NaiveDate,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            resource_id,
            project_id,
            quantity,
            allocation_date,
            return_date: None,
            status: AllocationStatus::Allocated,
            notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the return, freeing the quantity.
    ///
    /// Crate-private for the same reason as `new`; callers go through
    /// `ResourceLedger::return_resource`, which enforces the status and
    /// date preconditions first.
    pub(crate) fn mark_returned(&mut self, return_date: NaiveDate, notes: Option<String>) {
        self.status = AllocationStatus::Returned;
        self.return_date = Some(return_date);
        if let Some(note) = notes {
            self.notes = Some(match self.notes.take() {
                Some(existing) => format!("{existing}; {note}"),
                None => note,
            });
        }
        self.updated_at = Utc::now();
    }

    /// Check whether the allocation is still holding quantity.
    pub fn is_active(&self) -> bool {
        self.status == AllocationStatus::Allocated
    }
}

/// Allocation lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Holding quantity against the resource
    Allocated,

    /// Returned; quantity freed (terminal)
    Returned,
}

impl AllocationStatus {
    /// Get the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allocated => "allocated",
            Self::Returned => "returned",
        }
    }

    /// Parse status from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "allocated" => Some(Self::Allocated),
            "returned" => Some(Self::Returned),
            _ => None,
        }
    }
}

/// A request to allocate a quantity of a resource to a project.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use curie_ledger::AllocationRequest;
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
/// let request = AllocationRequest::new(Uuid::now_v7(), Uuid::now_v7(), 2, date)
///     .with_notes("for the battery test rig");
/// assert_eq!(request.quantity, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The resource to allocate
    pub resource_id: Uuid,

    /// The project to allocate it to
    pub project_id: Uuid,

    /// How much to allocate
    pub quantity: u32,

    /// The date the allocation starts
    pub allocation_date: NaiveDate,

    /// Free-form notes
    pub notes: Option<String>,
}

impl AllocationRequest {
    /// Creates a new allocation request.
    pub fn new(
        resource_id: Uuid,
        project_id: Uuid,
        quantity: u32,
        allocation_date: NaiveDate,
    ) -> Self {
        Self {
            resource_id,
            project_id,
            quantity,
            allocation_date,
            notes: None,
        }
    }

    /// Attach notes to the request.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_allocation_lifecycle() {
        let mut allocation = Allocation::new(
            Uuid::now_v7(),
            Uuid::now_v7(),
            2,
            date(2026, 8, 1),
            Some("initial".to_string()),
        );
        assert!(allocation.is_active());
        assert!(allocation.return_date.is_none());

        allocation.mark_returned(date(2026, 8, 5), Some("back early".to_string()));
        assert!(!allocation.is_active());
        assert_eq!(allocation.return_date, Some(date(2026, 8, 5)));
        assert_eq!(allocation.notes.as_deref(), Some("initial; back early"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(AllocationStatus::parse("allocated"), Some(AllocationStatus::Allocated));
        assert_eq!(AllocationStatus::parse("RETURNED"), Some(AllocationStatus::Returned));
        assert_eq!(AllocationStatus::parse("invalid"), None);
    }
}
