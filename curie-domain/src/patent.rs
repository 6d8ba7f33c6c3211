//! Patent domain models
//!
//! This module provides the Patent entity and its status state machine:
//! `draft -> filed -> {approved | rejected}`. All status changes go through
//! [`Patent::transition_to`], which is the only writer of `status`,
//! `filing_date`, and `approval_date`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// A patent record.
///
/// # State machine
///
/// ```text
/// draft ──> filed ──> approved
///                └──> rejected
/// ```
///
/// Transitions are one-directional; filing requires a filing date supplied
/// in the same update, approval additionally requires an approval date.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use chrono::NaiveDate;
/// use curie_domain::{Patent, PatentStatus};
///
/// let creator = Uuid::now_v7();
/// let mut patent = Patent::new("Solid-state electrolyte", creator);
/// assert_eq!(patent.status, PatentStatus::Draft);
///
/// let filing = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// patent.transition_to(PatentStatus::Filed, Some(filing), None).unwrap();
/// assert_eq!(patent.status, PatentStatus::Filed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patent {
    /// Unique identifier for the patent
    pub id: Uuid,

    /// Human-readable title
    pub title: String,

    /// User who created the patent record (the owner)
    pub created_by: Uuid,

    /// Project this patent belongs to (if any)
    pub project_id: Option<Uuid>,

    /// Current status
    pub status: PatentStatus,

    /// Date the patent was filed (set when entering `Filed`)
    pub filing_date: Option<NaiveDate>,

    /// Date the patent was approved (set when entering `Approved`)
    pub approval_date: Option<NaiveDate>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Patent {
    /// Creates a new patent record in the `Draft` status.
    ///
    /// # Arguments
    ///
    /// * `title` - Patent title
    /// * `created_by` - User who created the record
    pub fn new(title: impl Into<String>, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            created_by,
            project_id: None,
            status: PatentStatus::Draft,
            filing_date: None,
            approval_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Associate the patent with a project.
    pub fn with_project(mut self, project_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Move the patent to a new status, enforcing the transition guards.
    ///
    /// # Guards
    ///
    /// - `Draft -> Filed` requires `filing_date`
    /// - `Filed -> Approved` requires `approval_date` (the filing date is
    ///   already held from the earlier transition)
    /// - `Filed -> Rejected` requires nothing further
    /// - Every other move, including self-transitions and anything leaving
    ///   a terminal status, is rejected
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` when the required date for the target
    ///   status is missing
    /// - `DomainError::InvalidStateTransition` for moves the state machine
    ///   does not permit
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use curie_domain::{Patent, PatentStatus};
    ///
    /// let mut patent = Patent::new("Solid-state electrolyte", Uuid::now_v7());
    ///
    /// // Filing without a filing date fails
    /// assert!(patent.transition_to(PatentStatus::Filed, None, None).is_err());
    /// assert_eq!(patent.status, PatentStatus::Draft);
    /// ```
    pub fn transition_to(
        &mut self,
        new_status: PatentStatus,
        filing_date: Option<NaiveDate>,
        approval_date: Option<NaiveDate>,
    ) -> DomainResult<()> {
        match (self.status, new_status) {
            (PatentStatus::Draft, PatentStatus::Filed) => {
                let filing = filing_date.ok_or_else(|| {
                    DomainError::Validation(
                        "a filing date is required to file a patent".to_string(),
                    )
                })?;
                self.status = PatentStatus::Filed;
                self.filing_date = Some(filing);
            }
            (PatentStatus::Filed, PatentStatus::Approved) => {
                let approval = approval_date.ok_or_else(|| {
                    DomainError::Validation(
                        "an approval date is required to approve a patent".to_string(),
                    )
                })?;
                self.status = PatentStatus::Approved;
                self.approval_date = Some(approval);
            }
            (PatentStatus::Filed, PatentStatus::Rejected) => {
                self.status = PatentStatus::Rejected;
            }
            (from, to) => {
                return Err(DomainError::InvalidStateTransition {
                    from: from.as_str(),
                    to: to.as_str(),
                });
            }
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Patent lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatentStatus {
    /// Being drafted; not yet filed
    Draft,

    /// Filed with the patent office
    Filed,

    /// Granted (terminal)
    Approved,

    /// Rejected after filing (terminal)
    Rejected,
}

impl PatentStatus {
    /// Get the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Filed => "filed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse status from string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use curie_domain::PatentStatus;
    ///
    /// assert_eq!(PatentStatus::parse("filed"), Some(PatentStatus::Filed));
    /// assert_eq!(PatentStatus::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "filed" => Some(Self::Filed),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Check whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl Default for PatentStatus {
    fn default() -> Self {
        Self::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_patent_creation() {
        let creator = Uuid::now_v7();
        let patent = Patent::new("Solid-state electrolyte", creator);

        assert_eq!(patent.status, PatentStatus::Draft);
        assert!(patent.filing_date.is_none());
        assert!(patent.approval_date.is_none());
    }

    #[test]
    fn test_file_requires_filing_date() {
        let mut patent = Patent::new("Electrolyte", Uuid::now_v7());

        let err = patent
            .transition_to(PatentStatus::Filed, None, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(patent.status, PatentStatus::Draft);

        patent
            .transition_to(PatentStatus::Filed, Some(date(2026, 3, 14)), None)
            .unwrap();
        assert_eq!(patent.status, PatentStatus::Filed);
        assert_eq!(patent.filing_date, Some(date(2026, 3, 14)));
    }

    #[test]
    fn test_approve_requires_approval_date() {
        let mut patent = Patent::new("Electrolyte", Uuid::now_v7());
        patent
            .transition_to(PatentStatus::Filed, Some(date(2026, 3, 14)), None)
            .unwrap();

        let err = patent
            .transition_to(PatentStatus::Approved, None, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(patent.status, PatentStatus::Filed);

        patent
            .transition_to(PatentStatus::Approved, None, Some(date(2026, 9, 1)))
            .unwrap();
        assert_eq!(patent.status, PatentStatus::Approved);
        assert_eq!(patent.approval_date, Some(date(2026, 9, 1)));
    }

    #[test]
    fn test_reject_after_filing() {
        let mut patent = Patent::new("Electrolyte", Uuid::now_v7());
        patent
            .transition_to(PatentStatus::Filed, Some(date(2026, 3, 14)), None)
            .unwrap();

        patent
            .transition_to(PatentStatus::Rejected, None, None)
            .unwrap();
        assert_eq!(patent.status, PatentStatus::Rejected);
        assert!(patent.approval_date.is_none());
    }

    #[test]
    fn test_backward_moves_rejected() {
        let mut patent = Patent::new("Electrolyte", Uuid::now_v7());
        patent
            .transition_to(PatentStatus::Filed, Some(date(2026, 3, 14)), None)
            .unwrap();

        // Back to draft
        let err = patent
            .transition_to(PatentStatus::Draft, None, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));

        patent
            .transition_to(PatentStatus::Approved, None, Some(date(2026, 9, 1)))
            .unwrap();

        // Un-approving
        let err = patent
            .transition_to(PatentStatus::Filed, Some(date(2026, 10, 1)), None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));
        assert_eq!(patent.status, PatentStatus::Approved);
    }

    #[test]
    fn test_skipping_and_self_transitions_rejected() {
        let mut patent = Patent::new("Electrolyte", Uuid::now_v7());

        // Draft straight to approved
        let err = patent
            .transition_to(PatentStatus::Approved, None, Some(date(2026, 9, 1)))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));

        // Draft to draft
        let err = patent
            .transition_to(PatentStatus::Draft, None, None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!PatentStatus::Draft.is_terminal());
        assert!(!PatentStatus::Filed.is_terminal());
        assert!(PatentStatus::Approved.is_terminal());
        assert!(PatentStatus::Rejected.is_terminal());
    }
}
