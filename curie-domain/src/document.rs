//! Document domain models
//!
//! This module provides the Document entity. Documents carry the strictest
//! privacy boundary in the portal: viewing is limited to the uploader and
//! administrators regardless of project or department scope, which the
//! policy engine enforces as its document-view override rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded research document.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use curie_domain::Document;
///
/// let uploader = Uuid::now_v7();
/// let doc = Document::new("Q3 lab results", uploader);
/// assert_eq!(doc.uploaded_by, uploader);
/// assert!(!doc.submit_to_journal);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier for the document
    pub id: Uuid,

    /// Human-readable title
    pub title: String,

    /// User who uploaded the document (the owner)
    pub uploaded_by: Uuid,

    /// Project this document belongs to (if any)
    pub project_id: Option<Uuid>,

    /// Whether the document is flagged for journal submission
    pub submit_to_journal: bool,

    /// When the document was uploaded
    pub created_at: DateTime<Utc>,

    /// When the document was last updated
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Creates a new document.
    ///
    /// # Arguments
    ///
    /// * `title` - Document title
    /// * `uploaded_by` - User who uploaded the document
    pub fn new(title: impl Into<String>, uploaded_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            uploaded_by,
            project_id: None,
            submit_to_journal: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Associate the document with a project.
    pub fn with_project(mut self, project_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Flag the document for journal submission.
    pub fn with_journal_submission(mut self) -> Self {
        self.submit_to_journal = true;
        self
    }
}
