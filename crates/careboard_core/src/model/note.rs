//! Internal note and external data record models.
//!
//! # Responsibility
//! - Define versioned clinical notes and external documents under review.
//! - Keep the append-only version history law next to the data.
//!
//! # Invariants
//! - `versions` is append-only; prior entries are never modified.
//! - Version numbers are sequential starting at 1, and top-level
//!   `title`/`content` always mirror the latest version entry.
//! - `reviewed_by`/`reviewed_at` are set iff `review_status` is not
//!   `PendingReview`.

use crate::model::participant::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an internal note.
pub type NoteId = Uuid;
/// Stable identifier for an external data record.
pub type ExternalRecordId = Uuid;

/// One immutable entry in a note's edit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteVersion {
    pub version: u32,
    pub title: String,
    pub content: String,
    pub edited_by: Participant,
    pub edited_at: DateTime<Utc>,
}

/// A versioned markdown note authored by staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalNote {
    pub id: NoteId,
    pub title: String,
    /// Markdown body; rendering and sanitization happen elsewhere.
    pub content: String,
    pub author: Participant,
    /// Matches `versions.last().version`.
    pub version: u32,
    /// Append-only edit history, oldest first.
    pub versions: Vec<NoteVersion>,
    /// Derived plain-text excerpt of `content`.
    pub preview: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InternalNote {
    /// Creates a note at version 1 with the initial history entry.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Participant,
        now: DateTime<Utc>,
    ) -> Self {
        let title = title.into();
        let content = content.into();
        let first = NoteVersion {
            version: 1,
            title: title.clone(),
            content: content.clone(),
            edited_by: author.clone(),
            edited_at: now,
        };
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            version: 1,
            versions: vec![first],
            preview: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Review state of an external data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    PendingReview,
    Reviewed,
    Flagged,
}

/// A document received from an outside facility, awaiting staff review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDataRecord {
    pub id: ExternalRecordId,
    /// Name of the originating facility.
    pub source: String,
    pub title: String,
    /// Markdown summary of the received document.
    pub summary: String,
    pub review_status: ReviewStatus,
    pub reviewed_by: Option<Participant>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub received_at: DateTime<Utc>,
}

impl ExternalDataRecord {
    /// Creates a record in `PendingReview` state.
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            title: title.into(),
            summary: summary.into(),
            review_status: ReviewStatus::PendingReview,
            reviewed_by: None,
            reviewed_at: None,
            received_at,
        }
    }
}
