//! Clinical notes use-case service.
//!
//! # Responsibility
//! - Provide internal-note create/edit/history APIs with the append-only
//!   version law.
//! - Provide external-data review entry points.
//! - Derive plain-text previews from markdown note content.
//!
//! # Invariants
//! - Every edit appends exactly one version entry and increments the note
//!   version by 1.
//! - Preview is recomputed on every create/edit; it never drives content.
//! - Blank note titles are rejected before any store mutation.

use crate::model::note::{
    ExternalDataRecord, ExternalRecordId, InternalNote, NoteId, NoteVersion, ReviewStatus,
};
use crate::model::participant::Participant;
use crate::store::note_store::NoteStore;
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static MD_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\([^)]*\)").expect("valid image regex"));
static MD_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("valid link regex"));
static MD_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_`#>~\-\[\]()!]+").expect("valid symbol regex"));
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

const PREVIEW_MAX_CHARS: usize = 120;

/// Errors from note use-case operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// Note title is blank after trim.
    EmptyTitle,
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Target external record does not exist.
    RecordNotFound(ExternalRecordId),
}

impl Display for NoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::RecordNotFound(id) => write!(f, "external record not found: {id}"),
        }
    }
}

impl Error for NoteError {}

/// Clinical notes facade owning the note store.
pub struct NoteService {
    store: NoteStore,
}

impl NoteService {
    /// Creates a service owning the given store.
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Mutable access for direct store-level operations.
    pub fn store_mut(&mut self) -> &mut NoteStore {
        &mut self.store
    }

    /// Creates a note at version 1 with a derived preview.
    pub fn create_note(
        &mut self,
        title: &str,
        content: &str,
        author: Participant,
        now: DateTime<Utc>,
    ) -> Result<InternalNote, NoteError> {
        if title.trim().is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        let mut note = InternalNote::new(title.trim(), content, author, now);
        note.preview = derive_preview(content);
        let note = self.store.create_note(note);
        info!("event=note_created module=notes note_id={}", note.id);
        Ok(note)
    }

    /// Edits a note: appends one version entry and refreshes the preview.
    pub fn edit_note(
        &mut self,
        note_id: NoteId,
        title: &str,
        content: &str,
        editor: &Participant,
        now: DateTime<Utc>,
    ) -> Result<InternalNote, NoteError> {
        if title.trim().is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        let note = self
            .store
            .edit_note(note_id, title.trim(), content, editor, now)
            .map_err(|err| match err {
                StoreError::NotFound(id) => NoteError::NoteNotFound(id),
            })?;
        self.store
            .set_note_preview(note_id, derive_preview(content))
            .map_err(|err| match err {
                StoreError::NotFound(id) => NoteError::NoteNotFound(id),
            })?;
        info!(
            "event=note_edited module=notes note_id={note_id} version={}",
            note.version
        );
        self.store
            .get_note(note_id)
            .ok_or(NoteError::NoteNotFound(note_id))
    }

    /// Full edit history of one note, oldest first.
    pub fn note_history(&self, note_id: NoteId) -> Result<Vec<NoteVersion>, NoteError> {
        self.store
            .get_note(note_id)
            .map(|note| note.versions)
            .ok_or(NoteError::NoteNotFound(note_id))
    }

    /// Notes matching an optional search query, most recently updated
    /// first. Search covers title, content and author name.
    pub fn notes_view(&self, search: Option<&str>) -> Vec<InternalNote> {
        let needle = search
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let mut notes: Vec<InternalNote> = self
            .store
            .notes()
            .into_iter()
            .filter(|note| match &needle {
                None => true,
                Some(needle) => {
                    note.title.to_lowercase().contains(needle)
                        || note.content.to_lowercase().contains(needle)
                        || note.author.name.to_lowercase().contains(needle)
                }
            })
            .collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        notes
    }

    /// Sets the review status of an external record.
    pub fn review_record(
        &mut self,
        record_id: ExternalRecordId,
        status: ReviewStatus,
        reviewer: &Participant,
        now: DateTime<Utc>,
    ) -> Result<ExternalDataRecord, NoteError> {
        let record = self
            .store
            .set_review_status(record_id, status, reviewer, now)
            .map_err(|err| match err {
                StoreError::NotFound(id) => NoteError::RecordNotFound(id),
            })?;
        info!(
            "event=record_reviewed module=notes record_id={record_id} status={:?}",
            record.review_status
        );
        Ok(record)
    }

    /// External records still awaiting review, oldest received first.
    pub fn pending_review(&self) -> Vec<ExternalDataRecord> {
        let mut pending: Vec<ExternalDataRecord> = self
            .store
            .records()
            .into_iter()
            .filter(|record| record.review_status == ReviewStatus::PendingReview)
            .collect();
        pending.sort_by_key(|record| record.received_at);
        pending
    }
}

/// Derives a plain-text excerpt from markdown content.
///
/// Rules: images removed, links collapsed to their text, markdown symbols
/// stripped, whitespace normalized, first 120 chars retained. Returns
/// `None` for content that is blank after stripping.
pub fn derive_preview(content: &str) -> Option<String> {
    let without_images = MD_IMAGE_RE.replace_all(content, " ");
    let without_links = MD_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MD_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WS_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::derive_preview;

    #[test]
    fn preview_strips_markdown_and_caps_length() {
        let source = "# Assessment\n\n![scan](scan.png)\n**Stable**, see [plan](care-plan.md)";
        let preview = derive_preview(source).expect("preview should exist");
        assert!(!preview.contains('#'));
        assert!(!preview.contains('*'));
        assert!(!preview.contains("scan.png"));
        assert!(preview.contains("plan"));
        assert!(preview.chars().count() <= 120);
    }

    #[test]
    fn blank_content_has_no_preview() {
        assert_eq!(derive_preview("  \n#  \n"), None);
    }
}
