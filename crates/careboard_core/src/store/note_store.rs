//! Store for internal notes and external data records.
//!
//! # Responsibility
//! - Own both clinical-documentation collections and their review/version
//!   state.
//! - Enforce the append-only version history law on note edits.
//!
//! # Invariants
//! - `edit_note` appends exactly one version entry and increments the note
//!   version by 1; prior entries are never touched.
//! - Top-level `title`/`content` mirror the latest version after every edit.
//! - `reviewed_by`/`reviewed_at` are cleared when a record returns to
//!   `PendingReview`.

use crate::model::note::{
    ExternalDataRecord, ExternalRecordId, InternalNote, NoteId, NoteVersion, ReviewStatus,
};
use crate::model::participant::Participant;
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use log::debug;

/// Owned in-memory collections of notes and external records.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<InternalNote>,
    records: Vec<ExternalDataRecord>,
    revision: u64,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with fixture collections.
    pub fn with_records(notes: Vec<InternalNote>, records: Vec<ExternalDataRecord>) -> Self {
        Self {
            notes,
            records,
            revision: 0,
        }
    }

    /// Snapshot of the internal-note collection.
    pub fn notes(&self) -> Vec<InternalNote> {
        self.notes.clone()
    }

    /// Snapshot of the external-record collection.
    pub fn records(&self) -> Vec<ExternalDataRecord> {
        self.records.clone()
    }

    /// Collection change counter; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Looks up one note by ID.
    pub fn get_note(&self, note_id: NoteId) -> Option<InternalNote> {
        self.notes.iter().find(|n| n.id == note_id).cloned()
    }

    /// Looks up one external record by ID.
    pub fn get_record(&self, record_id: ExternalRecordId) -> Option<ExternalDataRecord> {
        self.records.iter().find(|r| r.id == record_id).cloned()
    }

    /// Inserts a new note and returns a clone of the stored record.
    pub fn create_note(&mut self, note: InternalNote) -> InternalNote {
        debug!(
            "event=note_created module=store note_id={} version={}",
            note.id, note.version
        );
        self.notes.insert(0, note.clone());
        self.revision += 1;
        note
    }

    /// Replaces a note's title/content and appends one version entry.
    pub fn edit_note(
        &mut self,
        note_id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        editor: &Participant,
        now: DateTime<Utc>,
    ) -> StoreResult<InternalNote> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or(StoreError::NotFound(note_id))?;

        let title = title.into();
        let content = content.into();
        note.version += 1;
        note.versions.push(NoteVersion {
            version: note.version,
            title: title.clone(),
            content: content.clone(),
            edited_by: editor.clone(),
            edited_at: now,
        });
        note.title = title;
        note.content = content;
        note.updated_at = now;
        self.revision += 1;
        Ok(note.clone())
    }

    /// Sets the derived preview text for one note.
    pub fn set_note_preview(
        &mut self,
        note_id: NoteId,
        preview: Option<String>,
    ) -> StoreResult<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == note_id)
            .ok_or(StoreError::NotFound(note_id))?;
        note.preview = preview;
        self.revision += 1;
        Ok(())
    }

    /// Removes a note from the collection.
    pub fn remove_note(&mut self, note_id: NoteId) -> StoreResult<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != note_id);
        if self.notes.len() == before {
            return Err(StoreError::NotFound(note_id));
        }
        self.revision += 1;
        Ok(())
    }

    /// Inserts a new external record.
    pub fn add_record(&mut self, record: ExternalDataRecord) -> ExternalDataRecord {
        self.records.insert(0, record.clone());
        self.revision += 1;
        record
    }

    /// Sets the review status of an external record.
    ///
    /// Reviewer metadata follows the status: set for `Reviewed`/`Flagged`,
    /// cleared for `PendingReview`.
    pub fn set_review_status(
        &mut self,
        record_id: ExternalRecordId,
        status: ReviewStatus,
        reviewer: &Participant,
        now: DateTime<Utc>,
    ) -> StoreResult<ExternalDataRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or(StoreError::NotFound(record_id))?;

        record.review_status = status;
        if status == ReviewStatus::PendingReview {
            record.reviewed_by = None;
            record.reviewed_at = None;
        } else {
            record.reviewed_by = Some(reviewer.clone());
            record.reviewed_at = Some(now);
        }
        self.revision += 1;
        Ok(record.clone())
    }
}
