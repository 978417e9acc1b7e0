//! Messaging inbox use-case service.
//!
//! # Responsibility
//! - Provide the inbox projection (filtered, sorted, time-grouped threads
//!   plus badge stats) and the message entry points behind it.
//!
//! # Invariants
//! - Selecting a thread marks it read; no other field changes.
//! - Statistics are computed from the base collection, never the filtered
//!   view.
//! - Blank message bodies are rejected before any store mutation.

use crate::model::participant::Participant;
use crate::model::thread::{Message, Thread, ThreadId};
use crate::store::thread_store::ThreadStore;
use crate::store::StoreError;
use crate::view::filter::{filter_threads, ThreadFilter};
use crate::view::group::{group_by_time, DayBounds, TimeGroup};
use crate::view::sort::{sort_threads, ThreadSort};
use crate::view::stats::{thread_stats, ThreadStats};
use chrono::{DateTime, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from inbox use-case operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxError {
    /// Message body is blank after trim.
    EmptyMessage,
    /// Target thread does not exist.
    ThreadNotFound(ThreadId),
}

impl Display for InboxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "message body cannot be empty"),
            Self::ThreadNotFound(id) => write!(f, "thread not found: {id}"),
        }
    }
}

impl Error for InboxError {}

impl From<StoreError> for InboxError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::ThreadNotFound(id),
        }
    }
}

/// Eager inbox projection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct InboxView {
    /// Non-empty time buckets, Today first.
    pub groups: Vec<TimeGroup<Thread>>,
    /// Badge counts over the base collection.
    pub stats: ThreadStats,
}

/// Inbox facade owning the thread store.
pub struct InboxService {
    store: ThreadStore,
}

impl InboxService {
    /// Creates a service owning the given store.
    pub fn new(store: ThreadStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &ThreadStore {
        &self.store
    }

    /// Mutable access for direct store-level operations.
    pub fn store_mut(&mut self) -> &mut ThreadStore {
        &mut self.store
    }

    /// Recomputes the full inbox projection for the given criteria.
    ///
    /// Pipeline: filter → sort → group by last activity, with stats taken
    /// from the unfiltered collection using the same clock reading.
    pub fn inbox_view(
        &self,
        filter: &ThreadFilter,
        sort: ThreadSort,
        now: DateTime<Utc>,
    ) -> InboxView {
        let bounds = DayBounds::from_now(now);
        let base = self.store.threads();
        let stats = thread_stats(&base);

        let mut visible = filter_threads(base, filter);
        sort_threads(&mut visible, sort);
        let groups = group_by_time(visible, &bounds, |thread| thread.updated_at);

        InboxView { groups, stats }
    }

    /// Opens a thread: marks it read and returns its message history.
    pub fn select_thread(
        &mut self,
        thread_id: ThreadId,
        reader: &Participant,
        now: DateTime<Utc>,
    ) -> Result<Vec<Message>, InboxError> {
        self.store.mark_thread_read(thread_id, reader, now)?;
        info!(
            "event=thread_selected module=inbox thread_id={thread_id} reader={}",
            reader.id
        );
        Ok(self.store.message_history(thread_id))
    }

    /// Chronological message history without read-state side effects.
    pub fn thread_messages(&self, thread_id: ThreadId) -> Vec<Message> {
        self.store.message_history(thread_id)
    }

    /// Posts an outbound message after validating the body.
    pub fn send_message(
        &mut self,
        thread_id: ThreadId,
        sender: &Participant,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<Message, InboxError> {
        if body.trim().is_empty() {
            return Err(InboxError::EmptyMessage);
        }
        let message = self
            .store
            .post_message(thread_id, sender, body.trim(), false, now)?;
        info!(
            "event=message_sent module=inbox thread_id={thread_id} message_id={}",
            message.id
        );
        Ok(message)
    }

    /// Flips the starred flag; returns the new value.
    pub fn toggle_star(&mut self, thread_id: ThreadId) -> Result<bool, InboxError> {
        Ok(self.store.toggle_star(thread_id)?)
    }

    /// Flips the pinned flag; returns the new value.
    pub fn toggle_pin(&mut self, thread_id: ThreadId) -> Result<bool, InboxError> {
        Ok(self.store.toggle_pin(thread_id)?)
    }
}
