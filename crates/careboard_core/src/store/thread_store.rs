//! Thread and message store for the messaging inbox.
//!
//! # Responsibility
//! - Own the thread and message collections and keep them consistent.
//! - Refresh each thread's embedded last-message snapshot on every post.
//!
//! # Invariants
//! - Removing a thread also removes its messages.
//! - `mark_thread_read` zeroes `unread_count` and marks delivered inbound
//!   messages as read; no other thread field changes.
//! - Message `id`/`thread_id` are never rewritten after creation.

use crate::model::participant::Participant;
use crate::model::thread::{
    Message, MessageStatus, ReadReceipt, Thread, ThreadCategory, ThreadId,
};
use crate::model::Priority;
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use log::debug;

/// Owned in-memory collection of threads and their messages.
#[derive(Debug, Default)]
pub struct ThreadStore {
    threads: Vec<Thread>,
    messages: Vec<Message>,
    revision: u64,
}

impl ThreadStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with fixture collections.
    pub fn with_records(threads: Vec<Thread>, messages: Vec<Message>) -> Self {
        Self {
            threads,
            messages,
            revision: 0,
        }
    }

    /// Snapshot of the full thread collection.
    pub fn threads(&self) -> Vec<Thread> {
        self.threads.clone()
    }

    /// Snapshot of the full message collection.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Messages of one thread in chronological order.
    pub fn message_history(&self, thread_id: ThreadId) -> Vec<Message> {
        let mut history: Vec<Message> = self
            .messages
            .iter()
            .filter(|message| message.thread_id == thread_id)
            .cloned()
            .collect();
        history.sort_by_key(|message| message.created_at);
        history
    }

    /// Collection change counter; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Looks up one thread by ID.
    pub fn get_thread(&self, thread_id: ThreadId) -> Option<Thread> {
        self.threads.iter().find(|t| t.id == thread_id).cloned()
    }

    /// Creates a new thread and returns a clone of the stored record.
    pub fn create_thread(
        &mut self,
        subject: impl Into<String>,
        participants: Vec<Participant>,
        category: ThreadCategory,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Thread {
        let thread = Thread::new(subject, participants, category, priority, now);
        debug!(
            "event=thread_created module=store thread_id={} category={:?}",
            thread.id, thread.category
        );
        self.threads.insert(0, thread.clone());
        self.revision += 1;
        thread
    }

    /// Appends a message to a thread and refreshes the thread snapshot.
    ///
    /// `inbound` marks messages arriving for the current user; those bump
    /// the thread's unread count.
    pub fn post_message(
        &mut self,
        thread_id: ThreadId,
        sender: &Participant,
        body: impl Into<String>,
        inbound: bool,
        now: DateTime<Utc>,
    ) -> StoreResult<Message> {
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(StoreError::NotFound(thread_id))?;

        let mut message = Message::new(thread_id, sender, body, now);
        if inbound {
            message.status = MessageStatus::Delivered;
            thread.unread_count += 1;
        }
        thread.last_message = Some(message.snapshot());
        thread.updated_at = now;
        self.messages.push(message.clone());
        self.revision += 1;
        Ok(message)
    }

    /// Marks a thread read: zeroes the unread count and stamps receipts on
    /// delivered messages for the reading participant.
    pub fn mark_thread_read(
        &mut self,
        thread_id: ThreadId,
        reader: &Participant,
        now: DateTime<Utc>,
    ) -> StoreResult<()> {
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(StoreError::NotFound(thread_id))?;
        thread.unread_count = 0;

        for message in self
            .messages
            .iter_mut()
            .filter(|m| m.thread_id == thread_id && m.status == MessageStatus::Delivered)
        {
            message.status = MessageStatus::Read;
            if !message.read_by.iter().any(|r| r.participant_id == reader.id) {
                message.read_by.push(ReadReceipt {
                    participant_id: reader.id,
                    read_at: now,
                });
            }
        }
        self.revision += 1;
        Ok(())
    }

    /// Flips the starred flag on one thread.
    pub fn toggle_star(&mut self, thread_id: ThreadId) -> StoreResult<bool> {
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(StoreError::NotFound(thread_id))?;
        thread.is_starred = !thread.is_starred;
        self.revision += 1;
        Ok(thread.is_starred)
    }

    /// Flips the pinned flag on one thread.
    pub fn toggle_pin(&mut self, thread_id: ThreadId) -> StoreResult<bool> {
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(StoreError::NotFound(thread_id))?;
        thread.is_pinned = !thread.is_pinned;
        self.revision += 1;
        Ok(thread.is_pinned)
    }

    /// Sets the priority of one thread.
    pub fn set_thread_priority(
        &mut self,
        thread_id: ThreadId,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> StoreResult<()> {
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(StoreError::NotFound(thread_id))?;
        thread.priority = priority;
        thread.updated_at = now;
        self.revision += 1;
        Ok(())
    }

    /// Removes a thread and all of its messages.
    pub fn remove_thread(&mut self, thread_id: ThreadId) -> StoreResult<()> {
        let before = self.threads.len();
        self.threads.retain(|t| t.id != thread_id);
        if self.threads.len() == before {
            return Err(StoreError::NotFound(thread_id));
        }
        self.messages.retain(|m| m.thread_id != thread_id);
        self.revision += 1;
        Ok(())
    }
}
