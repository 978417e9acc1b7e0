//! Thread and message models for the messaging inbox.
//!
//! # Responsibility
//! - Define conversation threads and their messages.
//! - Keep the embedded last-message snapshot rules in one place.
//!
//! # Invariants
//! - A message's `id` and `thread_id` never change after creation; only
//!   `status` and `read_by` evolve.
//! - `unread_count` is 0 once the thread has been explicitly selected.
//! - Messages reference their thread by ID only; the thread does not own
//!   message records.

use crate::model::participant::{Participant, ParticipantId, ParticipantRole};
use crate::model::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a conversation thread.
pub type ThreadId = Uuid;
/// Stable identifier for a message.
pub type MessageId = Uuid;

/// Coarse subject area of a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCategory {
    Clinical,
    Administrative,
    Billing,
    Referral,
}

/// Delivery lifecycle of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Draft,
    Sent,
    Delivered,
    Read,
    Archived,
}

/// File reference carried by a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Per-participant read receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadReceipt {
    pub participant_id: ParticipantId,
    pub read_at: DateTime<Utc>,
}

/// Denormalized preview of a thread's most recent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSnapshot {
    pub message_id: MessageId,
    pub sender_name: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// A conversation grouping one or more messages among participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub subject: String,
    pub participants: Vec<Participant>,
    /// Snapshot of the latest message, refreshed on every post.
    pub last_message: Option<MessageSnapshot>,
    pub unread_count: u32,
    pub is_starred: bool,
    pub is_pinned: bool,
    pub category: ThreadCategory,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Thread {
    /// Creates an empty thread with a generated stable ID.
    pub fn new(
        subject: impl Into<String>,
        participants: Vec<Participant>,
        category: ThreadCategory,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            participants,
            last_message: None,
            unread_count: 0,
            is_starred: false,
            is_pinned: false,
            category,
            priority,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether the thread carries unread messages.
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }
}

/// A single message within a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Weak back-reference to the owning thread.
    pub thread_id: ThreadId,
    pub sender_id: ParticipantId,
    pub sender_name: String,
    pub sender_role: ParticipantRole,
    pub body: String,
    pub status: MessageStatus,
    pub attachments: Vec<Attachment>,
    pub read_by: Vec<ReadReceipt>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a sent message with a generated stable ID.
    pub fn new(
        thread_id: ThreadId,
        sender: &Participant,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            thread_id,
            sender_id: sender.id,
            sender_name: sender.name.clone(),
            sender_role: sender.role,
            body: body.into(),
            status: MessageStatus::Sent,
            attachments: Vec::new(),
            read_by: Vec::new(),
            created_at: now,
        }
    }

    /// Snapshot used for the thread's embedded last-message preview.
    pub fn snapshot(&self) -> MessageSnapshot {
        MessageSnapshot {
            message_id: self.id,
            sender_name: self.sender_name.clone(),
            body: self.body.clone(),
            sent_at: self.created_at,
        }
    }
}
