//! Participant model.
//!
//! # Responsibility
//! - Identify the actors attached to threads, tasks and notes.
//!
//! # Invariants
//! - `ParticipantRole` drives badge styling only; it is never consulted for
//!   access control decisions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a participant.
pub type ParticipantId = Uuid;

/// Actor category attached to a thread or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Patient,
    Provider,
    Staff,
    Department,
    External,
}

/// An actor referenced by threads, tasks, notes and receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub role: ParticipantRole,
}

impl Participant {
    /// Creates a participant with a generated stable ID.
    pub fn new(name: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
        }
    }
}
