//! In-memory record stores.
//!
//! # Responsibility
//! - Own the canonical collection for each entity family and provide the
//!   only mutation paths into it.
//! - Surface collection changes through a monotonic revision counter.
//!
//! # Invariants
//! - Each store owns its records exclusively; callers receive clones.
//! - Mutations referencing a missing ID return `StoreError::NotFound`
//!   instead of silently doing nothing.
//! - `revision()` increases on every successful mutation and is untouched
//!   by failed ones.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod note_store;
pub mod notification_store;
pub mod task_store;
pub mod thread_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for store mutation and lookup operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given ID exists in the collection.
    NotFound(Uuid),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}
