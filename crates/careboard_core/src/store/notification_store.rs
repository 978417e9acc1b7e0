//! Notification store for the notification center.
//!
//! # Responsibility
//! - Own the notification collection and its read/dismiss state.
//!
//! # Invariants
//! - Dismissal keeps the record in the collection; active-view exclusion is
//!   the view pipeline's concern.
//! - `mark_all_read` touches only active (undismissed, unexpired) records.

use crate::model::notification::{Notification, NotificationId};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};

/// Owned in-memory collection of notifications.
#[derive(Debug, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    revision: u64,
}

impl NotificationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with fixture notifications.
    pub fn with_records(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            revision: 0,
        }
    }

    /// Snapshot of the full collection, dismissed records included.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    /// Collection change counter; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Inserts a new notification, most recent first.
    pub fn push(&mut self, notification: Notification) -> Notification {
        self.notifications.insert(0, notification.clone());
        self.revision += 1;
        notification
    }

    /// Marks one notification read.
    pub fn mark_read(&mut self, id: NotificationId) -> StoreResult<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;
        notification.is_read = true;
        self.revision += 1;
        Ok(())
    }

    /// Marks every active notification read.
    pub fn mark_all_read(&mut self, now: DateTime<Utc>) {
        for notification in self
            .notifications
            .iter_mut()
            .filter(|n| n.is_active(now) && !n.is_read)
        {
            notification.is_read = true;
        }
        self.revision += 1;
    }

    /// Dismisses one notification; the record stays in the collection.
    pub fn dismiss(&mut self, id: NotificationId) -> StoreResult<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;
        notification.is_dismissed = true;
        self.revision += 1;
        Ok(())
    }

    /// Removes one notification from the collection.
    pub fn remove(&mut self, id: NotificationId) -> StoreResult<()> {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.revision += 1;
        Ok(())
    }
}
