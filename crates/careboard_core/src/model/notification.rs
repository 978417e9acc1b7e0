//! Notification model for the notification center.
//!
//! # Responsibility
//! - Define transient alert records with read/dismiss/expiry state.
//!
//! # Invariants
//! - Dismissed notifications are excluded from every active view and count
//!   but stay in the store.
//! - Expiry is evaluated against caller-supplied wall-clock time, never
//!   cached.

use crate::model::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a notification.
pub type NotificationId = Uuid;

/// What produced the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Message,
    TaskAssigned,
    Result,
    System,
}

/// A single alert shown in the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub priority: Priority,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub is_dismissed: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Creates an unread, undismissed notification with a generated ID.
    pub fn new(
        kind: NotificationKind,
        priority: Priority,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            priority,
            title: title.into(),
            body: body.into(),
            is_read: false,
            is_dismissed: false,
            created_at: now,
            expires_at: None,
        }
    }

    /// Returns whether the notification has passed its expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }

    /// Returns whether the notification belongs in active views and counts.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_dismissed && !self.is_expired(now)
    }
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationKind};
    use crate::model::Priority;
    use chrono::{Duration, Utc};

    #[test]
    fn dismissed_notification_is_inactive() {
        let now = Utc::now();
        let mut n = Notification::new(NotificationKind::System, Priority::Low, "t", "b", now);
        assert!(n.is_active(now));
        n.is_dismissed = true;
        assert!(!n.is_active(now));
    }

    #[test]
    fn expiry_uses_caller_clock() {
        let now = Utc::now();
        let mut n = Notification::new(NotificationKind::Result, Priority::Normal, "t", "b", now);
        n.expires_at = Some(now + Duration::minutes(5));
        assert!(n.is_active(now));
        assert!(!n.is_active(now + Duration::minutes(6)));
    }
}
