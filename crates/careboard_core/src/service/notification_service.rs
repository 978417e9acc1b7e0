//! Notification center use-case service.
//!
//! # Responsibility
//! - Provide the center projection (active, filtered, sorted,
//!   time-grouped notifications plus badge stats) and read/dismiss entry
//!   points.
//!
//! # Invariants
//! - Dismissed and expired notifications never reach the filtered view.
//! - Stats come from the base collection with the same clock reading as
//!   the grouped list.

use crate::model::notification::{Notification, NotificationId};
use crate::store::notification_store::NotificationStore;
use crate::store::StoreError;
use crate::view::filter::{filter_notifications, NotificationFilter};
use crate::view::group::{group_by_time, DayBounds, TimeGroup};
use crate::view::sort::{sort_notifications, NotificationSort};
use crate::view::stats::{notification_stats, NotificationStats};
use chrono::{DateTime, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from notification center use-case operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Target notification does not exist.
    NotificationNotFound(NotificationId),
}

impl Display for NotificationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotificationNotFound(id) => write!(f, "notification not found: {id}"),
        }
    }
}

impl Error for NotificationError {}

impl From<StoreError> for NotificationError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotificationNotFound(id),
        }
    }
}

/// Eager notification-center projection.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationView {
    /// Non-empty time buckets, Today first.
    pub groups: Vec<TimeGroup<Notification>>,
    /// Badge counts over the base collection.
    pub stats: NotificationStats,
}

/// Notification center facade owning the notification store.
pub struct NotificationService {
    store: NotificationStore,
}

impl NotificationService {
    /// Creates a service owning the given store.
    pub fn new(store: NotificationStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Mutable access for direct store-level operations.
    pub fn store_mut(&mut self) -> &mut NotificationStore {
        &mut self.store
    }

    /// Recomputes the full center projection for the given criteria.
    ///
    /// Pipeline: drop dismissed/expired → filter → sort → group by
    /// creation time.
    pub fn center_view(
        &self,
        filter: &NotificationFilter,
        sort: NotificationSort,
        now: DateTime<Utc>,
    ) -> NotificationView {
        let bounds = DayBounds::from_now(now);
        let base = self.store.notifications();
        let stats = notification_stats(&base, &bounds);

        let active: Vec<Notification> = base
            .into_iter()
            .filter(|notification| notification.is_active(now))
            .collect();
        let mut visible = filter_notifications(active, filter);
        sort_notifications(&mut visible, sort);
        let groups = group_by_time(visible, &bounds, |notification| notification.created_at);

        NotificationView { groups, stats }
    }

    /// Inserts a new notification.
    pub fn push(&mut self, notification: Notification) -> Notification {
        info!(
            "event=notification_pushed module=center notification_id={} kind={:?}",
            notification.id, notification.kind
        );
        self.store.push(notification)
    }

    /// Marks one notification read.
    pub fn mark_read(&mut self, id: NotificationId) -> Result<(), NotificationError> {
        Ok(self.store.mark_read(id)?)
    }

    /// Marks every active notification read.
    pub fn mark_all_read(&mut self, now: DateTime<Utc>) {
        self.store.mark_all_read(now);
    }

    /// Dismisses one notification; it stays in the store but leaves every
    /// active view and count.
    pub fn dismiss(&mut self, id: NotificationId) -> Result<(), NotificationError> {
        info!("event=notification_dismissed module=center notification_id={id}");
        Ok(self.store.dismiss(id)?)
    }
}
