//! Derived summary statistics.
//!
//! # Responsibility
//! - Compute scalar badge counts by full scan over the BASE collection,
//!   never over a filtered view.
//!
//! # Invariants
//! - Every statistic is a pure function of the collection and the same
//!   `DayBounds` the grouping projector used, so badges and grouped lists
//!   never disagree.
//! - Nothing is incrementally maintained; each read is a fresh scan.

use crate::model::notification::Notification;
use crate::model::task::{Task, TaskStatus};
use crate::model::thread::Thread;
use crate::model::Priority;
use crate::view::group::DayBounds;

/// Badge counts for the messaging inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreadStats {
    pub total: usize,
    pub unread_threads: usize,
    pub unread_messages: u32,
    pub starred: usize,
    pub urgent: usize,
}

/// Badge counts for the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub critical: usize,
}

/// Badge counts for the notification center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationStats {
    pub total: usize,
    pub active: usize,
    pub unread: usize,
    pub critical: usize,
    pub today: usize,
}

/// Scans the full thread collection for inbox badges.
pub fn thread_stats(threads: &[Thread]) -> ThreadStats {
    ThreadStats {
        total: threads.len(),
        unread_threads: threads.iter().filter(|t| t.has_unread()).count(),
        unread_messages: threads.iter().map(|t| t.unread_count).sum(),
        starred: threads.iter().filter(|t| t.is_starred).count(),
        urgent: threads
            .iter()
            .filter(|t| matches!(t.priority, Priority::Critical | Priority::High))
            .count(),
    }
}

/// Scans the full task collection for board badges.
pub fn task_stats(tasks: &[Task], bounds: &DayBounds) -> TaskStats {
    TaskStats {
        total: tasks.len(),
        pending: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count(),
        in_progress: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::InProgress)
            .count(),
        completed: tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count(),
        overdue: tasks.iter().filter(|t| t.is_overdue(bounds.now)).count(),
        due_today: tasks
            .iter()
            .filter(|t| t.due_date.is_some_and(|due| bounds.is_today(due)))
            .count(),
        critical: tasks
            .iter()
            .filter(|t| t.priority == Priority::Critical)
            .count(),
    }
}

/// Scans the full notification collection for center badges.
///
/// Dismissed and expired records count toward `total` only.
pub fn notification_stats(notifications: &[Notification], bounds: &DayBounds) -> NotificationStats {
    let active: Vec<&Notification> = notifications
        .iter()
        .filter(|n| n.is_active(bounds.now))
        .collect();
    NotificationStats {
        total: notifications.len(),
        active: active.len(),
        unread: active.iter().filter(|n| !n.is_read).count(),
        critical: active
            .iter()
            .filter(|n| n.priority == Priority::Critical)
            .count(),
        today: active
            .iter()
            .filter(|n| bounds.is_today(n.created_at))
            .count(),
    }
}
