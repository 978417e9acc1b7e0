//! Sort comparators for display ordering.
//!
//! # Responsibility
//! - Produce a total order over filtered records for each feature.
//!
//! # Invariants
//! - Pinned-before-unpinned precedes every other thread key.
//! - Priority ordering uses `Priority::rank()`; lower rank sorts first.
//! - Ties break on recency, most recent first; every sort is stable so
//!   equal keys keep their incoming relative order.

use crate::model::notification::Notification;
use crate::model::task::Task;
use crate::model::thread::Thread;
use std::cmp::Ordering;

/// Sort key selection for the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadSort {
    #[default]
    Recency,
    Priority,
}

/// Sort key selection for the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    #[default]
    DueDate,
    Priority,
    Recency,
}

/// Sort key selection for the notification center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationSort {
    #[default]
    Recency,
    Priority,
}

/// Sorts threads in place: pinned first, then the selected key, then
/// most-recently-updated.
pub fn sort_threads(threads: &mut [Thread], sort: ThreadSort) {
    threads.sort_by(|a, b| {
        // Pinned threads outrank every other key.
        let pinned = b.is_pinned.cmp(&a.is_pinned);
        if pinned != Ordering::Equal {
            return pinned;
        }
        let key = match sort {
            ThreadSort::Recency => Ordering::Equal,
            ThreadSort::Priority => a.priority.rank().cmp(&b.priority.rank()),
        };
        key.then_with(|| b.updated_at.cmp(&a.updated_at))
    });
}

/// Sorts tasks in place by the selected key, tie-breaking on recency.
///
/// Under `DueDate`, undated tasks sort after every dated one.
pub fn sort_tasks(tasks: &mut [Task], sort: TaskSort) {
    tasks.sort_by(|a, b| {
        let key = match sort {
            TaskSort::DueDate => match (a.due_date, b.due_date) {
                (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            TaskSort::Priority => a.priority.rank().cmp(&b.priority.rank()),
            TaskSort::Recency => Ordering::Equal,
        };
        key.then_with(|| b.updated_at.cmp(&a.updated_at))
    });
}

/// Sorts notifications in place by the selected key, newest first on ties.
pub fn sort_notifications(notifications: &mut [Notification], sort: NotificationSort) {
    notifications.sort_by(|a, b| {
        let key = match sort {
            NotificationSort::Recency => Ordering::Equal,
            NotificationSort::Priority => a.priority.rank().cmp(&b.priority.rank()),
        };
        key.then_with(|| b.created_at.cmp(&a.created_at))
    });
}
