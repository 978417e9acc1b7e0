//! Task model for the task board.
//!
//! # Responsibility
//! - Define actionable work items with assignment and due-date metadata.
//! - Keep the overdue rule and the `completed_at` invariant here.
//!
//! # Invariants
//! - `completed_at` is `Some` iff `status == TaskStatus::Completed`.
//! - Overdue is derived from `due_date` and `status`, never stored.
//! - Status values carry no transition graph: any status may be set from
//!   any other status.

use crate::model::participant::Participant;
use crate::model::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Work area a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Clinical,
    Administrative,
    FollowUp,
    Documentation,
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Statuses after which a task can no longer become overdue.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Fixed column order for the status board.
    pub const BOARD_ORDER: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ];

    /// Human-facing column label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// An actionable work item on the task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: Option<Participant>,
    pub assigned_by: Option<Participant>,
    pub due_date: Option<DateTime<Utc>>,
    /// Set iff `status == Completed`.
    pub completed_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: TaskCategory,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            category,
            priority,
            status: TaskStatus::Pending,
            assigned_to: None,
            assigned_by: None,
            due_date: None,
            completed_at: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether this task is past due and still actionable.
    ///
    /// Tasks without a due date are never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < now && !self.status.is_terminal(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskCategory, TaskStatus};
    use crate::model::Priority;
    use chrono::{Duration, Utc};

    #[test]
    fn task_without_due_date_is_never_overdue() {
        let now = Utc::now();
        let task = Task::new("chart review", "", TaskCategory::Clinical, Priority::High, now);
        assert!(!task.is_overdue(now + Duration::days(365)));
    }

    #[test]
    fn terminal_statuses_suppress_overdue() {
        let now = Utc::now();
        let mut task = Task::new("call back", "", TaskCategory::FollowUp, Priority::Normal, now);
        task.due_date = Some(now - Duration::hours(2));
        assert!(task.is_overdue(now));

        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue(now));
        task.status = TaskStatus::Cancelled;
        assert!(!task.is_overdue(now));
    }
}
