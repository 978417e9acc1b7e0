//! Task board use-case service.
//!
//! # Responsibility
//! - Provide the board projection (status columns over the filtered,
//!   sorted set plus badge stats) and task lifecycle entry points.
//!
//! # Invariants
//! - Board columns are derived from the filtered view; stats always come
//!   from the base collection with the same clock reading.
//! - Blank titles are rejected before any store mutation.

use crate::model::participant::Participant;
use crate::model::task::{Task, TaskCategory, TaskId, TaskStatus};
use crate::model::Priority;
use crate::store::task_store::{TaskPatch, TaskStore};
use crate::store::StoreError;
use crate::view::filter::{filter_tasks, TaskFilter};
use crate::view::group::{group_tasks_by_status, DayBounds, StatusColumn};
use crate::view::sort::{sort_tasks, TaskSort};
use crate::view::stats::{task_stats, TaskStats};
use chrono::{DateTime, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from task board use-case operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskBoardError {
    /// Task title is blank after trim.
    EmptyTitle,
    /// Target task does not exist.
    TaskNotFound(TaskId),
}

impl Display for TaskBoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for TaskBoardError {}

impl From<StoreError> for TaskBoardError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::TaskNotFound(id),
        }
    }
}

/// Request model for creating a task.
#[derive(Debug, Clone)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: Priority,
    pub assigned_to: Option<Participant>,
    pub assigned_by: Option<Participant>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

/// Eager board projection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
    /// One column per status in fixed order, empty columns included.
    pub columns: Vec<StatusColumn>,
    /// Badge counts over the base collection.
    pub stats: TaskStats,
}

/// Task board facade owning the task store.
pub struct TaskBoardService {
    store: TaskStore,
}

impl TaskBoardService {
    /// Creates a service owning the given store.
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Mutable access for direct store-level operations.
    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Recomputes the full board projection for the given criteria.
    pub fn board_view(&self, filter: &TaskFilter, sort: TaskSort, now: DateTime<Utc>) -> TaskBoard {
        let bounds = DayBounds::from_now(now);
        let base = self.store.tasks();
        let stats = task_stats(&base, &bounds);

        let mut visible = filter_tasks(base, filter);
        sort_tasks(&mut visible, sort);
        let columns = group_tasks_by_status(visible);

        TaskBoard { columns, stats }
    }

    /// Flat filtered+sorted task list for non-board display.
    pub fn list_view(&self, filter: &TaskFilter, sort: TaskSort) -> Vec<Task> {
        let mut visible = filter_tasks(self.store.tasks(), filter);
        sort_tasks(&mut visible, sort);
        visible
    }

    /// Creates a pending task after validating the title.
    pub fn create_task(
        &mut self,
        request: CreateTaskRequest,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskBoardError> {
        if request.title.trim().is_empty() {
            return Err(TaskBoardError::EmptyTitle);
        }
        let mut task = Task::new(
            request.title.trim(),
            request.description,
            request.category,
            request.priority,
            now,
        );
        task.assigned_to = request.assigned_to;
        task.assigned_by = request.assigned_by;
        task.due_date = request.due_date;
        task.tags = request.tags;

        let task = self.store.create_task(task);
        info!("event=task_created module=board task_id={}", task.id);
        Ok(task)
    }

    /// Applies a field patch to an existing task.
    pub fn update_task(
        &mut self,
        task_id: TaskId,
        mut patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskBoardError> {
        if let Some(title) = patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(TaskBoardError::EmptyTitle);
            }
            patch.title = Some(trimmed.to_string());
        }
        Ok(self.store.update_task(task_id, patch, now)?)
    }

    /// Sets a task's status; any status may follow any other.
    pub fn set_status(
        &mut self,
        task_id: TaskId,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskBoardError> {
        let task = self.store.set_status(task_id, status, now)?;
        info!(
            "event=task_status_changed module=board task_id={task_id} status={:?}",
            task.status
        );
        Ok(task)
    }

    /// Marks a task completed, stamping `completed_at`.
    pub fn complete_task(
        &mut self,
        task_id: TaskId,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskBoardError> {
        self.set_status(task_id, TaskStatus::Completed, now)
    }

    /// Returns a completed or cancelled task to pending.
    pub fn reopen_task(
        &mut self,
        task_id: TaskId,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskBoardError> {
        self.set_status(task_id, TaskStatus::Pending, now)
    }

    /// Removes a task from the board.
    pub fn remove_task(&mut self, task_id: TaskId) -> Result<(), TaskBoardError> {
        Ok(self.store.remove_task(task_id)?)
    }
}
