//! Task store for the task board.
//!
//! # Responsibility
//! - Own the task collection and provide merge-style field patching.
//! - Maintain the `completed_at` invariant on every status change.
//!
//! # Invariants
//! - `completed_at` is set iff status is `Completed`, in both directions.
//! - Patching never rewrites `id` or `created_at`.

use crate::model::participant::Participant;
use crate::model::task::{Task, TaskCategory, TaskId, TaskStatus};
use crate::model::Priority;
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use log::debug;

/// Field-level patch applied to an existing task.
///
/// `None` fields leave the stored value untouched. Optional-valued task
/// fields use a nested `Option` so a patch can clear them explicitly.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<TaskCategory>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<Option<Participant>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<Vec<String>>,
}

/// Owned in-memory collection of tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    revision: u64,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with fixture tasks.
    pub fn with_records(tasks: Vec<Task>) -> Self {
        Self { tasks, revision: 0 }
    }

    /// Snapshot of the full task collection.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Collection change counter; bumps on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Looks up one task by ID.
    pub fn get_task(&self, task_id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == task_id).cloned()
    }

    /// Inserts a new task and returns a clone of the stored record.
    pub fn create_task(&mut self, task: Task) -> Task {
        debug!(
            "event=task_created module=store task_id={} priority={:?}",
            task.id, task.priority
        );
        self.tasks.insert(0, task.clone());
        self.revision += 1;
        task
    }

    /// Applies a field patch to an existing task.
    pub fn update_task(
        &mut self,
        task_id: TaskId,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::NotFound(task_id))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(assigned_to) = patch.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(tags) = patch.tags {
            task.tags = tags;
        }
        task.updated_at = now;
        self.revision += 1;
        Ok(task.clone())
    }

    /// Sets a task's status, maintaining the `completed_at` invariant.
    ///
    /// No transition graph is enforced: any status may follow any other.
    pub fn set_status(
        &mut self,
        task_id: TaskId,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(StoreError::NotFound(task_id))?;

        task.status = status;
        task.completed_at = if status == TaskStatus::Completed {
            Some(now)
        } else {
            None
        };
        task.updated_at = now;
        self.revision += 1;
        Ok(task.clone())
    }

    /// Removes a task from the collection.
    pub fn remove_task(&mut self, task_id: TaskId) -> StoreResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        if self.tasks.len() == before {
            return Err(StoreError::NotFound(task_id));
        }
        self.revision += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskPatch, TaskStore};
    use crate::model::task::{Task, TaskCategory, TaskStatus};
    use crate::model::Priority;
    use crate::store::StoreError;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[test]
    fn set_status_maintains_completed_at_both_ways() {
        let now = Utc::now();
        let mut store = TaskStore::new();
        let task = store.create_task(Task::new(
            "sign discharge summary",
            "",
            TaskCategory::Documentation,
            Priority::High,
            now,
        ));

        let done = store
            .set_status(task.id, TaskStatus::Completed, now)
            .unwrap();
        assert_eq!(done.completed_at, Some(now));

        let reopened = store
            .set_status(task.id, TaskStatus::Pending, now + Duration::minutes(1))
            .unwrap();
        assert_eq!(reopened.completed_at, None);
    }

    #[test]
    fn patch_can_clear_due_date() {
        let now = Utc::now();
        let mut store = TaskStore::new();
        let mut task = Task::new("refill", "", TaskCategory::Clinical, Priority::Normal, now);
        task.due_date = Some(now + Duration::days(1));
        let task = store.create_task(task);

        let patch = TaskPatch {
            due_date: Some(None),
            ..TaskPatch::default()
        };
        let updated = store.update_task(task.id, patch, now).unwrap();
        assert_eq!(updated.due_date, None);
    }

    #[test]
    fn missing_id_is_not_found_and_leaves_revision_alone() {
        let mut store = TaskStore::new();
        let missing = Uuid::new_v4();
        let before = store.revision();
        let err = store
            .set_status(missing, TaskStatus::Completed, Utc::now())
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(missing));
        assert_eq!(store.revision(), before);
    }
}
