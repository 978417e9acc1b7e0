//! Filter criteria and predicate evaluation.
//!
//! # Responsibility
//! - Define per-feature filter criteria records and apply them as
//!   AND-combined predicates over store snapshots.
//!
//! # Invariants
//! - A `None` criterion contributes no restriction.
//! - Search matching is case-insensitive substring over a fixed field set
//!   per entity; a blank query matches everything.
//! - Filtering never reorders: surviving records keep their relative order.

use crate::model::notification::{Notification, NotificationKind};
use crate::model::participant::ParticipantRole;
use crate::model::task::{Task, TaskCategory, TaskStatus};
use crate::model::thread::{Thread, ThreadCategory};
use crate::model::Priority;

/// Virtual folder selection for the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    Inbox,
    Starred,
    Pinned,
    Unread,
}

/// Inbox filter criteria; `None` fields impose no restriction.
#[derive(Debug, Clone, Default)]
pub struct ThreadFilter {
    pub folder: Option<Folder>,
    pub category: Option<ThreadCategory>,
    pub priority: Option<Priority>,
    pub search: Option<String>,
}

/// Task board filter criteria; `None` fields impose no restriction.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub category: Option<TaskCategory>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assignee_role: Option<ParticipantRole>,
    pub search: Option<String>,
}

/// Notification center filter criteria; `None` fields impose no restriction.
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub kind: Option<NotificationKind>,
    pub priority: Option<Priority>,
    pub unread_only: bool,
    pub search: Option<String>,
}

/// Case-insensitive substring match over a fixed field set.
///
/// Returns `true` when the query is blank or any field contains the
/// lower-cased query.
fn matches_search(query: &Option<String>, fields: &[&str]) -> bool {
    let Some(query) = query else {
        return true;
    };
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Narrows a thread snapshot to records matching every active criterion.
pub fn filter_threads(threads: Vec<Thread>, filter: &ThreadFilter) -> Vec<Thread> {
    threads
        .into_iter()
        .filter(|thread| thread_matches(thread, filter))
        .collect()
}

fn thread_matches(thread: &Thread, filter: &ThreadFilter) -> bool {
    let folder_ok = match filter.folder {
        None | Some(Folder::Inbox) => true,
        Some(Folder::Starred) => thread.is_starred,
        Some(Folder::Pinned) => thread.is_pinned,
        Some(Folder::Unread) => thread.has_unread(),
    };
    if !folder_ok {
        return false;
    }
    if filter.category.is_some_and(|c| c != thread.category) {
        return false;
    }
    if filter.priority.is_some_and(|p| p != thread.priority) {
        return false;
    }

    let mut fields: Vec<&str> = vec![thread.subject.as_str()];
    for participant in &thread.participants {
        fields.push(participant.name.as_str());
    }
    if let Some(snapshot) = &thread.last_message {
        fields.push(snapshot.body.as_str());
    }
    matches_search(&filter.search, &fields)
}

/// Narrows a task snapshot to records matching every active criterion.
pub fn filter_tasks(tasks: Vec<Task>, filter: &TaskFilter) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task_matches(task, filter))
        .collect()
}

fn task_matches(task: &Task, filter: &TaskFilter) -> bool {
    if filter.category.is_some_and(|c| c != task.category) {
        return false;
    }
    if filter.status.is_some_and(|s| s != task.status) {
        return false;
    }
    if filter.priority.is_some_and(|p| p != task.priority) {
        return false;
    }
    if let Some(role) = filter.assignee_role {
        let assigned = task
            .assigned_to
            .as_ref()
            .is_some_and(|participant| participant.role == role);
        if !assigned {
            return false;
        }
    }

    let mut fields: Vec<&str> = vec![task.title.as_str(), task.description.as_str()];
    for tag in &task.tags {
        fields.push(tag.as_str());
    }
    if let Some(assignee) = &task.assigned_to {
        fields.push(assignee.name.as_str());
    }
    matches_search(&filter.search, &fields)
}

/// Narrows a notification snapshot to records matching every active
/// criterion. Dismissal/expiry exclusion happens in the service layer,
/// before filtering.
pub fn filter_notifications(
    notifications: Vec<Notification>,
    filter: &NotificationFilter,
) -> Vec<Notification> {
    notifications
        .into_iter()
        .filter(|notification| notification_matches(notification, filter))
        .collect()
}

fn notification_matches(notification: &Notification, filter: &NotificationFilter) -> bool {
    if filter.kind.is_some_and(|k| k != notification.kind) {
        return false;
    }
    if filter.priority.is_some_and(|p| p != notification.priority) {
        return false;
    }
    if filter.unread_only && notification.is_read {
        return false;
    }
    matches_search(
        &filter.search,
        &[notification.title.as_str(), notification.body.as_str()],
    )
}

#[cfg(test)]
mod tests {
    use super::{filter_tasks, filter_threads, matches_search, Folder, TaskFilter, ThreadFilter};
    use crate::model::participant::{Participant, ParticipantRole};
    use crate::model::task::{Task, TaskCategory};
    use crate::model::thread::{Thread, ThreadCategory};
    use crate::model::Priority;
    use chrono::Utc;

    fn sample_threads() -> Vec<Thread> {
        let now = Utc::now();
        let dr_osei = Participant::new("Dr. Osei", ParticipantRole::Provider);
        let mut a = Thread::new(
            "Lab results follow-up",
            vec![dr_osei.clone()],
            ThreadCategory::Clinical,
            Priority::High,
            now,
        );
        a.is_starred = true;
        let b = Thread::new(
            "Insurance authorization",
            vec![dr_osei],
            ThreadCategory::Billing,
            Priority::Normal,
            now,
        );
        vec![a, b]
    }

    #[test]
    fn default_filter_restricts_nothing() {
        let threads = sample_threads();
        let kept = filter_threads(threads.clone(), &ThreadFilter::default());
        assert_eq!(kept.len(), threads.len());
    }

    #[test]
    fn folder_and_category_combine_with_and() {
        let threads = sample_threads();
        let filter = ThreadFilter {
            folder: Some(Folder::Starred),
            category: Some(ThreadCategory::Billing),
            ..ThreadFilter::default()
        };
        assert!(filter_threads(threads, &filter).is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let threads = sample_threads();
        let upper = filter_threads(
            threads.clone(),
            &ThreadFilter {
                search: Some("LAB".to_string()),
                ..ThreadFilter::default()
            },
        );
        let lower = filter_threads(
            threads,
            &ThreadFilter {
                search: Some("lab".to_string()),
                ..ThreadFilter::default()
            },
        );
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn blank_search_matches_everything() {
        assert!(matches_search(&Some("   ".to_string()), &["anything"]));
        assert!(matches_search(&None, &[]));
    }

    #[test]
    fn task_search_covers_tags_and_assignee() {
        let now = Utc::now();
        let mut task = Task::new("review", "", TaskCategory::Clinical, Priority::Normal, now);
        task.tags = vec!["cardiology".to_string()];
        task.assigned_to = Some(Participant::new("Nurse Okafor", ParticipantRole::Staff));

        let by_tag = TaskFilter {
            search: Some("cardio".to_string()),
            ..TaskFilter::default()
        };
        let by_name = TaskFilter {
            search: Some("okafor".to_string()),
            ..TaskFilter::default()
        };
        assert_eq!(filter_tasks(vec![task.clone()], &by_tag).len(), 1);
        assert_eq!(filter_tasks(vec![task], &by_name).len(), 1);
    }
}
