//! Core domain logic for careboard.
//! This crate is the single source of truth for business invariants.

pub mod fixtures;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{ExternalDataRecord, InternalNote, NoteVersion, ReviewStatus};
pub use model::notification::{Notification, NotificationKind};
pub use model::participant::{Participant, ParticipantRole};
pub use model::task::{Task, TaskCategory, TaskStatus};
pub use model::thread::{Message, MessageStatus, Thread, ThreadCategory};
pub use model::Priority;
pub use service::inbox_service::{InboxError, InboxService, InboxView};
pub use service::note_service::{NoteError, NoteService};
pub use service::notification_service::{NotificationError, NotificationService, NotificationView};
pub use service::task_service::{CreateTaskRequest, TaskBoard, TaskBoardError, TaskBoardService};
pub use store::note_store::NoteStore;
pub use store::notification_store::NotificationStore;
pub use store::task_store::{TaskPatch, TaskStore};
pub use store::thread_store::ThreadStore;
pub use store::{StoreError, StoreResult};
pub use view::filter::{Folder, NotificationFilter, TaskFilter, ThreadFilter};
pub use view::group::{DayBounds, StatusColumn, TimeBucket, TimeGroup};
pub use view::sort::{NotificationSort, TaskSort, ThreadSort};
pub use view::stats::{NotificationStats, TaskStats, ThreadStats};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
