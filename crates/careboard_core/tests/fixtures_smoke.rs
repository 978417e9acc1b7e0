use careboard_core::fixtures::seed_services;
use careboard_core::{
    NotificationFilter, NotificationSort, Priority, TaskFilter, TaskSort, TaskStatus, ThreadFilter,
    ThreadSort,
};
use chrono::{TimeZone, Utc};

#[test]
fn seeded_services_produce_consistent_projections() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 11, 0, 0).unwrap();
    let (inbox, board, center, notes) = seed_services(now);

    let inbox_view = inbox.inbox_view(&ThreadFilter::default(), ThreadSort::default(), now);
    assert_eq!(inbox_view.stats.total, 3);
    assert!(inbox_view.stats.unread_messages > 0);
    let visible: usize = inbox_view.groups.iter().map(|g| g.items.len()).sum();
    assert_eq!(visible, inbox_view.stats.total);

    let task_board = board.board_view(&TaskFilter::default(), TaskSort::default(), now);
    assert_eq!(task_board.stats.total, 4);
    assert_eq!(task_board.stats.overdue, 1);
    assert_eq!(task_board.columns.len(), TaskStatus::BOARD_ORDER.len());

    let center_view = center.center_view(
        &NotificationFilter::default(),
        NotificationSort::default(),
        now,
    );
    // One of the four seeded notifications is dismissed.
    assert_eq!(center_view.stats.total, 4);
    assert_eq!(center_view.stats.active, 3);

    assert_eq!(notes.notes_view(None).len(), 1);
    assert_eq!(notes.pending_review().len(), 1);
}

#[test]
fn domain_enums_use_snake_case_on_the_wire() {
    let status = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(status, "\"in_progress\"");
    let priority: Priority = serde_json::from_str("\"critical\"").unwrap();
    assert_eq!(priority, Priority::Critical);
}

#[test]
fn seeded_thread_records_round_trip_through_json() {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 11, 0, 0).unwrap();
    let (inbox, _, _, _) = seed_services(now);

    let threads = inbox.store().threads();
    let json = serde_json::to_string(&threads).unwrap();
    let back: Vec<careboard_core::Thread> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, threads);
}
