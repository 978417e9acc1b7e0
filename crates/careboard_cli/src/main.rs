//! CLI smoke entry point.
//!
//! # Responsibility
//! - Seed the fixture collections and print each feature's projection
//!   summary, verifying `careboard_core` linkage end to end.
//! - Initialize file logging so core events are captured during the run.

use careboard_core::fixtures::seed_services;
use careboard_core::{
    default_log_level, init_logging, NotificationFilter, NotificationSort, TaskFilter, TaskSort,
    ThreadFilter, ThreadSort,
};
use chrono::Utc;

fn main() {
    let log_dir = std::env::temp_dir().join("careboard-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    println!("careboard_core ping={}", careboard_core::ping());
    println!("careboard_core version={}", careboard_core::core_version());

    let now = Utc::now();
    let (inbox, board, center, notes) = seed_services(now);

    let inbox_view = inbox.inbox_view(&ThreadFilter::default(), ThreadSort::default(), now);
    println!(
        "inbox: {} thread(s), {} unread message(s)",
        inbox_view.stats.total, inbox_view.stats.unread_messages
    );
    for group in &inbox_view.groups {
        println!("  {}: {} thread(s)", group.bucket.label(), group.items.len());
    }

    let task_board = board.board_view(&TaskFilter::default(), TaskSort::default(), now);
    println!(
        "board: {} task(s), {} overdue",
        task_board.stats.total, task_board.stats.overdue
    );
    for column in &task_board.columns {
        println!("  {}: {} task(s)", column.status.label(), column.tasks.len());
    }

    let center_view = center.center_view(
        &NotificationFilter::default(),
        NotificationSort::default(),
        now,
    );
    println!(
        "notifications: {} active, {} unread",
        center_view.stats.active, center_view.stats.unread
    );
    for group in &center_view.groups {
        println!("  {}: {} item(s)", group.bucket.label(), group.items.len());
    }

    println!(
        "notes: {} note(s), {} record(s) pending review",
        notes.notes_view(None).len(),
        notes.pending_review().len()
    );
}
