use careboard_core::{
    CreateTaskRequest, Participant, ParticipantRole, Priority, TaskBoardError, TaskBoardService,
    TaskCategory, TaskFilter, TaskPatch, TaskSort, TaskStatus, TaskStore,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
}

fn request(title: &str, priority: Priority) -> CreateTaskRequest {
    CreateTaskRequest {
        title: title.to_string(),
        description: String::new(),
        category: TaskCategory::Clinical,
        priority,
        assigned_to: None,
        assigned_by: None,
        due_date: None,
        tags: Vec::new(),
    }
}

#[test]
fn priority_sort_orders_critical_high_normal_low() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    for priority in [Priority::Low, Priority::Critical, Priority::Normal, Priority::High] {
        service.create_task(request("t", priority), now).unwrap();
    }

    let ordered = service.list_view(&TaskFilter::default(), TaskSort::Priority);
    let priorities: Vec<Priority> = ordered.iter().map(|t| t.priority).collect();
    assert_eq!(
        priorities,
        vec![Priority::Critical, Priority::High, Priority::Normal, Priority::Low]
    );
}

#[test]
fn board_keeps_every_status_column_even_when_empty() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    service
        .create_task(request("only pending", Priority::Normal), now)
        .unwrap();

    let board = service.board_view(&TaskFilter::default(), TaskSort::default(), now);
    let statuses: Vec<TaskStatus> = board.columns.iter().map(|c| c.status).collect();
    assert_eq!(statuses, TaskStatus::BOARD_ORDER.to_vec());
    assert_eq!(board.columns[0].tasks.len(), 1);
    assert!(board.columns[1].tasks.is_empty());
}

#[test]
fn task_without_due_date_is_never_overdue_anywhere() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    service
        .create_task(request("undated", Priority::High), now - Duration::days(400))
        .unwrap();

    let board = service.board_view(&TaskFilter::default(), TaskSort::default(), now);
    assert_eq!(board.stats.overdue, 0);
}

#[test]
fn overdue_badge_matches_direct_computation_over_base_collection() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());

    let mut late = request("late draw", Priority::Critical);
    late.due_date = Some(now - Duration::hours(5));
    let late = service.create_task(late, now - Duration::days(1)).unwrap();

    let mut late_but_done = request("done late", Priority::Normal);
    late_but_done.due_date = Some(now - Duration::hours(5));
    let done = service
        .create_task(late_but_done, now - Duration::days(1))
        .unwrap();
    service.complete_task(done.id, now).unwrap();

    let board = service.board_view(
        // A filter that hides the overdue task must not change the badge.
        &TaskFilter {
            status: Some(TaskStatus::Completed),
            ..TaskFilter::default()
        },
        TaskSort::default(),
        now,
    );
    let direct = service
        .store()
        .tasks()
        .iter()
        .filter(|t| t.is_overdue(now))
        .count();
    assert_eq!(board.stats.overdue, direct);
    assert_eq!(board.stats.overdue, 1);
    assert!(service.store().get_task(late.id).unwrap().is_overdue(now));
}

#[test]
fn completing_and_reopening_maintains_completed_at() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    let task = service
        .create_task(request("sign summary", Priority::Normal), now)
        .unwrap();

    let done = service.complete_task(task.id, now).unwrap();
    assert_eq!(done.status, TaskStatus::Completed);
    assert_eq!(done.completed_at, Some(now));

    let reopened = service
        .reopen_task(task.id, now + Duration::minutes(5))
        .unwrap();
    assert_eq!(reopened.status, TaskStatus::Pending);
    assert_eq!(reopened.completed_at, None);
}

#[test]
fn status_moves_freely_without_transition_guards() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    let task = service
        .create_task(request("free move", Priority::Low), now)
        .unwrap();

    // Straight to completed, back to pending, then cancelled.
    service.set_status(task.id, TaskStatus::Completed, now).unwrap();
    service.set_status(task.id, TaskStatus::Pending, now).unwrap();
    let cancelled = service.set_status(task.id, TaskStatus::Cancelled, now).unwrap();
    assert_eq!(cancelled.status, TaskStatus::Cancelled);
    assert_eq!(cancelled.completed_at, None);
}

#[test]
fn blank_title_is_rejected_on_create_and_patch() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    assert_eq!(
        service.create_task(request("  ", Priority::Low), now).unwrap_err(),
        TaskBoardError::EmptyTitle
    );

    let task = service.create_task(request("ok", Priority::Low), now).unwrap();
    let patch = TaskPatch {
        title: Some("   ".to_string()),
        ..TaskPatch::default()
    };
    assert_eq!(
        service.update_task(task.id, patch, now).unwrap_err(),
        TaskBoardError::EmptyTitle
    );
}

#[test]
fn patched_title_is_stored_trimmed_like_created_ones() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    let task = service
        .create_task(request("  padded create  ", Priority::Normal), now)
        .unwrap();
    assert_eq!(task.title, "padded create");

    let patch = TaskPatch {
        title: Some("  padded patch  ".to_string()),
        ..TaskPatch::default()
    };
    let updated = service.update_task(task.id, patch, now).unwrap();
    assert_eq!(updated.title, "padded patch");
}

#[test]
fn removing_a_task_drops_it_and_reports_not_found_after() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    let task = service.create_task(request("temp", Priority::Low), now).unwrap();

    service.remove_task(task.id).unwrap();
    assert!(service.store().get_task(task.id).is_none());
    assert_eq!(
        service.remove_task(task.id).unwrap_err(),
        TaskBoardError::TaskNotFound(task.id)
    );
}

#[test]
fn missing_task_id_reports_not_found() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());
    let missing = Uuid::new_v4();
    assert_eq!(
        service.complete_task(missing, now).unwrap_err(),
        TaskBoardError::TaskNotFound(missing)
    );
}

#[test]
fn assignee_role_filter_and_tag_search_narrow_the_board() {
    let now = fixed_now();
    let mut service = TaskBoardService::new(TaskStore::new());

    let mut assigned = request("dressing change", Priority::Normal);
    assigned.assigned_to = Some(Participant::new("Amara Diallo, RN", ParticipantRole::Staff));
    assigned.tags = vec!["wound-care".to_string()];
    service.create_task(assigned, now).unwrap();
    service
        .create_task(request("unassigned admin work", Priority::Normal), now)
        .unwrap();

    let by_role = service.list_view(
        &TaskFilter {
            assignee_role: Some(ParticipantRole::Staff),
            ..TaskFilter::default()
        },
        TaskSort::default(),
    );
    assert_eq!(by_role.len(), 1);
    assert_eq!(by_role[0].title, "dressing change");

    let by_tag = service.list_view(
        &TaskFilter {
            search: Some("WOUND".to_string()),
            ..TaskFilter::default()
        },
        TaskSort::default(),
    );
    assert_eq!(by_tag.len(), 1);
}
