//! Demo fixture data.
//!
//! # Responsibility
//! - Build the fixed in-memory collections every process starts from.
//!
//! # Invariants
//! - Content is deterministic relative to the supplied `now`, so
//!   time-bucket placement in demos and tests is predictable.

use crate::model::note::{ExternalDataRecord, InternalNote};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::participant::{Participant, ParticipantRole};
use crate::model::task::{Task, TaskCategory, TaskStatus};
use crate::model::thread::{Message, Thread, ThreadCategory};
use crate::model::Priority;
use crate::service::inbox_service::InboxService;
use crate::service::note_service::{derive_preview, NoteService};
use crate::service::notification_service::NotificationService;
use crate::service::task_service::TaskBoardService;
use crate::store::note_store::NoteStore;
use crate::store::notification_store::NotificationStore;
use crate::store::task_store::TaskStore;
use crate::store::thread_store::ThreadStore;
use chrono::{DateTime, Duration, Utc};

/// The staff member acting as the signed-in user in demos.
pub fn current_user() -> Participant {
    Participant::new("Amara Diallo, RN", ParticipantRole::Staff)
}

/// Seed threads and messages for the inbox demo.
pub fn seed_threads(now: DateTime<Utc>) -> (Vec<Thread>, Vec<Message>) {
    let dr_osei = Participant::new("Dr. Kwame Osei", ParticipantRole::Provider);
    let patient = Participant::new("Rosa Delgado", ParticipantRole::Patient);
    let billing = Participant::new("Billing Office", ParticipantRole::Department);

    let mut store = ThreadStore::new();

    let labs = store.create_thread(
        "Abnormal potassium on morning labs",
        vec![dr_osei.clone(), patient.clone()],
        ThreadCategory::Clinical,
        Priority::Critical,
        now - Duration::hours(26),
    );
    store
        .post_message(
            labs.id,
            &dr_osei,
            "K+ at 5.9, please repeat the draw and hold the ACE inhibitor.",
            true,
            now - Duration::hours(25),
        )
        .expect("seed thread exists");
    store
        .post_message(
            labs.id,
            &dr_osei,
            "Repeat came back at 5.1. Recheck tomorrow.",
            true,
            now - Duration::hours(2),
        )
        .expect("seed thread exists");

    let refill = store.create_thread(
        "Refill request: metformin 500mg",
        vec![patient.clone()],
        ThreadCategory::Clinical,
        Priority::Normal,
        now - Duration::days(2),
    );
    store
        .post_message(
            refill.id,
            &patient,
            "Down to my last three pills, could you send the refill to my pharmacy?",
            true,
            now - Duration::days(2) + Duration::hours(1),
        )
        .expect("seed thread exists");

    let auth = store.create_thread(
        "Prior authorization for MRI",
        vec![billing.clone()],
        ThreadCategory::Billing,
        Priority::High,
        now - Duration::days(5),
    );
    store
        .post_message(
            auth.id,
            &billing,
            "Payer needs the updated clinical justification by Friday.",
            true,
            now - Duration::days(5) + Duration::hours(2),
        )
        .expect("seed thread exists");

    let mut threads = store.threads();
    for thread in &mut threads {
        if thread.id == refill.id {
            thread.is_starred = true;
        }
        if thread.id == auth.id {
            thread.is_pinned = true;
        }
    }
    (threads, store.messages())
}

/// Seed tasks for the board demo.
pub fn seed_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let nurse = Participant::new("Amara Diallo, RN", ParticipantRole::Staff);
    let dr_osei = Participant::new("Dr. Kwame Osei", ParticipantRole::Provider);

    let mut chart = Task::new(
        "Complete intake charting for new patients",
        "Three intakes from Monday still missing social history.",
        TaskCategory::Documentation,
        Priority::High,
        now - Duration::days(3),
    );
    chart.assigned_to = Some(nurse.clone());
    chart.assigned_by = Some(dr_osei.clone());
    chart.due_date = Some(now - Duration::hours(6));
    chart.tags = vec!["intake".to_string(), "charting".to_string()];

    let mut callback = Task::new(
        "Call Ms. Delgado about repeat labs",
        "Schedule the follow-up potassium draw.",
        TaskCategory::FollowUp,
        Priority::Critical,
        now - Duration::hours(20),
    );
    callback.assigned_to = Some(nurse.clone());
    callback.due_date = Some(now + Duration::hours(4));
    callback.status = TaskStatus::InProgress;

    let mut audit = Task::new(
        "Quarterly controlled-substance audit",
        "",
        TaskCategory::Administrative,
        Priority::Normal,
        now - Duration::days(10),
    );
    audit.assigned_to = Some(nurse);
    audit.due_date = Some(now + Duration::days(12));

    let mut done = Task::new(
        "Fax referral packet to cardiology",
        "",
        TaskCategory::Clinical,
        Priority::Low,
        now - Duration::days(2),
    );
    done.status = TaskStatus::Completed;
    done.completed_at = Some(now - Duration::days(1));

    vec![chart, callback, audit, done]
}

/// Seed notifications for the center demo.
pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let mut critical_result = Notification::new(
        NotificationKind::Result,
        Priority::Critical,
        "Critical lab value",
        "Potassium 5.9 for Rosa Delgado requires acknowledgement.",
        now - Duration::hours(3),
    );
    critical_result.expires_at = Some(now + Duration::days(7));

    let assigned = Notification::new(
        NotificationKind::TaskAssigned,
        Priority::High,
        "Task assigned to you",
        "Dr. Osei assigned: complete intake charting.",
        now - Duration::hours(30),
    );

    let mut maintenance = Notification::new(
        NotificationKind::System,
        Priority::Low,
        "Scheduled maintenance tonight",
        "Portal unavailable 02:00-03:00.",
        now - Duration::days(4),
    );
    maintenance.is_read = true;

    let mut stale = Notification::new(
        NotificationKind::Message,
        Priority::Normal,
        "New message",
        "Billing Office replied to the MRI authorization thread.",
        now - Duration::days(9),
    );
    stale.is_dismissed = true;

    vec![critical_result, assigned, maintenance, stale]
}

/// Seed internal notes and external records for the notes demo.
pub fn seed_notes(now: DateTime<Utc>) -> (Vec<InternalNote>, Vec<ExternalDataRecord>) {
    let dr_osei = Participant::new("Dr. Kwame Osei", ParticipantRole::Provider);

    let mut care_plan = InternalNote::new(
        "Delgado care plan",
        "# Plan\n\n- Repeat potassium in 48h\n- Hold lisinopril pending result",
        dr_osei,
        now - Duration::days(1),
    );
    care_plan.preview = derive_preview(&care_plan.content);

    let discharge_summary = ExternalDataRecord::new(
        "St. Mary's Regional",
        "Discharge summary: R. Delgado",
        "Admitted for hyperkalemia observation, discharged stable.",
        now - Duration::hours(8),
    );

    (vec![care_plan], vec![discharge_summary])
}

/// Builds all four services from the seed collections.
pub fn seed_services(
    now: DateTime<Utc>,
) -> (
    InboxService,
    TaskBoardService,
    NotificationService,
    NoteService,
) {
    let (threads, messages) = seed_threads(now);
    let (notes, records) = seed_notes(now);
    (
        InboxService::new(ThreadStore::with_records(threads, messages)),
        TaskBoardService::new(TaskStore::with_records(seed_tasks(now))),
        NotificationService::new(NotificationStore::with_records(seed_notifications(now))),
        NoteService::new(NoteStore::with_records(notes, records)),
    )
}
