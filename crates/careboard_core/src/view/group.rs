//! Grouping projector: time buckets and status columns.
//!
//! # Responsibility
//! - Partition already-filtered, already-sorted sequences into labeled
//!   buckets for headed display.
//!
//! # Invariants
//! - Bucket boundaries are computed once per invocation from the supplied
//!   `now`; every item lands in exactly one bucket.
//! - Time buckets with zero items are omitted; status columns are always
//!   emitted, empty ones included (they power a fixed-column board).

use crate::model::task::{Task, TaskStatus};
use chrono::{DateTime, Duration, Utc};

/// Day boundaries shared by grouping and statistics for one projection.
///
/// Half-open ranges: `[today_start, ∞)` is Today, `[yesterday_start,
/// today_start)` is Yesterday, `[week_start, yesterday_start)` is This
/// Week, everything earlier is Older. `week_start` is a rolling
/// seven-day window including today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub now: DateTime<Utc>,
    pub today_start: DateTime<Utc>,
    pub yesterday_start: DateTime<Utc>,
    pub week_start: DateTime<Utc>,
}

impl DayBounds {
    /// Computes boundaries from the caller's wall clock.
    pub fn from_now(now: DateTime<Utc>) -> Self {
        let today_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();
        Self {
            now,
            today_start,
            yesterday_start: today_start - Duration::days(1),
            week_start: today_start - Duration::days(6),
        }
    }

    /// Assigns the bucket for one timestamp.
    pub fn bucket_for(&self, at: DateTime<Utc>) -> TimeBucket {
        if at >= self.today_start {
            TimeBucket::Today
        } else if at >= self.yesterday_start {
            TimeBucket::Yesterday
        } else if at >= self.week_start {
            TimeBucket::ThisWeek
        } else {
            TimeBucket::Older
        }
    }

    /// Whether a timestamp falls on the current calendar day.
    pub fn is_today(&self, at: DateTime<Utc>) -> bool {
        at >= self.today_start && at < self.today_start + Duration::days(1)
    }
}

/// Named time partition for headed list display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBucket {
    Today,
    Yesterday,
    ThisWeek,
    Older,
}

impl TimeBucket {
    const DISPLAY_ORDER: [TimeBucket; 4] = [
        TimeBucket::Today,
        TimeBucket::Yesterday,
        TimeBucket::ThisWeek,
        TimeBucket::Older,
    ];

    /// Section header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::ThisWeek => "This Week",
            Self::Older => "Older",
        }
    }
}

/// One non-empty time bucket with its items in incoming order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGroup<T> {
    pub bucket: TimeBucket,
    pub items: Vec<T>,
}

/// Partitions a sorted sequence into time buckets, omitting empty ones.
///
/// `at` extracts the timestamp that places each item.
pub fn group_by_time<T>(
    items: Vec<T>,
    bounds: &DayBounds,
    at: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<TimeGroup<T>> {
    let mut today = Vec::new();
    let mut yesterday = Vec::new();
    let mut this_week = Vec::new();
    let mut older = Vec::new();

    for item in items {
        match bounds.bucket_for(at(&item)) {
            TimeBucket::Today => today.push(item),
            TimeBucket::Yesterday => yesterday.push(item),
            TimeBucket::ThisWeek => this_week.push(item),
            TimeBucket::Older => older.push(item),
        }
    }

    TimeBucket::DISPLAY_ORDER
        .into_iter()
        .zip([today, yesterday, this_week, older])
        .filter(|(_, items)| !items.is_empty())
        .map(|(bucket, items)| TimeGroup { bucket, items })
        .collect()
}

/// One status column of the task board.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Partitions tasks into one column per status in fixed board order.
///
/// Empty columns are retained so the board layout stays stable.
pub fn group_tasks_by_status(tasks: Vec<Task>) -> Vec<StatusColumn> {
    let mut columns: Vec<StatusColumn> = TaskStatus::BOARD_ORDER
        .into_iter()
        .map(|status| StatusColumn {
            status,
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        let column = columns
            .iter_mut()
            .find(|c| c.status == task.status)
            .expect("board order covers every status");
        column.tasks.push(task);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::{group_by_time, group_tasks_by_status, DayBounds, TimeBucket};
    use crate::model::task::{Task, TaskCategory, TaskStatus};
    use crate::model::Priority;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 30, 0).unwrap()
    }

    #[test]
    fn half_open_boundaries_assign_exactly_one_bucket() {
        let bounds = DayBounds::from_now(fixed_now());
        assert_eq!(bounds.bucket_for(bounds.today_start), TimeBucket::Today);
        assert_eq!(
            bounds.bucket_for(bounds.yesterday_start),
            TimeBucket::Yesterday
        );
        assert_eq!(bounds.bucket_for(bounds.week_start), TimeBucket::ThisWeek);
        assert_eq!(
            bounds.bucket_for(bounds.week_start - Duration::seconds(1)),
            TimeBucket::Older
        );
    }

    #[test]
    fn empty_time_buckets_are_omitted_and_items_never_duplicated() {
        let bounds = DayBounds::from_now(fixed_now());
        let stamps = vec![
            bounds.now,
            bounds.now - Duration::hours(1),
            bounds.yesterday_start + Duration::hours(3),
        ];
        let groups = group_by_time(stamps.clone(), &bounds, |at| *at);

        let buckets: Vec<TimeBucket> = groups.iter().map(|g| g.bucket).collect();
        assert_eq!(buckets, vec![TimeBucket::Today, TimeBucket::Yesterday]);

        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, stamps.len());
    }

    #[test]
    fn status_columns_include_empty_ones_in_fixed_order() {
        let now = fixed_now();
        let mut task = Task::new("triage", "", TaskCategory::Clinical, Priority::High, now);
        task.status = TaskStatus::InProgress;

        let columns = group_tasks_by_status(vec![task]);
        let order: Vec<TaskStatus> = columns.iter().map(|c| c.status).collect();
        assert_eq!(order, TaskStatus::BOARD_ORDER.to_vec());
        assert!(columns[0].tasks.is_empty());
        assert_eq!(columns[1].tasks.len(), 1);
    }
}
