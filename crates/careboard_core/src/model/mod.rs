//! Canonical domain model for the careboard features.
//!
//! # Responsibility
//! - Define the records shared by the inbox, task board, notification
//!   center and clinical-notes features.
//! - Keep derived-state rules (overdue, terminal status, expiry) next to
//!   the data they are derived from.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` that is never reused.
//! - Derived properties (overdue, active) are computed, never stored.

pub mod note;
pub mod notification;
pub mod participant;
pub mod task;
pub mod thread;

use serde::{Deserialize, Serialize};

/// Urgency level shared by threads, tasks and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Normal,
    Low,
}

impl Priority {
    /// Sort rank for priority ordering; lower rank sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Normal => 2,
            Self::Low => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Priority;

    #[test]
    fn priority_rank_orders_critical_first() {
        assert!(Priority::Critical.rank() < Priority::High.rank());
        assert!(Priority::High.rank() < Priority::Normal.rank());
        assert!(Priority::Normal.rank() < Priority::Low.rank());
    }

    #[test]
    fn priority_serializes_snake_case() {
        let json = serde_json::to_string(&Priority::High).expect("priority should serialize");
        assert_eq!(json, "\"high\"");
    }
}
