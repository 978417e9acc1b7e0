//! Derived-view computation pipeline.
//!
//! # Responsibility
//! - Turn store snapshots into display projections via pure
//!   filter → sort → group steps plus full-scan statistics.
//!
//! # Invariants
//! - Every step is a pure function of its inputs and a caller-supplied
//!   wall-clock `now`; nothing is cached between invocations.
//! - Grouping and statistics for one projection share the same `DayBounds`
//!   so badge counts always agree with the grouped list they summarize.

pub mod filter;
pub mod group;
pub mod sort;
pub mod stats;
