//! Use-case services for the four careboard features.
//!
//! # Responsibility
//! - Orchestrate store mutations and view-pipeline projections into the
//!   entry points the presentation layer consumes.
//! - Keep presentation callers decoupled from store internals.
//!
//! # Invariants
//! - Each service owns its store exclusively and receives it by value at
//!   construction; no process-wide singletons.
//! - Projection methods take caller-supplied `now` so a whole screen
//!   refresh shares one clock reading.

pub mod inbox_service;
pub mod note_service;
pub mod notification_service;
pub mod task_service;
