//! Task domain model.
//!
//! # Responsibility
//! - Define the task record persisted by the controller.
//!
//! # Invariants
//! - Every task is identified by a stable, time-derived `TaskId`.
//! - Deletion is a hard delete; removed tasks leave no tombstone.

pub mod task;
