//! Pure task-list state transitions.
//!
//! # Responsibility
//! - Own the ordered task sequence and every mutation on it.
//! - Derive aggregate counts without touching any display or storage.
//!
//! # Invariants
//! - No two tasks in a list share an id.
//! - Insertion order is display order.

pub mod counts;
pub mod task_list;
