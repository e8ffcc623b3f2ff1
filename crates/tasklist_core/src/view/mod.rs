//! Display-side projection of the task list.
//!
//! # Responsibility
//! - Derive which panels and controls are visible from list state alone.
//! - Define the render surface contract the controller drives.
//! - Provide a retained in-memory surface that can print itself as text.
//!
//! # Invariants
//! - The view is disposable; it is never read back as a source of truth.
//! - Rows appear in list order, before the delete-all control.

pub mod memory_surface;
pub mod surface;
pub mod view_state;
