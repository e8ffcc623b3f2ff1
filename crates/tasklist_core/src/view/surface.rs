//! Render surface contract.

use crate::model::task::{Task, TaskId};
use crate::state::counts::CountLabels;

/// Tree-like display the controller mutates.
///
/// Implementations reflect every call synchronously. Calls naming a row id
/// that is not displayed are ignored.
pub trait RenderSurface {
    /// Removes every task row.
    fn clear_rows(&mut self);
    /// Appends one row after the existing rows and before the delete-all
    /// control. Completed tasks render in the done state.
    fn append_row(&mut self, task: &Task);
    fn remove_row(&mut self, id: TaskId);
    fn set_row_done(&mut self, id: TaskId, done: bool);
    /// Starts the fade-out transition ahead of a deferred delete.
    fn mark_row_fading(&mut self, id: TaskId);
    fn set_empty_visible(&mut self, visible: bool);
    fn set_counts_visible(&mut self, visible: bool);
    fn set_delete_all_visible(&mut self, visible: bool);
    fn set_count_labels(&mut self, labels: &CountLabels);
    fn clear_input(&mut self);
}
