//! Derived visibility flags applied once per mutation.

use crate::state::task_list::TaskList;

/// Placeholder text shown when there are no tasks.
pub const EMPTY_PLACEHOLDER_TEXT: &str = "No Tasks Added Yet";
/// Label of the per-row delete control.
pub const DELETE_LABEL: &str = "Delete";
/// Label of the delete-all control.
pub const DELETE_ALL_LABEL: &str = "Delete All";

/// Minimum number of tasks before the delete-all control is offered.
pub const DELETE_ALL_MIN_TASKS: usize = 2;

/// Visibility of the list-level surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub show_empty: bool,
    pub show_counts: bool,
    pub show_delete_all: bool,
}

/// Computes visibility flags for the current list.
pub fn compute_view_state(list: &TaskList) -> ViewState {
    let len = list.len();
    ViewState {
        show_empty: len == 0,
        show_counts: len > 0,
        show_delete_all: len >= DELETE_ALL_MIN_TASKS,
    }
}
