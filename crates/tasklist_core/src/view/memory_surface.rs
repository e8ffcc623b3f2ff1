//! Retained in-memory render surface.

use crate::model::task::{Task, TaskId};
use crate::state::counts::CountLabels;
use crate::view::surface::RenderSurface;
use crate::view::view_state::{DELETE_ALL_LABEL, DELETE_LABEL, EMPTY_PLACEHOLDER_TEXT};
use std::fmt::Write as _;

/// One displayed task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub fading: bool,
}

/// Surface that keeps the displayed tree as plain data.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    rows: Vec<RowView>,
    empty_visible: bool,
    counts_visible: bool,
    delete_all_visible: bool,
    labels: CountLabels,
    input: String,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    /// Displayed row ids in order.
    pub fn row_ids(&self) -> Vec<TaskId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn row(&self, id: TaskId) -> Option<&RowView> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn empty_visible(&self) -> bool {
        self.empty_visible
    }

    pub fn counts_visible(&self) -> bool {
        self.counts_visible
    }

    pub fn delete_all_visible(&self) -> bool {
        self.delete_all_visible
    }

    pub fn labels(&self) -> &CountLabels {
        &self.labels
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Renders the current tree as terminal text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.empty_visible {
            let _ = writeln!(out, "  {EMPTY_PLACEHOLDER_TEXT}");
        }
        for (index, row) in self.rows.iter().enumerate() {
            let mark = if row.done { "x" } else { " " };
            let fade = if row.fading { " ~" } else { "" };
            let _ = writeln!(
                out,
                "  {:>2}. [{mark}] {}  [{DELETE_LABEL}]{fade}",
                index + 1,
                row.title
            );
        }
        if self.delete_all_visible {
            let _ = writeln!(out, "  [{DELETE_ALL_LABEL}]");
        }
        if self.counts_visible {
            let _ = writeln!(
                out,
                "  {} | {} | {}",
                self.labels.total, self.labels.completed, self.labels.pending
            );
        }
        out
    }

    fn row_mut(&mut self, id: TaskId) -> Option<&mut RowView> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl RenderSurface for MemorySurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, task: &Task) {
        self.rows.push(RowView {
            id: task.id,
            title: task.title.clone(),
            done: task.completed,
            fading: false,
        });
    }

    fn remove_row(&mut self, id: TaskId) {
        self.rows.retain(|row| row.id != id);
    }

    fn set_row_done(&mut self, id: TaskId, done: bool) {
        if let Some(row) = self.row_mut(id) {
            row.done = done;
        }
    }

    fn mark_row_fading(&mut self, id: TaskId) {
        if let Some(row) = self.row_mut(id) {
            row.fading = true;
        }
    }

    fn set_empty_visible(&mut self, visible: bool) {
        self.empty_visible = visible;
    }

    fn set_counts_visible(&mut self, visible: bool) {
        self.counts_visible = visible;
    }

    fn set_delete_all_visible(&mut self, visible: bool) {
        self.delete_all_visible = visible;
    }

    fn set_count_labels(&mut self, labels: &CountLabels) {
        self.labels = labels.clone();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}
