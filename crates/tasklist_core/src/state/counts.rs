//! Aggregate task counts and their display labels.

use crate::model::task::Task;

/// Total/completed/pending tallies for one list snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Label texts shown in the counts panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountLabels {
    pub total: String,
    pub completed: String,
    pub pending: String,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn labels(&self) -> CountLabels {
        CountLabels {
            total: format!("Total: {}", self.total),
            completed: format!("Completed: {}", self.completed),
            pending: format!("Pending: {}", self.pending),
        }
    }
}
