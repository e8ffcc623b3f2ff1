//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its identifier.
//! - Enforce title and identity rules at construction and load time.
//!
//! # Invariants
//! - `title` is trimmed and never empty.
//! - `id` is positive epoch milliseconds and unique within one list.
//! - Wire shape is `{"id": number, "title": string, "completed": bool}`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable task identifier derived from creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Allocates the next id from `now_ms`.
    ///
    /// Falls forward to `last + 1` when the clock did not advance past the
    /// newest existing id, so ids stay strictly increasing. Returns `None`
    /// once `last` is `i64::MAX`.
    pub fn next_after(last: Option<TaskId>, now_ms: i64) -> Option<Self> {
        match last {
            Some(TaskId(last)) if now_ms <= last => last.checked_add(1).map(Self),
            _ => Some(Self(now_ms.max(1))),
        }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    NonPositiveId(i64),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::NonPositiveId(id) => write!(f, "task id must be positive, got {id}"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    title: String,
    completed: bool,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskWire) -> Result<Self, Self::Error> {
        let task = Self {
            id: value.id,
            title: value.title,
            completed: value.completed,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a pending task from raw user text.
    ///
    /// # Errors
    /// - `EmptyTitle` when `raw_title` is empty after trimming.
    /// - `NonPositiveId` when `id` is zero or negative.
    pub fn new(id: TaskId, raw_title: &str) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: raw_title.trim().to_string(),
            completed: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.as_i64() <= 0 {
            return Err(TaskValidationError::NonPositiveId(self.id.as_i64()));
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips completion and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId, TaskValidationError};

    #[test]
    fn next_after_uses_clock_when_it_advanced() {
        assert_eq!(TaskId::next_after(Some(TaskId::new(10)), 25), Some(TaskId::new(25)));
        assert_eq!(TaskId::next_after(None, 7), Some(TaskId::new(7)));
    }

    #[test]
    fn next_after_steps_past_stalled_clock() {
        assert_eq!(TaskId::next_after(Some(TaskId::new(10)), 10), Some(TaskId::new(11)));
        assert_eq!(TaskId::next_after(Some(TaskId::new(10)), 3), Some(TaskId::new(11)));
    }

    #[test]
    fn next_after_max_id_is_exhausted() {
        assert_eq!(TaskId::next_after(Some(TaskId::new(i64::MAX)), 5), None);
    }

    #[test]
    fn new_trims_title() {
        let task = Task::new(TaskId::new(1), "  buy milk \n").unwrap();
        assert_eq!(task.title, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn new_rejects_blank_title() {
        let err = Task::new(TaskId::new(1), " \t ").unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyTitle);
    }
}
