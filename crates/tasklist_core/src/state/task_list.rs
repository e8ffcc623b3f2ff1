//! Ordered, id-unique task collection.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::state::counts::TaskCounts;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from task-list transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// Target id is not in the list.
    NotFound(TaskId),
    /// Loaded records contain the same id twice.
    DuplicateId(TaskId),
    /// A loaded record breaks task rules.
    InvalidTask(TaskValidationError),
    /// No id greater than the newest one is representable.
    IdSpaceExhausted(TaskId),
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
            Self::InvalidTask(err) => write!(f, "{err}"),
            Self::IdSpaceExhausted(last) => write!(f, "no task id available after {last}"),
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTask(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for TaskListError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

/// The single source of truth for all tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from persisted records, rejecting invalid or duplicated
    /// entries.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskListError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            task.validate()?;
            if !seen.insert(task.id) {
                return Err(TaskListError::DuplicateId(task.id));
            }
        }
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Largest id in the list, used to keep new ids increasing.
    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(|task| task.id).max()
    }

    /// Picks an unused id greater than every id in the list.
    pub fn next_id(&self, now_ms: i64) -> Result<TaskId, TaskListError> {
        let last = self.max_id();
        TaskId::next_after(last, now_ms).ok_or_else(|| {
            TaskListError::IdSpaceExhausted(last.unwrap_or(TaskId::new(i64::MAX)))
        })
    }

    /// Appends a pending task built from `raw_text`.
    ///
    /// Returns `None` without mutating when the text is blank. The caller
    /// supplies `id`; it must not already be present.
    pub fn add(&mut self, id: TaskId, raw_text: &str) -> Option<&Task> {
        if self.get(id).is_some() {
            return None;
        }
        let task = Task::new(id, raw_text).ok()?;
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flips completion for `id` and returns the new value.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, TaskListError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .map(Task::toggle)
            .ok_or(TaskListError::NotFound(id))
    }

    /// Removes the task with `id`; absent ids are a no-op.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(&self.tasks)
    }
}
