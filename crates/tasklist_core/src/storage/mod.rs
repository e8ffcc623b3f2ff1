//! Durable key-value storage for the task list.
//!
//! # Responsibility
//! - Define the synchronous string key-value contract the controller persists
//!   through.
//! - Encode/decode the task list as a JSON array under one fixed key.
//!
//! # Invariants
//! - Missing, unreadable or corrupt stored data decodes to an empty list.
//! - Every write replaces the previous value for the key.

use crate::db::DbError;
use crate::model::task::Task;
use crate::state::task_list::TaskList;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

/// Storage key holding the serialized task list.
pub const TASKS_STORAGE_KEY: &str = "Tasks";

pub type StorageResult<T> = Result<T, StorageError>;

/// Backend failure while reading or writing a stored value.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string key-value store scoped to this application.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Serializes the list as an ordered JSON array of task records.
pub fn encode_task_list(list: &TaskList) -> StorageResult<String> {
    serde_json::to_string(list.tasks()).map_err(StorageError::Encode)
}

/// Parses a stored JSON array back into a list.
///
/// Returns `None` when the payload is not a valid, id-unique task array.
pub fn decode_task_list(raw: &str) -> Option<TaskList> {
    let tasks: Vec<Task> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=tasks_decode module=storage status=error error_code=invalid_json error={}",
                err
            );
            return None;
        }
    };

    match TaskList::from_tasks(tasks) {
        Ok(list) => Some(list),
        Err(err) => {
            warn!(
                "event=tasks_decode module=storage status=error error_code=invalid_records error={}",
                err
            );
            None
        }
    }
}

/// Loads the persisted list, degrading to empty on any failure.
pub fn load_task_list(store: &impl KeyValueStore) -> TaskList {
    let raw = match store.get(TASKS_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=tasks_load module=storage status=ok source=empty");
            return TaskList::new();
        }
        Err(err) => {
            warn!(
                "event=tasks_load module=storage status=error error_code=read_failed error={}",
                err
            );
            return TaskList::new();
        }
    };

    let list = decode_task_list(&raw).unwrap_or_default();
    debug!(
        "event=tasks_load module=storage status=ok source=stored count={}",
        list.len()
    );
    list
}

/// Writes the full list under `TASKS_STORAGE_KEY`.
pub fn save_task_list(store: &mut impl KeyValueStore, list: &TaskList) -> StorageResult<()> {
    let encoded = encode_task_list(list)?;
    store.set(TASKS_STORAGE_KEY, &encoded)
}
