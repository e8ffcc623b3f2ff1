//! Core logic for the task-list widget.
//! This crate is the single source of truth for task-list invariants.

pub mod clock;
pub mod config;
pub mod controller;
pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use controller::TaskListController;
pub use input::{parse_line, Command, Intent};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use scheduler::{DeferredScheduler, ImmediateScheduler, TimerQueue, DELETE_FADE_DELAY};
pub use state::counts::{CountLabels, TaskCounts};
pub use state::task_list::{TaskList, TaskListError};
pub use storage::memory::MemoryStore;
pub use storage::sqlite::SqliteKvStore;
pub use storage::{KeyValueStore, StorageError, StorageResult, TASKS_STORAGE_KEY};
pub use view::memory_surface::{MemorySurface, RowView};
pub use view::surface::RenderSurface;
pub use view::view_state::{compute_view_state, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
