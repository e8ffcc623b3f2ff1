//! Process configuration resolved from the environment.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults; resolution never fails.
//! - `log_dir` is absolute so it satisfies `init_logging`.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Database file path override.
pub const DB_PATH_ENV: &str = "TASKLIST_DB_PATH";
/// Log level override (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";
/// Log directory override.
pub const LOG_DIR_ENV: &str = "TASKLIST_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "tasklist-logs";

/// Runtime settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup`, applying defaults for blanks.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let db_path = value(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = value(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = value(LOG_DIR_ENV)
            .map(PathBuf::from)
            .filter(|path| path.is_absolute())
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}
