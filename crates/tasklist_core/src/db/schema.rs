//! Schema for the key-value table.
//!
//! The version lives in `PRAGMA user_version`; a database stamped with a
//! newer version than `SCHEMA_VERSION` is refused untouched.

use super::{DbError, DbResult};
use rusqlite::Connection;
use std::cmp::Ordering;

/// Schema version this build writes and understands.
pub const SCHEMA_VERSION: u32 = 1;

const KV_ENTRIES_SQL: &str = include_str!("kv_entries.sql");

/// Creates `kv_entries` on a fresh database and stamps the version.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    match found.cmp(&SCHEMA_VERSION) {
        Ordering::Equal => Ok(()),
        Ordering::Greater => Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        }),
        Ordering::Less => {
            let tx = conn.transaction()?;
            tx.execute_batch(KV_ENTRIES_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            Ok(())
        }
    }
}
