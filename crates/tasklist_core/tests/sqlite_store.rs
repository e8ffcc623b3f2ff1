use rusqlite::Connection;
use std::time::{SystemTime, UNIX_EPOCH};
use tasklist_core::db::schema::SCHEMA_VERSION;
use tasklist_core::db::{open_db, open_db_in_memory, DbError};
use tasklist_core::{
    FixedClock, ImmediateScheduler, KeyValueStore, MemorySurface, SqliteKvStore,
    TaskListController, TASKS_STORAGE_KEY,
};

#[test]
fn open_db_in_memory_creates_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn set_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&conn);

    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();

    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn reopening_keeps_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();

    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
}

#[test]
fn set_records_write_time_in_milliseconds() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&conn);

    let before = now_ms();
    store.set("k", "v").unwrap();
    let after = now_ms();

    let updated_at: i64 = conn
        .query_row("SELECT updated_at FROM kv_entries WHERE key = 'k';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert!(
        updated_at >= before - 50 && updated_at <= after + 50,
        "updated_at {updated_at} outside [{before}, {after}]"
    );
}

#[test]
fn tasks_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    let (first_id, snapshot) = {
        let conn = open_db(&path).unwrap();
        let mut controller = TaskListController::new(
            SqliteKvStore::new(&conn),
            MemorySurface::new(),
            ImmediateScheduler::new(),
            FixedClock::new(10),
        );
        let first = controller.add_task("first").unwrap();
        controller.add_task("second").unwrap();
        controller.toggle_task(first).unwrap();
        let snapshot = controller.list().clone();
        (first, snapshot)
    };

    let conn = open_db(&path).unwrap();
    let controller = TaskListController::new(
        SqliteKvStore::new(&conn),
        MemorySurface::new(),
        ImmediateScheduler::new(),
        FixedClock::new(20),
    );

    assert_eq!(controller.list(), &snapshot);
    assert!(controller.surface().row(first_id).unwrap().done);
}

#[test]
fn corrupt_row_in_database_loads_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKvStore::new(&conn);
    store.set(TASKS_STORAGE_KEY, "[not json").unwrap();

    let controller = TaskListController::new(
        store,
        MemorySurface::new(),
        ImmediateScheduler::new(),
        FixedClock::new(1),
    );

    assert!(controller.list().is_empty());
    assert!(controller.surface().empty_visible());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0)).unwrap()
}

fn now_ms() -> i64 {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
    i64::try_from(elapsed.as_millis()).unwrap()
}
