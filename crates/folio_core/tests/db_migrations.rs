use folio_core::db::migrations::latest_version;
use folio_core::db::{open_db, open_db_in_memory, open_db_with_options, DbError, DbOptions};
use rusqlite::Connection;
use std::time::Duration;

const CONTENT_TABLES: &[&str] = &[
    "users",
    "projects",
    "tags",
    "project_tags",
    "skills",
    "experiences",
    "contacts",
];

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in CONTENT_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn reopening_file_database_is_idempotent_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.sqlite3");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO skills (id, name, category, level) VALUES ('rust', 'Rust', 'backend', 90);",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let skills: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM skills;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(skills, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn foreign_keys_reject_projects_without_owner() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO projects (id, title, description, user_id)
         VALUES ('orphan', 'Orphan', 'No owner', 'missing-user');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn custom_busy_timeout_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeout.sqlite3");
    let options = DbOptions {
        busy_timeout: Duration::from_millis(250),
    };

    let conn = open_db_with_options(&path, &options).unwrap();
    let timeout_ms: i64 = conn
        .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(timeout_ms, 250);
    assert_eq!(DbOptions::default().busy_timeout, Duration::from_secs(5));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
