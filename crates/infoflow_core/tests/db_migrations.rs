use infoflow_core::db::migrations::latest_version;
use infoflow_core::db::{open_db, open_db_in_memory};

#[test]
fn fresh_database_reaches_latest_schema_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() >= 1);
}

#[test]
fn all_entity_tables_exist_after_migration() {
    let conn = open_db_in_memory().unwrap();
    for table in ["tools", "information_items", "improvements"] {
        let found: u32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(found, 1, "missing table `{table}`");
    }
}

#[test]
fn foreign_keys_are_enabled() {
    let conn = open_db_in_memory().unwrap();
    let enabled: u32 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn reopening_a_file_database_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("infoflow.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO tools (slug, name) VALUES ('reader', 'Reader');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let name: String = conn
        .query_row("SELECT name FROM tools WHERE slug = 'reader';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(name, "Reader");
}
