//! Schema versioning for the record store.
//!
//! The `metadata` table records which schema a database file was written
//! with. Files from a newer registrar are refused rather than modified.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::SCHEMA_STATEMENTS;

/// Schema version written by this build.
pub const CURRENT_VERSION: i32 = 1;

const VERSION_KEY: &str = "schema_version";

/// Create missing tables and stamp or check the schema version.
///
/// # Errors
///
/// Returns an error if a statement fails, the stored version is not a
/// number, or the file was written by a newer schema.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }

    match stored_version(conn)? {
        None => {
            conn.execute(
                "INSERT INTO metadata (key, value) VALUES (?1, ?2)",
                (VERSION_KEY, CURRENT_VERSION.to_string()),
            )?;
            Ok(())
        }
        Some(version) if version > CURRENT_VERSION => Err(Error::DatabaseMigration {
            message: format!(
                "version {version} is newer than supported version {CURRENT_VERSION}"
            ),
        }),
        Some(_) => Ok(()),
    }
}

fn stored_version(conn: &Connection) -> Result<Option<i32>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = ?1",
            [VERSION_KEY],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|value| {
        value.parse().map_err(|_| Error::DatabaseMigration {
            message: format!("unreadable version {value:?}"),
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> Connection {
        let conn = Connection::open_in_memory().expect("failed to create in-memory database");
        initialize_schema(&conn).expect("failed to initialize schema");
        conn
    }

    fn overwrite_version(conn: &Connection, value: &str) {
        conn.execute(
            "UPDATE metadata SET value = ?2 WHERE key = ?1",
            [VERSION_KEY, value],
        )
        .unwrap();
    }

    #[test]
    fn test_fresh_store_gets_tables_and_version() {
        let conn = initialized();

        let tables: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' \
                 AND name IN ('kv_entries', 'metadata')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 2);
        assert_eq!(stored_version(&conn).unwrap(), Some(CURRENT_VERSION));
    }

    #[test]
    fn test_reopening_keeps_entries() {
        let conn = initialized();
        conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES ('k', '[]', 'now')",
            [],
        )
        .unwrap();

        initialize_schema(&conn).expect("second init failed");

        let value: String = conn
            .query_row("SELECT value FROM kv_entries WHERE key = 'k'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(value, "[]");
        assert_eq!(stored_version(&conn).unwrap(), Some(CURRENT_VERSION));
    }

    #[test]
    fn test_unreadable_version_is_reported() {
        let conn = initialized();
        overwrite_version(&conn, "one");

        let err = initialize_schema(&conn).unwrap_err();
        assert!(err.to_string().contains("unreadable version \"one\""));
    }

    #[test]
    fn test_newer_schema_is_refused() {
        let conn = initialized();
        overwrite_version(&conn, &(CURRENT_VERSION + 1).to_string());

        let err = initialize_schema(&conn).unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
    }
}
