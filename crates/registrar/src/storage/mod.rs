//! Storage layer for registrar.
//!
//! This module provides a string key-value store with the semantics of a
//! browser's local storage: each key holds one text value, and writing a key
//! replaces whatever was there. [`SqliteStore`] persists entries to disk;
//! [`MemoryStore`] keeps them in process for tests.

mod memory;
pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{Error, Result};

pub use memory::MemoryStore;

/// A store of text values addressed by text keys.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// All keys currently present, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn keys(&self) -> Result<Vec<String>>;
}

/// `SQLite`-backed key-value store.
#[derive(Debug)]
pub struct SqliteStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        debug!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory `SQLite` store.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get statistics about the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let total_keys: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))?;
        let total_value_bytes: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(LENGTH(CAST(value AS BLOB))), 0) FROM kv_entries",
            [],
            |row| row.get(0),
        )?;

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            total_keys,
            total_value_bytes,
            db_size_bytes,
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.conn.execute(
            r"
            INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
            params![key, value, updated_at],
        )?;
        debug!(key, bytes = value.len(), "Wrote storage entry");
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key ASC")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

/// Statistics about the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
    /// Number of keys stored.
    pub total_keys: i64,
    /// Combined size of all stored values in bytes.
    pub total_value_bytes: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
