//! `SQLite` schema definitions for registrar.
//!
//! The database mirrors a browser's local storage: a flat table of string
//! keys and string values.

/// SQL statement to create the key-value entries table.
pub const CREATE_KV_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_KV_TABLE, CREATE_METADATA_TABLE];
