//! `SQLite`-based key-value storage for board state.
//!
//! The repository serializes every board into one JSON document and keeps
//! it under a single key, so the schema is a plain `kv` table.

use crate::error::{Error, Result};
use crate::paths;
use crate::traits::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// SQLite-based key-value store.
///
/// Each operation opens a new connection to the database file.
/// Board mutations happen once per user gesture, so the connection
/// cost does not matter.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    /// Path to the database file.
    db_path: PathBuf,
}

impl SqliteStore {
    /// Create a store at the default location, `~/.taskboard/boards.sqlite3`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown or the database
    /// cannot be initialized.
    pub fn open_default() -> Result<Self> {
        let db_path = paths::default_db_path().ok_or(Error::NoDataDir)?;
        Self::with_path(db_path)
    }

    /// Create a new `SQLite` store with a specific database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn with_path(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Self { db_path: db_path.as_ref().to_path_buf() };
        store.init_schema()?;
        Ok(store)
    }

    /// Get the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection to the database.
    fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Ok(conn)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            ",
        )?;

        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}
