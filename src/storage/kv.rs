//! Key-value session stores.
//!
//! Session history is persisted as one serialized value per key. The
//! [`SessionStore`] trait is the seam the history component depends on;
//! [`SqliteStore`] is the on-disk implementation and [`MemoryStore`] keeps
//! everything in process.

use std::collections::HashMap;
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::migrations;
use crate::error::RunDistError;

/// A string-keyed store of serialized values.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, RunDistError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), RunDistError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), RunDistError>;
}

impl<T: SessionStore + ?Sized> SessionStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, RunDistError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), RunDistError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), RunDistError> {
        (**self).remove(key)
    }
}

/// Session store backed by the `kv_store` table of a local `SQLite` file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `path`, creating the file and its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, RunDistError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(|e| {
            RunDistError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        log::debug!("Opened history database at {}", path.display());

        Self::with_connection(conn)
    }

    /// Open a store that is discarded when dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_in_memory() -> Result<Self, RunDistError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            RunDistError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, RunDistError> {
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Schema version of the open database.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, RunDistError> {
        migrations::get_version(&self.conn)
    }
}

impl SessionStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, RunDistError> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| RunDistError::Database(format!("Failed to read key '{key}': {e}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), RunDistError> {
        self.conn
            .execute(
                r"INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| RunDistError::Database(format!("Failed to write key '{key}': {e}")))?;

        log::debug!("Stored {} bytes under '{key}'", value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), RunDistError> {
        let rows = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .map_err(|e| RunDistError::Database(format!("Failed to remove key '{key}': {e}")))?;

        log::debug!("Removed '{key}' ({rows} row(s))");
        Ok(())
    }
}

/// Session store that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, RunDistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), RunDistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), RunDistError> {
        self.entries.remove(key);
        Ok(())
    }
}
