//! Database migrations for rundist.
//!
//! Each migration upgrades the schema by one version and runs automatically
//! when the database is opened. The version lives in `PRAGMA user_version`.

use rusqlite::Connection;

use crate::error::RunDistError;

/// Current schema version.
pub(super) const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, RunDistError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RunDistError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), RunDistError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| RunDistError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), RunDistError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        log::debug!("Applying schema migration v{version}");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), RunDistError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(RunDistError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: key-value table holding serialized session histories.
fn migrate_v1(conn: &Connection) -> Result<(), RunDistError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| RunDistError::Database(format!("Migration v1 failed: {e}")))
}
