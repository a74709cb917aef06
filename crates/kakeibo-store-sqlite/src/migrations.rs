//! Database schema migrations for the expense ledger.

use kakeibo_ledger::RepositoryError;
use rusqlite::Connection;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), RepositoryError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the initial schema (v1).
///
/// `id` uses AUTOINCREMENT so rowids are strictly increasing and never
/// reused, even after deletes.
fn migrate_v1(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            amount      REAL NOT NULL,
            category    TEXT NOT NULL,
            subcategory TEXT NOT NULL DEFAULT '',
            note        TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
        CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);",
    )
    .map_err(|e| RepositoryError::Storage {
        message: format!("migration v1 failed: {e}"),
    })
}

/// Reads the current schema version from PRAGMA user_version.
fn get_schema_version(conn: &Connection) -> Result<u32, RepositoryError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to read schema version: {e}"),
        })
}

/// Sets the schema version via PRAGMA user_version.
fn set_schema_version(conn: &Connection, version: u32) -> Result<(), RepositoryError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| RepositoryError::Storage {
            message: format!("failed to set schema version: {e}"),
        })
}
