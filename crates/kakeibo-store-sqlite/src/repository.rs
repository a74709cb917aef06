//! SQLite-backed expense repository: connection handling.

use std::sync::{Mutex, MutexGuard};

use kakeibo_ledger::RepositoryError;
use rusqlite::Connection;

use crate::migrations::run_migrations;

/// SQLite-backed expense repository.
///
/// Holds a single connection behind a mutex. Every operation locks it,
/// runs exactly one statement, and releases it on every exit path; the
/// statement-level atomicity SQLite guarantees is all the ledger needs.
pub struct SqliteExpenseRepository {
    conn: Mutex<Connection>,
}

impl SqliteExpenseRepository {
    /// Opens or creates a SQLite database at the given path and brings its
    /// schema up to date.
    pub fn open(path: &str) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        // WAL keeps concurrent readers unblocked during writes.
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| RepositoryError::Storage {
                message: format!("failed to enable WAL: {e}"),
            })?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory database (tests and ephemeral use).
    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Locks the connection, mapping a poisoned mutex to a storage error.
    pub(crate) fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn.lock().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_in_memory_succeeds() {
        assert!(SqliteExpenseRepository::open_in_memory().is_ok());
    }

    #[test]
    fn open_creates_file() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("ledger.db");
        let path = db.to_str().expect("utf8");
        let repo = SqliteExpenseRepository::open(path);
        assert!(repo.is_ok());
        assert!(db.exists());
    }

    #[test]
    fn open_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tmp");
        let db = dir.path().join("ledger.db");
        let path = db.to_str().expect("utf8");

        {
            let repo = SqliteExpenseRepository::open(path).expect("first open");
            let conn = repo.lock_conn().expect("lock");
            conn.execute(
                "INSERT INTO expenses (date, amount, category) VALUES ('2024-01-01', 2.0, 'Other')",
                [],
            )
            .expect("insert");
        }

        let repo = SqliteExpenseRepository::open(path).expect("reopen");
        let conn = repo.lock_conn().expect("lock");
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .expect("count");
        assert_eq!(n, 1);
    }
}
