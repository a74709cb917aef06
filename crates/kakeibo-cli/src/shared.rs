//! Shared helpers used across CLI commands.
//!
//! Centralises opening the SQLite ledger so every command creates parent
//! directories and runs migrations the same way.

use std::sync::Arc;

use kakeibo_ledger::ExpenseRepository;
use kakeibo_store_sqlite::SqliteExpenseRepository;

/// Opens the SQLite ledger at `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_repository(path: &str) -> anyhow::Result<Arc<dyn ExpenseRepository>> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let repo = SqliteExpenseRepository::open(path)
        .map_err(|e| anyhow::anyhow!("ledger error: {e}"))?;
    Ok(Arc::new(repo))
}
