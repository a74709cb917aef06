//! Row-to-domain mapping for the SQLite expense repository.

use kakeibo_types::Expense;

/// Maps a SQLite row (in `COLS` order) to an `Expense` domain object.
pub(crate) fn row_to_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        subcategory: row.get(4)?,
        note: row.get(5)?,
    })
}

/// Extension trait for optional query results.
pub(crate) trait OptionalExt<T> {
    /// Converts a "no rows" error into `Ok(None)`.
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
