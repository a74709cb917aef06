//! `ExpenseRepository` trait implementation for `SqliteExpenseRepository`.

use async_trait::async_trait;
use kakeibo_ledger::{DateRange, ExpenseRepository, RepositoryError};
use kakeibo_types::{CategorySummary, Expense, ExpensePatch, MonthlyTotal, NewExpense};
use rusqlite::params;

use crate::query_builder::{build_summarize_query, build_update_query};
use crate::repository::SqliteExpenseRepository;
use crate::row_mapping::{row_to_expense, OptionalExt};

/// Column list shared across all SELECT queries.
const COLS: &str = "id, date, amount, category, subcategory, note";

/// Maps a `rusqlite::Error` to a `RepositoryError::Storage`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: e.to_string(),
    }
}

#[async_trait]
impl ExpenseRepository for SqliteExpenseRepository {
    async fn add(&self, expense: &NewExpense) -> Result<i64, RepositoryError> {
        expense.validate()?;
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO expenses (date, amount, category, subcategory, note) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                expense.date,
                expense.amount,
                expense.category,
                expense.subcategory,
                expense.note,
            ],
        )
        .map_err(map_sqlite_err)?;
        Ok(conn.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM expenses WHERE id = ?1");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let result = stmt
            .query_row(params![id], row_to_expense)
            .optional()
            .map_err(map_sqlite_err)?;
        Ok(result)
    }

    async fn list(&self, range: &DateRange) -> Result<Vec<Expense>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!(
            "SELECT {COLS} FROM expenses \
             WHERE date BETWEEN ?1 AND ?2 \
             ORDER BY date DESC, id DESC"
        );
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let expenses = stmt
            .query_map(params![range.start, range.end], row_to_expense)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(expenses)
    }

    async fn summarize(
        &self,
        range: &DateRange,
        category: Option<&str>,
    ) -> Result<Vec<CategorySummary>, RepositoryError> {
        let conn = self.lock_conn()?;
        let (sql, param_values) = build_summarize_query(range, category);
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let summaries = stmt
            .query_map(params_refs.as_slice(), |row| {
                Ok(CategorySummary {
                    category: row.get(0)?,
                    total_amount: row.get(1)?,
                    count: row.get(2)?,
                })
            })
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(summaries)
    }

    async fn update(&self, id: i64, patch: &ExpensePatch) -> Result<u64, RepositoryError> {
        // Reject before locking so an empty patch never reaches storage.
        let (sql, param_values) =
            build_update_query(id, patch).ok_or(RepositoryError::EmptyPatch)?;
        let conn = self.lock_conn()?;
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let affected = conn
            .execute(&sql, params_refs.as_slice())
            .map_err(map_sqlite_err)?;
        Ok(affected as u64)
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let conn = self.lock_conn()?;
        let affected = conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])
            .map_err(map_sqlite_err)?;
        Ok(affected as u64)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Expense>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!(
            "SELECT {COLS} FROM expenses \
             WHERE note LIKE ?1 OR category LIKE ?1 OR subcategory LIKE ?1 \
             ORDER BY date DESC, id DESC"
        );
        // The pattern is a bound value; wildcards on both sides give the
        // substring semantics, and LIKE is case-insensitive for ASCII.
        let pattern = format!("%{keyword}%");
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let expenses = stmt
            .query_map(params![pattern], row_to_expense)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(expenses)
    }

    async fn monthly_report(&self, year: &str) -> Result<Vec<MonthlyTotal>, RepositoryError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT strftime('%m', date) AS month, \
                        SUM(amount) AS total_amount, \
                        COUNT(*) AS count \
                 FROM expenses \
                 WHERE strftime('%Y', date) = ?1 \
                 GROUP BY month \
                 ORDER BY month ASC",
            )
            .map_err(map_sqlite_err)?;
        let months = stmt
            .query_map(params![year], |row| {
                Ok(MonthlyTotal {
                    month: row.get(0)?,
                    total_amount: row.get(1)?,
                    count: row.get(2)?,
                })
            })
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(months)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let conn = self.lock_conn()?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .map_err(map_sqlite_err)?;
        Ok(n as u64)
    }
}
