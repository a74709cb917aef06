//! Abstract repository trait (port) for expense storage.

use async_trait::async_trait;
use thiserror::Error;

use kakeibo_types::{
    CategorySummary, Expense, ExpensePatch, MonthlyTotal, NewExpense, ValidationError,
};

use crate::query::DateRange;

/// Errors returned by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A required field was missing or empty.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },
    /// An update was requested with no fields to change.
    #[error("no fields provided to update")]
    EmptyPatch,
    /// A database or I/O error occurred.
    #[error("storage error: {message}")]
    Storage {
        /// The underlying failure description.
        message: String,
    },
}

impl From<ValidationError> for RepositoryError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidInput {
            message: e.to_string(),
        }
    }
}

/// Abstract trait for expense persistence.
///
/// Implementations live in adapter crates (e.g., `kakeibo-store-sqlite`).
/// Every operation is a single atomic statement against storage; there is
/// no cross-call session state.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Inserts a new expense and returns the storage-assigned id.
    async fn add(&self, expense: &NewExpense) -> Result<i64, RepositoryError>;

    /// Finds an expense by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, RepositoryError>;

    /// Lists expenses within an inclusive date range, newest first
    /// (`date DESC, id DESC`).
    async fn list(&self, range: &DateRange) -> Result<Vec<Expense>, RepositoryError>;

    /// Groups expenses in the range by category, optionally restricted to
    /// one category. Ordered by descending total. Categories with no
    /// matching rows are omitted.
    async fn summarize(
        &self,
        range: &DateRange,
        category: Option<&str>,
    ) -> Result<Vec<CategorySummary>, RepositoryError>;

    /// Applies a partial update to the expense with the given id.
    ///
    /// Returns the number of rows changed (0 when no such id exists).
    /// An empty patch fails with [`RepositoryError::EmptyPatch`] before
    /// touching storage.
    async fn update(&self, id: i64, patch: &ExpensePatch) -> Result<u64, RepositoryError>;

    /// Deletes the expense with the given id. Returns the number of rows
    /// removed (0 when no such id exists).
    async fn delete(&self, id: i64) -> Result<u64, RepositoryError>;

    /// Case-insensitive substring search over note, category and
    /// subcategory, newest first.
    async fn search(&self, keyword: &str) -> Result<Vec<Expense>, RepositoryError>;

    /// Per-month totals for the given four-digit year, month ascending.
    /// Months with no rows are omitted.
    async fn monthly_report(&self, year: &str) -> Result<Vec<MonthlyTotal>, RepositoryError>;

    /// Total number of rows in the ledger.
    async fn count(&self) -> Result<u64, RepositoryError>;
}
