//! Argument shapes for the ledger tools.
//!
//! `add_expense` deserializes straight into `kakeibo_types::NewExpense`;
//! the shapes here cover the remaining tools.

use std::fmt;

use serde::Deserialize;

use kakeibo_types::ExpensePatch;

/// Arguments for `list_expenses`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListExpensesArgs {
    /// First date included (ISO `YYYY-MM-DD`).
    pub start_date: String,
    /// Last date included (ISO `YYYY-MM-DD`).
    pub end_date: String,
}

/// Arguments for `summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeArgs {
    /// First date included (ISO `YYYY-MM-DD`).
    pub start_date: String,
    /// Last date included (ISO `YYYY-MM-DD`).
    pub end_date: String,
    /// Optional exact-match category filter. An empty string counts as
    /// "no filter", matching the historical tool behavior.
    #[serde(default)]
    pub category: Option<String>,
}

impl SummarizeArgs {
    /// The effective category filter.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Arguments for `edit_expense`.
#[derive(Debug, Clone, Deserialize)]
pub struct EditExpenseArgs {
    /// Id of the expense to edit.
    pub expense_id: i64,
    /// The fields to change.
    #[serde(flatten)]
    pub patch: ExpensePatch,
}

/// Arguments for `delete_expense`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteExpenseArgs {
    /// Id of the expense to delete.
    pub expense_id: i64,
}

/// Arguments for `search_expenses`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchExpensesArgs {
    /// Case-insensitive substring to look for.
    pub keyword: String,
}

/// Arguments for `monthly_report`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyReportArgs {
    /// The year to report on.
    pub year: YearArg,
}

/// A year given either as a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearArg {
    /// `2024`
    Number(i64),
    /// `"2024"`
    Text(String),
}

impl fmt::Display for YearArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}
