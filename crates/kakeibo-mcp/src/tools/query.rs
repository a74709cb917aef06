//! Read-only tools: list, summarize, search, monthly report.

use serde::Serialize;
use serde_json::Value;

use kakeibo_ledger::{DateRange, ExpenseRepository, RepositoryError};

use super::args::{ListExpensesArgs, MonthlyReportArgs, SearchExpensesArgs, SummarizeArgs};

/// Serializes a query result into the payload value.
fn to_payload<T: Serialize>(rows: &T) -> Result<Value, RepositoryError> {
    serde_json::to_value(rows).map_err(|e| RepositoryError::Storage {
        message: format!("serialize result: {e}"),
    })
}

/// `list_expenses`: rows within the closed date interval, newest first.
pub(super) async fn run_list(
    list_args: &ListExpensesArgs,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let range = DateRange::new(&list_args.start_date, &list_args.end_date);
    let rows = repository.list(&range).await?;
    to_payload(&rows)
}

/// `summarize`: per-category totals within the closed date interval.
pub(super) async fn run_summarize(
    summarize_args: &SummarizeArgs,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let range = DateRange::new(&summarize_args.start_date, &summarize_args.end_date);
    let groups = repository
        .summarize(&range, summarize_args.category_filter())
        .await?;
    to_payload(&groups)
}

/// `search_expenses`: keyword match over note, category, subcategory.
pub(super) async fn run_search(
    search_args: &SearchExpensesArgs,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let rows = repository.search(&search_args.keyword).await?;
    to_payload(&rows)
}

/// `monthly_report`: per-month totals for one year.
pub(super) async fn run_monthly_report(
    report_args: &MonthlyReportArgs,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let year = report_args.year.to_string();
    let months = repository.monthly_report(&year).await?;
    to_payload(&months)
}
