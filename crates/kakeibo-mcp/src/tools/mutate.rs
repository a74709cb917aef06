//! Mutating tools: add, edit, delete.

use serde_json::{json, Value};

use kakeibo_ledger::{ExpenseRepository, RepositoryError};
use kakeibo_types::NewExpense;

use super::args::{DeleteExpenseArgs, EditExpenseArgs};

/// `add_expense`: inserts one row, storage assigns the id.
pub(super) async fn run_add(
    new_expense: &NewExpense,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let id = repository.add(new_expense).await?;
    tracing::info!(id, category = %new_expense.category, "expense added");
    Ok(json!({ "status": "ok", "id": id }))
}

/// `edit_expense`: applies the provided fields to one row.
///
/// `rows_updated` is 0 when no row has the id; that is a success, not an
/// error, so callers can tell "matched nothing" from "failed".
pub(super) async fn run_edit(
    edit_args: &EditExpenseArgs,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let rows = repository
        .update(edit_args.expense_id, &edit_args.patch)
        .await?;
    Ok(json!({ "status": "ok", "rows_updated": rows }))
}

/// `delete_expense`: hard-deletes one row.
pub(super) async fn run_delete(
    delete_args: &DeleteExpenseArgs,
    repository: &dyn ExpenseRepository,
) -> Result<Value, RepositoryError> {
    let rows = repository.delete(delete_args.expense_id).await?;
    Ok(json!({ "status": "ok", "rows_deleted": rows }))
}
