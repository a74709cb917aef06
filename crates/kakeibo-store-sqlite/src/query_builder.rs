//! Dynamic SQL construction for patch updates and filtered summaries.
//!
//! Column names are never taken from input: each assignment below is a
//! compiled-in string for one of the five mutable columns, and only the
//! values are parameter-bound.

use kakeibo_types::ExpensePatch;

use kakeibo_ledger::DateRange;

/// Builds the UPDATE statement for a partial patch.
///
/// Returns `None` when the patch provides no fields; callers must treat
/// that as an error before touching storage. The id parameter is bound
/// last, after the assignment values.
pub(crate) fn build_update_query(
    id: i64,
    patch: &ExpensePatch,
) -> Option<(String, Vec<Box<dyn rusqlite::types::ToSql>>)> {
    let mut assignments: Vec<&'static str> = Vec::new();
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    if let Some(ref date) = patch.date {
        assignments.push("date = ?");
        params.push(Box::new(date.clone()));
    }
    if let Some(amount) = patch.amount {
        assignments.push("amount = ?");
        params.push(Box::new(amount));
    }
    if let Some(ref category) = patch.category {
        assignments.push("category = ?");
        params.push(Box::new(category.clone()));
    }
    if let Some(ref subcategory) = patch.subcategory {
        assignments.push("subcategory = ?");
        params.push(Box::new(subcategory.clone()));
    }
    if let Some(ref note) = patch.note {
        assignments.push("note = ?");
        params.push(Box::new(note.clone()));
    }

    if assignments.is_empty() {
        return None;
    }

    let sql = format!(
        "UPDATE expenses SET {} WHERE id = ?",
        assignments.join(", ")
    );
    params.push(Box::new(id));
    Some((sql, params))
}

/// Builds the grouped summary query, optionally filtered to one category.
pub(crate) fn build_summarize_query(
    range: &DateRange,
    category: Option<&str>,
) -> (String, Vec<Box<dyn rusqlite::types::ToSql>>) {
    let mut sql = String::from(
        "SELECT category, SUM(amount) AS total_amount, COUNT(*) AS count \
         FROM expenses WHERE date BETWEEN ? AND ?",
    );
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = vec![
        Box::new(range.start.clone()),
        Box::new(range.end.clone()),
    ];
    if let Some(cat) = category {
        sql.push_str(" AND category = ?");
        params.push(Box::new(cat.to_string()));
    }
    sql.push_str(" GROUP BY category ORDER BY total_amount DESC");
    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_builds_nothing() {
        assert!(build_update_query(1, &ExpensePatch::default()).is_none());
    }

    #[test]
    fn single_field_patch() {
        let patch = ExpensePatch {
            category: Some("Travel".to_string()),
            ..Default::default()
        };
        let (sql, params) = build_update_query(9, &patch).expect("query");
        assert_eq!(sql, "UPDATE expenses SET category = ? WHERE id = ?");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn full_patch_orders_assignments() {
        let patch = ExpensePatch {
            date: Some("2024-05-01".to_string()),
            amount: Some(4.2),
            category: Some("Food & Dining".to_string()),
            subcategory: Some("Coffee".to_string()),
            note: Some("espresso".to_string()),
        };
        let (sql, params) = build_update_query(3, &patch).expect("query");
        assert_eq!(
            sql,
            "UPDATE expenses SET date = ?, amount = ?, category = ?, \
             subcategory = ?, note = ? WHERE id = ?"
        );
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn summarize_without_category_binds_two_params() {
        let range = DateRange::new("2024-01-01", "2024-12-31");
        let (sql, params) = build_summarize_query(&range, None);
        assert!(!sql.contains("AND category"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn summarize_with_category_appends_filter() {
        let range = DateRange::new("2024-01-01", "2024-12-31");
        let (sql, params) = build_summarize_query(&range, Some("Travel"));
        assert!(sql.contains("AND category = ?"));
        assert!(sql.ends_with("ORDER BY total_amount DESC"));
        assert_eq!(params.len(), 3);
    }
}
