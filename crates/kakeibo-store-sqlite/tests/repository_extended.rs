//! Search and monthly-report tests for `SqliteExpenseRepository`.

use kakeibo_ledger::ExpenseRepository;
use kakeibo_store_sqlite::SqliteExpenseRepository;
use kakeibo_types::NewExpense;

fn expense(date: &str, amount: f64, category: &str, sub: &str, note: &str) -> NewExpense {
    NewExpense {
        date: date.to_string(),
        amount,
        category: category.to_string(),
        subcategory: sub.to_string(),
        note: note.to_string(),
    }
}

async fn seeded_repo() -> SqliteExpenseRepository {
    let repo = SqliteExpenseRepository::open_in_memory().expect("open");
    for e in [
        expense("2024-01-15", 12.0, "Food & Dining", "Coffee", "morning espresso"),
        expense("2024-02-20", 55.0, "Transportation", "Train", "airport express"),
        expense("2024-02-25", 30.0, "Entertainment", "", "concert tickets"),
        expense("2023-12-31", 80.0, "Travel", "Hotel", "new year trip"),
    ] {
        repo.add(&e).await.expect("seed");
    }
    repo
}

#[tokio::test]
async fn search_matches_note_substring() {
    let repo = seeded_repo().await;
    let hits = repo.search("espresso").await.expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].note, "morning espresso");
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let repo = seeded_repo().await;
    let hits = repo.search("ESPRESSO").await.expect("search");
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn search_spans_category_and_subcategory() {
    let repo = seeded_repo().await;

    let by_category = repo.search("Entertainment").await.expect("search");
    assert_eq!(by_category.len(), 1);

    let by_subcategory = repo.search("train").await.expect("search");
    assert_eq!(by_subcategory.len(), 1);
    assert_eq!(by_subcategory[0].subcategory, "Train");
}

#[tokio::test]
async fn search_orders_newest_first() {
    let repo = seeded_repo().await;
    // "e" appears in every seeded row somewhere.
    let hits = repo.search("e").await.expect("search");
    assert_eq!(hits.len(), 4);
    let dates: Vec<&str> = hits.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2024-02-25", "2024-02-20", "2024-01-15", "2023-12-31"]
    );
}

#[tokio::test]
async fn search_without_match_returns_empty() {
    let repo = seeded_repo().await;
    let hits = repo.search("zeppelin").await.expect("search");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn monthly_report_groups_by_month() {
    let repo = seeded_repo().await;
    let months = repo.monthly_report("2024").await.expect("report");

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month, "01");
    assert_eq!(months[0].total_amount, 12.0);
    assert_eq!(months[0].count, 1);
    assert_eq!(months[1].month, "02");
    assert_eq!(months[1].total_amount, 85.0);
    assert_eq!(months[1].count, 2);
}

#[tokio::test]
async fn monthly_report_omits_empty_months_and_other_years() {
    let repo = seeded_repo().await;
    let months = repo.monthly_report("2024").await.expect("report");
    assert!(months.iter().all(|m| m.count > 0));
    // The 2023-12-31 row must not leak into the 2024 report.
    assert!(months.iter().all(|m| m.month != "12"));

    let empty = repo.monthly_report("2020").await.expect("report");
    assert!(empty.is_empty());
}
