//! Aggregation result shapes.

use serde::{Deserialize, Serialize};

/// Per-category totals over a date range.
///
/// A category with zero matching rows is never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category label.
    pub category: String,
    /// Sum of `amount` over matching rows.
    pub total_amount: f64,
    /// Number of matching rows.
    pub count: u32,
}

/// Per-month totals within a single year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// Zero-padded month component, `"01"` through `"12"`.
    pub month: String,
    /// Sum of `amount` over the month's rows.
    pub total_amount: f64,
    /// Number of rows in the month.
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_summary_roundtrip() {
        let s = CategorySummary {
            category: "Travel".to_string(),
            total_amount: 120.5,
            count: 3,
        };
        let json = serde_json::to_string(&s).expect("serialize");
        let back: CategorySummary = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, s);
    }

    #[test]
    fn monthly_total_keeps_zero_padding() {
        let m = MonthlyTotal {
            month: "03".to_string(),
            total_amount: 9.99,
            count: 1,
        };
        let json = serde_json::to_string(&m).expect("serialize");
        assert!(json.contains("\"03\""));
    }
}
