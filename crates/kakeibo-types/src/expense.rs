//! The expense record and its creation/patch shapes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A persisted expense row.
///
/// `id` is assigned by storage on insert and never reused or mutated.
/// `date` is an ISO `YYYY-MM-DD` string so that lexicographic comparison
/// equals chronological comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Storage-assigned identifier, strictly increasing.
    pub id: i64,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Amount spent. Negative values represent refunds.
    pub amount: f64,
    /// Top-level category label.
    pub category: String,
    /// Optional refinement of the category.
    #[serde(default)]
    pub subcategory: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

/// An expense to be inserted. Storage assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Amount spent.
    pub amount: f64,
    /// Top-level category label.
    pub category: String,
    /// Optional refinement of the category.
    #[serde(default)]
    pub subcategory: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

impl NewExpense {
    /// Checks that the required text fields are present and non-empty.
    ///
    /// `amount` carries no sign or range constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date.trim().is_empty() {
            return Err(ValidationError::missing_field("date"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::missing_field("category"));
        }
        Ok(())
    }
}

/// A partial update for an existing expense.
///
/// `None` (absent or JSON `null`) means "do not change". Any present value,
/// including an empty string or `0.0`, replaces the stored one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensePatch {
    /// New date, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// New amount, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// New category, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New subcategory, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// New note, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExpensePatch {
    /// Returns true when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Number of provided fields.
    pub fn field_count(&self) -> usize {
        [
            self.date.is_some(),
            self.amount.is_some(),
            self.category.is_some(),
            self.subcategory.is_some(),
            self.note.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count()
    }
}
