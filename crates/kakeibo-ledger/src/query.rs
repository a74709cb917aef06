//! Query types for ledger lookups.

use serde::{Deserialize, Serialize};

/// An inclusive date interval.
///
/// Bounds are ISO `YYYY-MM-DD` strings compared lexicographically, which
/// matches chronological order for well-formed dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date included in the range.
    pub start: String,
    /// Last date included in the range.
    pub end: String,
}

impl DateRange {
    /// Creates a range spanning `start..=end`.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}
