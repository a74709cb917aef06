//! Validation errors for the kakeibo domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejection of a domain value before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field was missing or empty.
    MissingField {
        /// Name of the offending field.
        field: String,
    },
}

impl ValidationError {
    /// Creates a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "required field is missing or empty: {field}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
