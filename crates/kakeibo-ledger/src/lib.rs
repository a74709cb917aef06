//! # kakeibo-ledger
//!
//! Port definitions (abstract traits) for the expense ledger.
//! Adapter crates implement these traits.

pub mod query;
pub mod repository;

pub use query::DateRange;
pub use repository::{ExpenseRepository, RepositoryError};
