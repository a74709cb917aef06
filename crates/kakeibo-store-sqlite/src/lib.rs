//! # kakeibo-store-sqlite
//!
//! SQLite adapter for the kakeibo expense ledger.
//! Implements `ExpenseRepository` with full CRUD and aggregation support.

pub mod migrations;
mod query_builder;
pub mod repository;
mod repository_impl;
mod row_mapping;

pub use repository::SqliteExpenseRepository;
