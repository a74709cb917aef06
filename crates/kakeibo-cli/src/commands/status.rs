//! `kakeibo status` command.
//!
//! Displays ledger statistics and the effective storage paths.

use clap::Args;

use kakeibo_config::LedgerConfig;
use kakeibo_ledger::ExpenseRepository;

use crate::shared;

/// Show ledger statistics.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Database path (overrides config).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the status command.
pub async fn execute(args: &StatusArgs, config: &LedgerConfig) -> anyhow::Result<()> {
    let db_path = args
        .db
        .clone()
        .unwrap_or_else(|| config.storage.database_path.clone());
    let repo = shared::open_repository(&db_path)?;
    let rows = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("ledger query: {e}"))?;

    println!("kakeibo Ledger Status");
    println!("{}", "─".repeat(40));
    println!("  Version    : {}", env!("CARGO_PKG_VERSION"));
    println!("  Database   : {db_path}");
    println!("  Categories : {}", config.storage.categories_path);
    println!();
    println!("Ledger");
    println!("  Expenses : {rows}");

    Ok(())
}
