//! kakeibo CLI - expense ledger MCP server.

use clap::{Parser, Subcommand};

mod commands;
pub(crate) mod shared;

/// kakeibo - an expense ledger served over the Model Context Protocol.
#[derive(Debug, Parser)]
#[command(name = "kakeibo", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server over stdio or HTTP.
    Serve(commands::serve::ServeArgs),
    /// Show ledger statistics.
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = kakeibo_config::load_config(cli.config.as_deref())?;

    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    // Logs share the process with the stdio transport's stdout, so they
    // always go to stderr.
    let filter = tracing_subscriber::EnvFilter::new(filter);
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Status(args) => commands::status::execute(args, &config).await,
    }
}
