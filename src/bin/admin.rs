//! CLI administration tool for linksnip.
//!
//! Provides commands for bulk-importing URL batches, viewing statistics,
//! and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Import a batch file (JSON array of {longUrl, alias?} records)
//! cargo run --bin admin -- import links.json
//!
//! # Skip the confirmation prompt
//! cargo run --bin admin -- import links.json --yes
//!
//! # View store totals, or one link
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- stats abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`linksnip::config`]. `DATABASE_URL` selects
//! the SQLite database (default: `sqlite://urls.db`).

use linksnip::application::services::{ImportService, LinkService, StatsService};
use linksnip::config;
use linksnip::domain::entities::{ImportOutcome, ImportRecord};
use linksnip::infrastructure::persistence::SqliteLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// CLI tool for managing linksnip.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Bulk-import URL records from a JSON batch file
    Import {
        /// Path to the batch file
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show statistics for the whole store, or for one link
    Stats {
        /// Short identifier to inspect
        id: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    // The CLI shares the server's schema setup: create the database file
    // if needed and apply migrations idempotently.
    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePool::connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Import { file, yes } => handle_import(file, yes, &pool, &config.base_url).await?,
        Commands::Stats { id } => handle_stats(id, &pool, &config.base_url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Imports a batch file through the same policy as the HTTP endpoint.
///
/// # Accepted File Formats
///
/// - A JSON array of records: `[{ "longUrl": "...", "alias": "..." }, ...]`
/// - An object wrapping one: `{ "records": [...] }`
///
/// Anything else is a malformed batch and nothing is imported.
async fn handle_import(file: PathBuf, skip_confirm: bool, pool: &SqlitePool, base_url: &str) -> Result<()> {
    println!("{}", "📦 Bulk Import".bright_blue().bold());
    println!();

    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read batch file '{}'", file.display()))?;

    let records = parse_batch(&text)?;

    println!(
        "  File:    {}",
        file.display().to_string().cyan()
    );
    println!(
        "  Records: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Import {} records?", records.len()))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let link_service = Arc::new(LinkService::new(repository));
    let import_service = ImportService::new(link_service.clone());

    let report = import_service.import(records).await;

    println!();
    for outcome in &report.outcomes {
        match outcome {
            ImportOutcome::Imported(link) => {
                println!(
                    "  {} {}  {}",
                    "✅".green(),
                    link_service.get_short_url(base_url, &link.id).bright_yellow(),
                    link.long_url.bright_black()
                );
            }
            ImportOutcome::Skipped { reason } => {
                println!("  {} skipped: {}", "⚠️".yellow(), reason.yellow());
            }
            ImportOutcome::Failed { reason } => {
                println!("  {} failed: {}", "❌".red(), reason.red());
            }
        }
    }

    println!();
    println!(
        "  Imported {} of {} ({} skipped, {} failed)",
        report.imported().to_string().bright_green().bold(),
        report.total().to_string().bright_white().bold(),
        report.skipped().to_string().yellow(),
        report.failed().to_string().red()
    );
    println!();

    Ok(())
}

/// Parses a batch file into import records.
fn parse_batch(text: &str) -> Result<Vec<ImportRecord>> {
    let value: Value = serde_json::from_str(text).context("Batch file is not valid JSON")?;

    let records_value = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove("records")
            .context("Batch object has no 'records' array")?,
        _ => anyhow::bail!("Batch file must be a JSON array of records"),
    };

    serde_json::from_value(records_value).context("Batch records have an unexpected shape")
}

/// Displays statistics for the whole store or a single link.
async fn handle_stats(id: Option<String>, pool: &SqlitePool, base_url: &str) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let stats_service = StatsService::new(repository.clone());

    match id {
        Some(id) => {
            let link = stats_service.get_link_stats(&id).await?;

            let link_service = LinkService::new(repository);

            println!("  Id:        {}", link.id.cyan());
            println!(
                "  Short URL: {}",
                link_service.get_short_url(base_url, &link.id).bright_yellow()
            );
            println!("  Target:    {}", link.long_url.bright_white());
            println!(
                "  Clicks:    {}",
                link.clicks.to_string().bright_green().bold()
            );
        }
        None => {
            let overview = stats_service.overview().await?;

            println!(
                "  Links:  {}",
                overview.links.to_string().bright_green().bold()
            );
            println!(
                "  Clicks: {}",
                overview.clicks.to_string().bright_green().bold()
            );
        }
    }

    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
