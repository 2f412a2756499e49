//! CLI administration tool for urlshort.
//!
//! Shortens, resolves and lists URLs directly against the database, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Resolve a short code
//! cargo run --bin admin -- expand Xk2mP9qLw4
//!
//! # List URLs created on a day (defaults to today)
//! cargo run --bin admin -- list --date 2025-03-10
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use urlshort::application::services::{ShortenOutcome, UrlService};
use urlshort::config::{Config, StorageBackend};
use urlshort::infrastructure::persistence::{PgRecordStore, pool};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing urlshort.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL (idempotent per URL)
    Shorten {
        /// URL to shorten; prompted for when omitted
        url: Option<String>,
    },

    /// Resolve a short code to its original URL
    Expand {
        /// Short code to resolve
        code: String,
    },

    /// List URLs created on a given day
    List {
        /// Day in YYYY-MM-DD format (default: today, local time)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show statistics
    Stats,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        println!(
            "{}",
            "⚠️  STORAGE_BACKEND is not postgres; the admin tool always uses the database"
                .yellow()
        );
        config.force_postgres()?;
    }

    let pool = pool::connect(&config).await?;
    let service = UrlService::new(Arc::new(PgRecordStore::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await?,
        Commands::Expand { code } => expand(&service, &code).await?,
        Commands::List { date } => list(&service, date).await?,
        Commands::Stats => handle_stats(&service, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Shortens a URL, prompting for it when not given.
async fn shorten(service: &UrlService, url: Option<String>) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Original URL")
            .interact_text()?,
    };

    let outcome = service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    match &outcome {
        ShortenOutcome::Created(_) => println!("{}", "✅ Short URL created".green().bold()),
        ShortenOutcome::Existing(_) => {
            println!("{}", "ℹ️  URL was already shortened".yellow())
        }
    }

    let record = outcome.record();
    println!();
    println!("  ID:        {}", record.id.to_string().bright_black());
    println!("  Original:  {}", record.original_url.cyan());
    println!("  Short:     {}", record.short_url.bright_yellow().bold());
    println!();

    Ok(())
}

/// Resolves a short code.
async fn expand(service: &UrlService, code: &str) -> Result<()> {
    let record = service
        .expand(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{} → {}", record.short_url.bright_yellow(), record.original_url.cyan());

    Ok(())
}

/// Lists URLs created on a day.
///
/// # Output Format
///
/// ```text
/// 📋 URLs created on 2025-03-10
///
///   ID    Short        Created   Original
///   ─────────────────────────────────────────────────────────────
///   1     Xk2mP9qLw4   09:15:02  https://example.com
/// ```
async fn list(service: &UrlService, date: Option<String>) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    println!(
        "{}",
        format!("📋 URLs created on {}", date).bright_blue().bold()
    );
    println!();

    let records = service
        .list_created_on(&date)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<12} {:<9} {}",
        "ID".bright_white().bold(),
        "Short".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<12} {:<9} {}",
            record.id.to_string().bright_black(),
            record.short_url.bright_yellow(),
            record
                .created_at
                .with_timezone(&Local)
                .format("%H:%M:%S")
                .to_string()
                .bright_black(),
            record.original_url.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays record statistics.
///
/// Shows:
/// - Total number of records
/// - Records created today
async fn handle_stats(service: &UrlService, pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

    let today = Local::now().format("%Y-%m-%d").to_string();
    let created_today = service
        .list_created_on(&today)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?
        .len();

    let oldest: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MIN(created_at) FROM urls")
            .fetch_one(pool)
            .await
            .context("Failed to query oldest record")?;

    println!("  URLs:          {}", total.to_string().bright_green().bold());
    println!(
        "  Created today: {}",
        created_today.to_string().bright_green().bold()
    );
    if let Some(oldest) = oldest {
        println!(
            "  Oldest:        {}",
            oldest
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success = TRUE",
            )
            .fetch_one(pool)
            .await
            .context("Failed to read _sqlx_migrations (has the server run migrations?)")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
