//! CLI administration tool for yield-reports.
//!
//! Inspects and initializes the yield database without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check that the database opens and the table is readable
//! cargo run --bin admin -- db check
//!
//! # Create the database file and schema
//! cargo run --bin admin -- db init
//!
//! # List years, show statistics, print one year's report
//! cargo run --bin admin -- years
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- report 2019
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH` (optional): SQLite file, overridden by `--database`

use yield_reports::application::services::ReportService;
use yield_reports::config::{self, application_dir, resolve_database_path};
use yield_reports::infrastructure::persistence::{SqliteYieldRepository, YieldStore};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing yield-reports.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (defaults to DATABASE_PATH or summary.db next to the binary)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// List the years present in the table
    Years,

    /// Show row, crop, and year counts
    Stats,

    /// Print the report for one year
    Report {
        /// Year to report on
        year: i64,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that the database opens and `yield_summary` is readable
    Check,

    /// Create the database file if missing and apply the schema
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let path = database_path(cli.database);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &path).await?,
        Commands::Years => handle_years(&path).await?,
        Commands::Stats => handle_stats(&path).await?,
        Commands::Report { year } => handle_report(&path, year).await?,
    }

    Ok(())
}

fn database_path(flag: Option<PathBuf>) -> PathBuf {
    match flag {
        Some(path) => path,
        None => {
            let raw = std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| config::DEFAULT_DATABASE_FILE.to_string());
            resolve_database_path(Path::new(&raw), &application_dir())
        }
    }
}

fn report_service(path: &Path) -> ReportService<SqliteYieldRepository> {
    let store = Arc::new(YieldStore::lazy(path, 1));
    ReportService::new(Arc::new(SqliteYieldRepository::new(store)))
}

/// Handles `db` subcommands.
async fn handle_db_action(action: DbAction, path: &Path) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database...".bright_blue());
            println!("  Path: {}", path.display().to_string().cyan());

            let stats = report_service(path)
                .dataset_stats()
                .await
                .context("Database check failed")?;

            println!("{}", "Database OK".green().bold());
            println!("  Rows: {}", stats.rows.to_string().bright_yellow());
        }
        DbAction::Init => {
            println!("{}", "Initializing database...".bright_blue());
            println!("  Path: {}", path.display().to_string().cyan());

            let mut conn = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .connect()
                .await
                .context("Failed to open database")?;

            sqlx::migrate!("./migrations")
                .run(&mut conn)
                .await
                .context("Failed to apply schema")?;

            println!("{}", "Schema applied".green().bold());
        }
    }

    Ok(())
}

/// Prints every year in the table.
async fn handle_years(path: &Path) -> Result<()> {
    let years = report_service(path).years().await?;

    if years.is_empty() {
        println!("{}", "No data".yellow());
        return Ok(());
    }

    println!("{}", "Years".bright_blue().bold());
    for year in years {
        println!("  {}", year.to_string().cyan());
    }

    Ok(())
}

/// Prints dataset statistics.
async fn handle_stats(path: &Path) -> Result<()> {
    let stats = report_service(path).dataset_stats().await?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!("  Rows:  {}", stats.rows.to_string().bright_yellow().bold());
    println!(
        "  Crops: {} ({})",
        stats.crops.len().to_string().bright_yellow().bold(),
        stats.crops.join(", ")
    );

    let span = match (stats.years.first(), stats.years.last()) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "none".to_string(),
    };
    println!(
        "  Years: {} ({})",
        stats.years.len().to_string().bright_yellow().bold(),
        span
    );
    println!();

    Ok(())
}

/// Prints one year's table and navigation.
async fn handle_report(path: &Path, year: i64) -> Result<()> {
    let view = report_service(path).year_summary(year).await?;

    println!(
        "{}",
        format!("Crop Yields for {}", view.year).bright_blue().bold()
    );
    println!();
    println!(
        "  {:<24} {}",
        "Crop".bright_white().bold(),
        "Average Yield".bright_white().bold()
    );
    println!("  {}", "─".repeat(40).bright_black());
    for row in &view.table_rows {
        println!("  {:<24} {}", row.crop.cyan(), row.avg_yield);
    }
    println!();
    println!(
        "  Previous: {}  Next: {}",
        view.navigation.prev_year.to_string().bright_black(),
        view.navigation.next_year.to_string().bright_black()
    );
    println!();

    Ok(())
}
