//! CLI administration tool for airline-registry.
//!
//! Provides commands for inspecting and cleaning up the registry and
//! checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # List airlines with their airport codes
//! cargo run --bin admin -- airline list
//!
//! # Delete an airport (its links are removed with it)
//! cargo run --bin admin -- airport delete 6f1c0c2e-... --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use airline_registry::application::services::{AirlineService, AirportService};
use airline_registry::infrastructure::persistence::{PgAirlineRepository, PgAirportRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing airline-registry.
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
    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage airlines
    Airline {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage airports
    Airport {
        #[command(subcommand)]
        action: RecordAction,
    },
}

/// Subcommands shared by airlines and airports.
#[derive(Subcommand)]
enum RecordAction {
    /// List all records
    List,

    /// Delete a record by id
    Delete {
        /// Record id (UUID)
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    let airlines = AirlineService::new(Arc::new(PgAirlineRepository::new(pool.clone())));
    let airports = AirportService::new(Arc::new(PgAirportRepository::new(pool.clone())));

    match cli.command {
        Commands::Stats => handle_stats(&airlines, &airports, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Airline { action } => handle_airline_action(action, &airlines).await?,
        Commands::Airport { action } => handle_airport_action(action, &airports).await?,
    }

    Ok(())
}

/// Displays record counts.
async fn handle_stats(
    airlines: &AirlineService,
    airports: &AirportService,
    pool: &PgPool,
) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let airline_count = airlines.count().await?;
    let airport_count = airports.count().await?;
    let link_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM airline_airports")
        .fetch_one(pool)
        .await?;

    println!(
        "  Airlines: {}",
        airline_count.to_string().bright_green().bold()
    );
    println!(
        "  Airports: {}",
        airport_count.to_string().bright_green().bold()
    );
    println!(
        "  Links:    {}",
        link_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches airline commands.
async fn handle_airline_action(action: RecordAction, service: &AirlineService) -> Result<()> {
    match action {
        RecordAction::List => {
            println!("{}", "Airlines".bright_blue().bold());
            println!();

            let airlines = service.find_all().await?;
            if airlines.is_empty() {
                println!("{}", "  No airlines found".yellow());
                return Ok(());
            }

            println!(
                "  {:<36} {:<24} {:<12} {}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Founded".bright_white().bold(),
                "Airports".bright_white().bold()
            );
            println!("  {}", "─".repeat(90).bright_black());

            for airline in &airlines {
                let codes: Vec<&str> = airline.airports.iter().map(|a| a.code.as_str()).collect();
                println!(
                    "  {:<36} {:<24} {:<12} {}",
                    airline.id.to_string().bright_black(),
                    airline.name.cyan(),
                    airline.foundation_date.format("%Y-%m-%d").to_string(),
                    codes.join(", ")
                );
            }

            println!();
            println!(
                "  Total: {}",
                airlines.len().to_string().bright_white().bold()
            );
            println!();
        }
        RecordAction::Delete { id, yes } => {
            let airline = service.find_one(&id).await?;

            println!("  Airline: {}", airline.name.cyan());
            println!("  Links:   {}", airline.airports.len());
            println!();

            if !confirm("Delete this airline?", yes)? {
                println!("{}", "Cancelled".red());
                return Ok(());
            }

            service.delete(&id).await?;
            println!("{}", "Airline deleted".green().bold());
        }
    }

    Ok(())
}

/// Dispatches airport commands.
async fn handle_airport_action(action: RecordAction, service: &AirportService) -> Result<()> {
    match action {
        RecordAction::List => {
            println!("{}", "Airports".bright_blue().bold());
            println!();

            let airports = service.find_all().await?;
            if airports.is_empty() {
                println!("{}", "  No airports found".yellow());
                return Ok(());
            }

            println!(
                "  {:<36} {:<5} {:<30} {}",
                "ID".bright_white().bold(),
                "Code".bright_white().bold(),
                "Name".bright_white().bold(),
                "Location".bright_white().bold()
            );
            println!("  {}", "─".repeat(90).bright_black());

            for airport in &airports {
                println!(
                    "  {:<36} {:<5} {:<30} {}, {}",
                    airport.id.to_string().bright_black(),
                    airport.code.bright_yellow(),
                    airport.name.cyan(),
                    airport.city,
                    airport.country
                );
            }

            println!();
            println!(
                "  Total: {}",
                airports.len().to_string().bright_white().bold()
            );
            println!();
        }
        RecordAction::Delete { id, yes } => {
            let airport = service.find_one(&id).await?;

            println!("  Airport: {} ({})", airport.name.cyan(), airport.code);
            println!("  Links:   {}", airport.airlines.len());
            println!();

            if !confirm("Delete this airport?", yes)? {
                println!("{}", "Cancelled".red());
                return Ok(());
            }

            service.delete(&id).await?;
            println!("{}", "Airport deleted".green().bold());
        }
    }

    Ok(())
}

/// Asks for confirmation unless `skip` is set. Defaults to "no".
fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
