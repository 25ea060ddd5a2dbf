//! CLI administration tool for rateboard.
//!
//! Candidate approval is deliberately not reachable through the HTTP API;
//! this tool is the supported way to moderate candidates, next to a few
//! database helpers.
//!
//! # Usage
//!
//! ```bash
//! # List candidates awaiting approval
//! cargo run --bin admin -- candidate list --pending
//!
//! # Approve a candidate
//! cargo run --bin admin -- candidate approve c1
//!
//! # Send an approved candidate back to pending
//! cargo run --bin admin -- candidate reject c1
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
//! - `DATABASE_URL` (required): SQLite connection string

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;

/// CLI tool for managing rateboard.
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
    /// Manage candidates
    Candidate {
        #[command(subcommand)]
        action: CandidateAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Candidate moderation subcommands.
#[derive(Subcommand)]
enum CandidateAction {
    /// List candidates with approval state
    List {
        /// Show only candidates awaiting approval
        #[arg(short, long)]
        pending: bool,
    },

    /// Approve a candidate (makes it publicly visible)
    Approve {
        /// Candidate id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Send a candidate back to pending
    Reject {
        /// Candidate id
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = SqlitePool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Candidate { action } => handle_candidate_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches candidate moderation commands.
async fn handle_candidate_action(action: CandidateAction, pool: &SqlitePool) -> Result<()> {
    match action {
        CandidateAction::List { pending } => list_candidates(pool, pending).await?,
        CandidateAction::Approve { id, yes } => set_approval(pool, &id, true, yes).await?,
        CandidateAction::Reject { id, yes } => set_approval(pool, &id, false, yes).await?,
    }

    Ok(())
}

/// Lists candidates with their approval state.
async fn list_candidates(pool: &SqlitePool, pending_only: bool) -> Result<()> {
    let sql = if pending_only {
        "SELECT id, name, tg, approved FROM candidates WHERE approved != 'ДА' ORDER BY rowid"
    } else {
        "SELECT id, name, tg, approved FROM candidates ORDER BY rowid"
    };

    let rows: Vec<(String, String, String, String)> =
        sqlx::query_as(sql).fetch_all(pool).await?;

    if rows.is_empty() {
        println!("{}", "No candidates found".yellow());
        return Ok(());
    }

    println!("{}", "Candidates:".bright_white().bold());
    for (id, name, tg, approved) in rows {
        let status = if approved == "ДА" {
            "approved".green()
        } else {
            "pending".yellow()
        };
        let contact = if tg.is_empty() {
            String::new()
        } else {
            format!("  ({tg})")
        };
        println!("  {} {} [{}]{}", id.cyan(), name, status, contact);
    }

    Ok(())
}

/// Flips a candidate's approval state, with confirmation.
async fn set_approval(pool: &SqlitePool, id: &str, approve: bool, skip_confirm: bool) -> Result<()> {
    let (value, verb) = if approve {
        ("ДА", "Approve")
    } else {
        ("НЕТ", "Reject")
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("{verb} candidate '{id}'?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let result = sqlx::query("UPDATE candidates SET approved = ? WHERE id = ?")
        .bind(value)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        println!("{} {}", "No candidate with id".red(), id.cyan());
    } else {
        println!(
            "{} {} {}",
            "Candidate".green(),
            id.cyan(),
            if approve { "approved".green().bold() } else { "sent back to pending".yellow().bold() }
        );
    }

    Ok(())
}

/// Shows row counts for all tables.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    let candidates: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(pool)
        .await?;
    let approved: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates WHERE approved = 'ДА'")
        .fetch_one(pool)
        .await?;
    let votes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(pool)
        .await?;
    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!("{}", "Statistics:".bright_white().bold());
    println!("  Candidates: {candidates} ({approved} approved)");
    println!("  Votes:      {votes}");
    println!("  Comments:   {comments}");
    println!("  Users:      {users}");

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await?;
            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            println!("{}", "Database info:".bright_white().bold());
            println!("  SQLite version: {}", version.cyan());
        }
    }

    Ok(())
}
