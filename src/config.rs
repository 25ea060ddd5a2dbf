//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Required Variables
//!
//! - `ADMIN_AUTH_KEY` - shared key checked by admin operations
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite:rateboard.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `COMMENT_COOLDOWN_MS` - Per-identity comment cooldown (default: 5000)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::DEFAULT_COOLDOWN_MS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Shared key checked by admin operations. Not a cryptographic
    /// credential; see `AdminPolicy` for the replacement seam.
    pub admin_auth_key: String,
    /// Minimum gap in milliseconds between two comments from the same
    /// identity.
    pub comment_cooldown_ms: i64,
    /// Maximum number of connections in the pool.
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ADMIN_AUTH_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:rateboard.db?mode=rwc".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let admin_auth_key = env::var("ADMIN_AUTH_KEY").context("ADMIN_AUTH_KEY must be set")?;

        let comment_cooldown_ms = env::var("COMMENT_COOLDOWN_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COOLDOWN_MS);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            admin_auth_key,
            comment_cooldown_ms,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not a SQLite URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `ADMIN_AUTH_KEY` is empty
    /// - `COMMENT_COOLDOWN_MS` is negative or above one hour
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.admin_auth_key.is_empty() {
            anyhow::bail!("ADMIN_AUTH_KEY must not be empty");
        }

        if self.comment_cooldown_ms < 0 {
            anyhow::bail!(
                "COMMENT_COOLDOWN_MS must not be negative, got {}",
                self.comment_cooldown_ms
            );
        }
        if self.comment_cooldown_ms > 3_600_000 {
            anyhow::bail!(
                "COMMENT_COOLDOWN_MS is too large (max: 3600000), got {}",
                self.comment_cooldown_ms
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary (without the admin key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Comment cooldown: {} ms", self.comment_cooldown_ms);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
