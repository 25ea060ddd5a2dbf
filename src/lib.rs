//! # Rateboard
//!
//! A candidate rating and commenting backend built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Public snapshot of approved candidates, votes, and comments
//! - Last-write-wins voting, deduplicated per voter
//! - Comment posting with a per-identity cooldown
//! - Admin candidate upserts and synthetic vote boosts behind a key check
//! - Open nickname registration with retroactive display-name resolution
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_AUTH_KEY="change-me"
//! export DATABASE_URL="sqlite:rateboard.db?mode=rwc"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CandidateService, CommentService, SnapshotService, UserService, VoteService,
    };
    pub use crate::domain::entities::{Candidate, UpsertOutcome, Vote};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
