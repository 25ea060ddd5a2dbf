//! Repository trait for vote data access.

use crate::domain::entities::{UpsertOutcome, Vote};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for votes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteVoteRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Lists all votes in insertion order (ascending internal id),
    /// regardless of the candidate's approval state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Vote>, AppError>;

    /// Writes a voter's rating with last-write-wins semantics.
    ///
    /// If a row already exists for `(candidate_id, email)`, its score and
    /// date are updated in place; otherwise a new row is inserted. The
    /// lookup and the write run in a single transaction so two concurrent
    /// requests from the same voter cannot produce duplicate rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert_by_voter(
        &self,
        candidate_id: &str,
        email: &str,
        score: f64,
        at: DateTime<Utc>,
    ) -> Result<UpsertOutcome, AppError>;

    /// Inserts `count` identical vote rows in one transaction.
    ///
    /// Every row carries the same score, email, and timestamp. The batch
    /// is atomic: either all rows are committed or none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_batch(
        &self,
        candidate_id: &str,
        score: f64,
        email: &str,
        at: DateTime<Utc>,
        count: u32,
    ) -> Result<u32, AppError>;
}
