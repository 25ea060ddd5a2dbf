//! Vote casting and admin boost.

use std::sync::Arc;

use chrono::Utc;

use crate::application::services::AdminPolicy;
use crate::domain::entities::{BOOST_SCORE, UpsertOutcome};
use crate::domain::identity::ADMIN_IDENTITY;
use crate::domain::repositories::VoteRepository;
use crate::error::AppError;

/// Service for recording ratings.
///
/// Covers both the public vote operation (last-write-wins per voter) and
/// the admin boost that injects synthetic votes in bulk.
pub struct VoteService<V: VoteRepository, P: AdminPolicy> {
    vote_repository: Arc<V>,
    admin_policy: Arc<P>,
}

impl<V: VoteRepository, P: AdminPolicy> VoteService<V, P> {
    /// Creates a new vote service.
    pub fn new(vote_repository: Arc<V>, admin_policy: Arc<P>) -> Self {
        Self {
            vote_repository,
            admin_policy,
        }
    }

    /// Records a voter's rating of a candidate.
    ///
    /// A voter may re-rate any number of times; only the latest score and
    /// timestamp are retained (no history).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when `target_id` is missing/empty
    /// or `rating` did not resolve to a finite number. Store failures map
    /// to [`AppError::Internal`].
    pub async fn cast(
        &self,
        target_id: Option<String>,
        rating: Option<f64>,
        email: String,
    ) -> Result<UpsertOutcome, AppError> {
        let target_id = match target_id {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::bad_request("Bad request")),
        };
        let rating = rating.ok_or_else(|| AppError::bad_request("Bad request"))?;

        self.vote_repository
            .upsert_by_voter(&target_id, &email, rating, Utc::now())
            .await
    }

    /// Injects `count` synthetic five-star votes for a candidate.
    ///
    /// All rows share one timestamp and the admin identity, so they are
    /// never collapsed by the per-voter dedup of [`Self::cast`]. The batch
    /// commits atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] on a bad credential (checked before
    /// anything else), [`AppError::BadRequest`] when `target_id` is
    /// missing or `count` is not strictly positive.
    pub async fn boost(
        &self,
        credential: Option<&str>,
        target_id: Option<String>,
        count: Option<i64>,
    ) -> Result<u32, AppError> {
        self.admin_policy.authorize(credential)?;

        let target_id = match target_id {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::bad_request("Invalid parameters")),
        };
        let count = match count.filter(|n| *n > 0).map(u32::try_from) {
            Some(Ok(n)) => n,
            _ => return Err(AppError::bad_request("Invalid parameters")),
        };

        tracing::info!(target = %target_id, count, "applying admin boost");

        self.vote_repository
            .insert_batch(&target_id, BOOST_SCORE, ADMIN_IDENTITY, Utc::now(), count)
            .await
    }
}
