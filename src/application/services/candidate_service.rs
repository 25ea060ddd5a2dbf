//! Candidate registration and editing (admin only).

use std::sync::Arc;

use crate::application::services::AdminPolicy;
use crate::domain::entities::CandidateUpsert;
use crate::domain::repositories::CandidateRepository;
use crate::error::AppError;

/// Service for the admin add/update candidate operation.
///
/// Approval itself is never settable through this path; it is flipped by
/// the `admin` CLI (or direct database administration).
pub struct CandidateService<C: CandidateRepository, P: AdminPolicy> {
    candidate_repository: Arc<C>,
    admin_policy: Arc<P>,
}

impl<C: CandidateRepository, P: AdminPolicy> CandidateService<C, P> {
    /// Creates a new candidate service.
    pub fn new(candidate_repository: Arc<C>, admin_policy: Arc<P>) -> Self {
        Self {
            candidate_repository,
            admin_policy,
        }
    }

    /// Inserts or overwrites a candidate.
    ///
    /// Editing an existing candidate resets its approval to pending; every
    /// edit re-requires moderation. That is policy, not an accident.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] on a bad credential (checked before
    /// field validation), [`AppError::BadRequest`] when `id` or `name` is
    /// missing/empty.
    pub async fn upsert(
        &self,
        credential: Option<&str>,
        candidate: CandidateUpsert,
    ) -> Result<(), AppError> {
        self.admin_policy.authorize(credential)?;

        if candidate.id.is_empty() || candidate.name.is_empty() {
            return Err(AppError::bad_request("Bad request"));
        }

        tracing::info!(id = %candidate.id, "upserting candidate");

        self.candidate_repository.upsert(candidate).await
    }
}
