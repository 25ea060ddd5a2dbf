//! Repository trait for candidate data access.

use crate::domain::entities::{Candidate, CandidateUpsert};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for candidates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCandidateRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Lists candidates whose `approved` state is `ДА`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_approved(&self) -> Result<Vec<Candidate>, AppError>;

    /// Inserts or overwrites a candidate by id.
    ///
    /// All mutable fields are replaced and `approved` is reset to pending
    /// on every write, including updates of an already approved candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, candidate: CandidateUpsert) -> Result<(), AppError>;
}
