//! Repository trait for user data access.

use crate::domain::entities::UpsertOutcome;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Registers or renames a user by email.
    ///
    /// Updates the nickname when the email already exists, inserts a new
    /// row otherwise. Runs in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, email: &str, nickname: &str) -> Result<UpsertOutcome, AppError>;
}
