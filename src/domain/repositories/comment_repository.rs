//! Repository trait for comment data access.

use crate::domain::entities::{NewComment, ResolvedComment};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCommentRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Lists all comments in insertion order with display names resolved
    /// against the users table: a registered nickname overrides the stored
    /// author name, retroactively for historical comments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_resolved(&self) -> Result<Vec<ResolvedComment>, AppError>;

    /// Returns the timestamp of the most recent comment posted under the
    /// given identity, used for the posting cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn latest_comment_time(&self, email: &str) -> Result<Option<DateTime<Utc>>, AppError>;

    /// Appends a comment. Comments are never updated or deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, comment: NewComment, at: DateTime<Utc>) -> Result<(), AppError>;
}
