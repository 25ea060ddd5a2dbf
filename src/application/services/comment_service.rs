//! Comment posting with a per-identity cooldown.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::NewComment;
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// Default minimum gap between two comments from the same identity.
pub const DEFAULT_COOLDOWN_MS: i64 = 5000;

/// Service for appending comments.
///
/// Comments are append-only. The cooldown is per identity and evaluated
/// with wall-clock time at write time; the check-then-insert sequence is
/// not atomic, so concurrent requests from the same identity can slip
/// past it. Known and accepted for this workload.
pub struct CommentService<M: CommentRepository> {
    comment_repository: Arc<M>,
    cooldown: Duration,
}

impl<M: CommentRepository> CommentService<M> {
    /// Creates a new comment service with the given cooldown window.
    pub fn new(comment_repository: Arc<M>, cooldown_ms: i64) -> Self {
        Self {
            comment_repository,
            cooldown: Duration::milliseconds(cooldown_ms),
        }
    }

    /// Appends a comment under the given identity.
    ///
    /// The author name is stored as given; nickname resolution happens at
    /// read time only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when `target_id` or `text` is
    /// missing/empty, [`AppError::RateLimited`] when the identity's last
    /// comment is younger than the cooldown window.
    pub async fn post(
        &self,
        target_id: Option<String>,
        text: Option<String>,
        author: String,
        email: String,
    ) -> Result<(), AppError> {
        let candidate_id = match target_id {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::bad_request("Bad request")),
        };
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::bad_request("Bad request")),
        };

        if let Some(last) = self.comment_repository.latest_comment_time(&email).await? {
            if Utc::now() - last < self.cooldown {
                return Err(AppError::rate_limited("Wait before commenting"));
            }
        }

        self.comment_repository
            .insert(
                NewComment {
                    candidate_id,
                    text,
                    author,
                    email,
                },
                Utc::now(),
            )
            .await
    }
}
