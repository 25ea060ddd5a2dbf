//! User registration and nickname updates.

use std::sync::Arc;

use crate::domain::entities::UpsertOutcome;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for the open registration operation.
///
/// No authorization: anyone can claim any email's nickname. That trust
/// model is inherited from the product and kept as-is.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Registers a new user or renames an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when either resolved field is
    /// missing or empty.
    pub async fn register(
        &self,
        email: Option<String>,
        nickname: Option<String>,
    ) -> Result<UpsertOutcome, AppError> {
        let email = match email {
            Some(e) if !e.is_empty() => e,
            _ => return Err(AppError::bad_request("Missing email or nickname")),
        };
        let nickname = match nickname {
            Some(n) if !n.is_empty() => n,
            _ => return Err(AppError::bad_request("Missing email or nickname")),
        };

        self.user_repository.upsert(&email, &nickname).await
    }
}
