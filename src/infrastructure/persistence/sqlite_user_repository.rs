//! SQLite implementation of user repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UpsertOutcome;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// SQLite repository for registered users.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn upsert(&self, email: &str, nickname: &str) -> Result<UpsertOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<String> = sqlx::query_scalar("SELECT email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;

        let outcome = match existing {
            Some(_) => {
                sqlx::query("UPDATE users SET nickname = ? WHERE email = ?")
                    .bind(nickname)
                    .bind(email)
                    .execute(&mut *tx)
                    .await?;
                UpsertOutcome::Updated
            }
            None => {
                sqlx::query("INSERT INTO users (email, nickname) VALUES (?, ?)")
                    .bind(email)
                    .bind(nickname)
                    .execute(&mut *tx)
                    .await?;
                UpsertOutcome::Created
            }
        };

        tx.commit().await?;

        Ok(outcome)
    }
}
