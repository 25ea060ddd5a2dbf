//! SQLite implementation of comment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewComment, ResolvedComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// SQLite repository for comment storage and retrieval.
pub struct SqliteCommentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ResolvedCommentRow {
    candidate_id: String,
    display_name: String,
    text: String,
    date: DateTime<Utc>,
    email: String,
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn list_resolved(&self) -> Result<Vec<ResolvedComment>, AppError> {
        // The current nickname wins over the author name stored at posting
        // time, so a rename re-labels the user's whole comment history.
        let rows: Vec<ResolvedCommentRow> = sqlx::query_as(
            r#"
            SELECT
                c.candidate_id,
                COALESCE(u.nickname, c.author) AS display_name,
                c.text,
                c.date,
                c.email
            FROM comments c
            LEFT JOIN users u ON u.email = c.email
            ORDER BY c.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ResolvedComment {
                candidate_id: r.candidate_id,
                display_name: r.display_name,
                text: r.text,
                date: r.date,
                email: r.email,
            })
            .collect())
    }

    async fn latest_comment_time(&self, email: &str) -> Result<Option<DateTime<Utc>>, AppError> {
        let date: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT date FROM comments WHERE email = ? ORDER BY id DESC LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(date)
    }

    async fn insert(&self, comment: NewComment, at: DateTime<Utc>) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO comments (candidate_id, text, author, date, email) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&comment.candidate_id)
        .bind(&comment.text)
        .bind(&comment.author)
        .bind(at)
        .bind(&comment.email)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
