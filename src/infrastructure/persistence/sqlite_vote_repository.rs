//! SQLite implementation of vote repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{UpsertOutcome, Vote};
use crate::domain::repositories::VoteRepository;
use crate::error::AppError;

/// SQLite repository for vote storage and retrieval.
pub struct SqliteVoteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteVoteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VoteRow {
    id: i64,
    candidate_id: String,
    score: f64,
    date: DateTime<Utc>,
    email: String,
}

#[async_trait]
impl VoteRepository for SqliteVoteRepository {
    async fn list_all(&self) -> Result<Vec<Vote>, AppError> {
        let rows: Vec<VoteRow> = sqlx::query_as(
            r#"
            SELECT id, candidate_id, score, date, email
            FROM votes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Vote {
                id: r.id,
                candidate_id: r.candidate_id,
                score: r.score,
                date: r.date,
                email: r.email,
            })
            .collect())
    }

    async fn upsert_by_voter(
        &self,
        candidate_id: &str,
        email: &str,
        score: f64,
        at: DateTime<Utc>,
    ) -> Result<UpsertOutcome, AppError> {
        // The lookup and the write share one transaction so a concurrent
        // request from the same voter cannot slip a duplicate row between
        // them.
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM votes WHERE candidate_id = ? AND email = ?")
                .bind(candidate_id)
                .bind(email)
                .fetch_optional(&mut *tx)
                .await?;

        let outcome = match existing {
            Some(id) => {
                sqlx::query("UPDATE votes SET score = ?, date = ? WHERE id = ?")
                    .bind(score)
                    .bind(at)
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                UpsertOutcome::Updated
            }
            None => {
                sqlx::query(
                    "INSERT INTO votes (candidate_id, score, date, email) VALUES (?, ?, ?, ?)",
                )
                .bind(candidate_id)
                .bind(score)
                .bind(at)
                .bind(email)
                .execute(&mut *tx)
                .await?;
                UpsertOutcome::Created
            }
        };

        tx.commit().await?;

        Ok(outcome)
    }

    async fn insert_batch(
        &self,
        candidate_id: &str,
        score: f64,
        email: &str,
        at: DateTime<Utc>,
        count: u32,
    ) -> Result<u32, AppError> {
        let mut tx = self.pool.begin().await?;

        for _ in 0..count {
            sqlx::query("INSERT INTO votes (candidate_id, score, date, email) VALUES (?, ?, ?, ?)")
                .bind(candidate_id)
                .bind(score)
                .bind(at)
                .bind(email)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(count)
    }
}
