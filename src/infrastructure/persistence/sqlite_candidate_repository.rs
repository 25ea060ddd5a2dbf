//! SQLite implementation of candidate repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Approval, Candidate, CandidateUpsert};
use crate::domain::repositories::CandidateRepository;
use crate::error::AppError;

/// SQLite repository for candidate storage and retrieval.
pub struct SqliteCandidateRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCandidateRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CandidateRow {
    id: String,
    name: String,
    photo: String,
    description: String,
    tg: String,
    approved: String,
    music: String,
}

impl From<CandidateRow> for Candidate {
    fn from(r: CandidateRow) -> Self {
        Candidate {
            id: r.id,
            name: r.name,
            photo: r.photo,
            description: r.description,
            tg: r.tg,
            music: r.music,
            approved: Approval::from_db(&r.approved),
        }
    }
}

#[async_trait]
impl CandidateRepository for SqliteCandidateRepository {
    async fn list_approved(&self) -> Result<Vec<Candidate>, AppError> {
        let rows: Vec<CandidateRow> = sqlx::query_as(
            r#"
            SELECT id, name, photo, description, tg, approved, music
            FROM candidates
            WHERE approved = 'ДА'
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Candidate::from).collect())
    }

    async fn upsert(&self, candidate: CandidateUpsert) -> Result<(), AppError> {
        // Any write through this path re-requires approval, so approved
        // is forced back to pending on the conflict branch as well.
        sqlx::query(
            r#"
            INSERT INTO candidates (id, name, photo, description, tg, approved, music)
            VALUES (?, ?, ?, ?, ?, 'НЕТ', ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                photo = excluded.photo,
                description = excluded.description,
                tg = excluded.tg,
                music = excluded.music,
                approved = 'НЕТ'
            "#,
        )
        .bind(&candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.photo)
        .bind(&candidate.description)
        .bind(&candidate.tg)
        .bind(&candidate.music)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
