#![allow(dead_code)]

use axum::{Router, routing::get};
use chrono::{DateTime, Duration, Utc};
use rateboard::api::handlers::{
    dispatch_handler, method_not_allowed_handler, preflight_handler, snapshot_handler,
};
use rateboard::api::middleware::cors;
use rateboard::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_ADMIN_KEY: &str = "test-admin-key";
pub const TEST_COOLDOWN_MS: i64 = 5000;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_ADMIN_KEY.to_string(),
        TEST_COOLDOWN_MS,
    )
}

/// The single public endpoint with all four verbs and the CORS layer
/// wired, as in production.
pub fn test_app(pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/",
            get(snapshot_handler)
                .post(dispatch_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .with_state(create_test_state(pool))
        .layer(cors::layer())
}

pub async fn insert_candidate(pool: &SqlitePool, id: &str, name: &str, approved: bool) {
    sqlx::query(
        "INSERT INTO candidates (id, name, photo, description, tg, approved, music)
         VALUES (?, ?, '', '', '', ?, '')",
    )
    .bind(id)
    .bind(name)
    .bind(if approved { "ДА" } else { "НЕТ" })
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_vote(pool: &SqlitePool, candidate_id: &str, score: f64, email: &str) {
    sqlx::query("INSERT INTO votes (candidate_id, score, date, email) VALUES (?, ?, ?, ?)")
        .bind(candidate_id)
        .bind(score)
        .bind(Utc::now())
        .bind(email)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_comment_at(
    pool: &SqlitePool,
    candidate_id: &str,
    text: &str,
    author: &str,
    email: &str,
    at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO comments (candidate_id, text, author, date, email) VALUES (?, ?, ?, ?, ?)")
        .bind(candidate_id)
        .bind(text)
        .bind(author)
        .bind(at)
        .bind(email)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_old_comment(pool: &SqlitePool, email: &str) {
    insert_comment_at(
        pool,
        "c1",
        "earlier",
        "Nick",
        email,
        Utc::now() - Duration::seconds(60),
    )
    .await;
}

pub async fn insert_user(pool: &SqlitePool, email: &str, nickname: &str) {
    sqlx::query("INSERT INTO users (email, nickname) VALUES (?, ?)")
        .bind(email)
        .bind(nickname)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_votes(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_votes_for(pool: &SqlitePool, candidate_id: &str, email: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE candidate_id = ? AND email = ?")
        .bind(candidate_id)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// All vote rows as (candidate_id, score, email), in insertion order.
pub async fn vote_rows(pool: &SqlitePool) -> Vec<(String, f64, String)> {
    sqlx::query_as("SELECT candidate_id, score, email FROM votes ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

pub async fn count_comments(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_candidates(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A candidate's (name, photo, approved) or None when absent.
pub async fn candidate_row(pool: &SqlitePool, id: &str) -> Option<(String, String, String)> {
    sqlx::query_as("SELECT name, photo, approved FROM candidates WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn user_nickname(pool: &SqlitePool, email: &str) -> Option<String> {
    sqlx::query_scalar("SELECT nickname FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
        .unwrap()
}
