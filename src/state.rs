//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{
    CandidateService, CommentService, SnapshotService, StaticKeyPolicy, UserService, VoteService,
};
use crate::infrastructure::persistence::{
    SqliteCandidateRepository, SqliteCommentRepository, SqliteUserRepository, SqliteVoteRepository,
};

/// Application state injected into all handlers.
///
/// Handlers stay stateless between invocations; everything durable lives
/// behind the repositories in the database.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub snapshot_service: Arc<
        SnapshotService<SqliteCandidateRepository, SqliteVoteRepository, SqliteCommentRepository>,
    >,
    pub vote_service: Arc<VoteService<SqliteVoteRepository, StaticKeyPolicy>>,
    pub comment_service: Arc<CommentService<SqliteCommentRepository>>,
    pub candidate_service: Arc<CandidateService<SqliteCandidateRepository, StaticKeyPolicy>>,
    pub user_service: Arc<UserService<SqliteUserRepository>>,
}

impl AppState {
    /// Wires repositories, the admin policy, and services over one pool.
    pub fn new(pool: Arc<SqlitePool>, admin_auth_key: String, comment_cooldown_ms: i64) -> Self {
        let candidate_repo = Arc::new(SqliteCandidateRepository::new(pool.clone()));
        let vote_repo = Arc::new(SqliteVoteRepository::new(pool.clone()));
        let comment_repo = Arc::new(SqliteCommentRepository::new(pool.clone()));
        let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

        let admin_policy = Arc::new(StaticKeyPolicy::new(admin_auth_key));

        Self {
            pool,
            snapshot_service: Arc::new(SnapshotService::new(
                candidate_repo.clone(),
                vote_repo.clone(),
                comment_repo.clone(),
            )),
            vote_service: Arc::new(VoteService::new(vote_repo, admin_policy.clone())),
            comment_service: Arc::new(CommentService::new(comment_repo, comment_cooldown_ms)),
            candidate_service: Arc::new(CandidateService::new(candidate_repo, admin_policy)),
            user_service: Arc::new(UserService::new(user_repo)),
        }
    }
}
