//! SQLite implementations of the repository traits.

pub mod sqlite_candidate_repository;
pub mod sqlite_comment_repository;
pub mod sqlite_user_repository;
pub mod sqlite_vote_repository;

pub use sqlite_candidate_repository::SqliteCandidateRepository;
pub use sqlite_comment_repository::SqliteCommentRepository;
pub use sqlite_user_repository::SqliteUserRepository;
pub use sqlite_vote_repository::SqliteVoteRepository;
