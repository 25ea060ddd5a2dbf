//! Repository traits defining the persistence seams.

pub mod candidate_repository;
pub mod comment_repository;
pub mod user_repository;
pub mod vote_repository;

pub use candidate_repository::CandidateRepository;
pub use comment_repository::CommentRepository;
pub use user_repository::UserRepository;
pub use vote_repository::VoteRepository;

#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use vote_repository::MockVoteRepository;
