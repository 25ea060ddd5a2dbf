//! Public snapshot assembly.

use std::sync::Arc;

use crate::domain::entities::{Candidate, ResolvedComment, Vote};
use crate::domain::repositories::{CandidateRepository, CommentRepository, VoteRepository};
use crate::error::AppError;

/// Everything the frontend needs to render the application in one response.
#[derive(Debug)]
pub struct Snapshot {
    pub candidates: Vec<Candidate>,
    pub votes: Vec<Vote>,
    pub comments: Vec<ResolvedComment>,
}

/// Service assembling the full public snapshot.
///
/// Candidates are filtered to approved ones; votes are returned for all
/// candidates unfiltered; comment display names arrive already resolved
/// against current nicknames.
pub struct SnapshotService<C, V, M>
where
    C: CandidateRepository,
    V: VoteRepository,
    M: CommentRepository,
{
    candidate_repository: Arc<C>,
    vote_repository: Arc<V>,
    comment_repository: Arc<M>,
}

impl<C, V, M> SnapshotService<C, V, M>
where
    C: CandidateRepository,
    V: VoteRepository,
    M: CommentRepository,
{
    /// Creates a new snapshot service.
    pub fn new(
        candidate_repository: Arc<C>,
        vote_repository: Arc<V>,
        comment_repository: Arc<M>,
    ) -> Self {
        Self {
            candidate_repository,
            vote_repository,
            comment_repository,
        }
    }

    /// Fetches the snapshot. The three reads run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when any of the reads fails; the
    /// failure is not retried.
    pub async fn fetch(&self) -> Result<Snapshot, AppError> {
        let (candidates, votes, comments) = tokio::try_join!(
            self.candidate_repository.list_approved(),
            self.vote_repository.list_all(),
            self.comment_repository.list_resolved(),
        )?;

        Ok(Snapshot {
            candidates,
            votes,
            comments,
        })
    }
}
