//! Core business entities.

pub mod candidate;
pub mod comment;
pub mod vote;

pub use candidate::{Approval, Candidate, CandidateUpsert};
pub use comment::{NewComment, ResolvedComment};
pub use vote::{BOOST_SCORE, UpsertOutcome, Vote};
