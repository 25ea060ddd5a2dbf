//! Application services orchestrating the six operations.

pub mod admin_policy;
pub mod candidate_service;
pub mod comment_service;
pub mod snapshot_service;
pub mod user_service;
pub mod vote_service;

pub use admin_policy::{AdminPolicy, StaticKeyPolicy};
pub use candidate_service::CandidateService;
pub use comment_service::{CommentService, DEFAULT_COOLDOWN_MS};
pub use snapshot_service::{Snapshot, SnapshotService};
pub use user_service::UserService;
pub use vote_service::VoteService;
