//! Comment entities.

use chrono::{DateTime, Utc};

/// Input data for posting a comment.
///
/// `author` stores the display name exactly as given at posting time;
/// nickname resolution against the users table happens at read time only.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub candidate_id: String,
    pub text: String,
    pub author: String,
    pub email: String,
}

/// A comment as exposed by the snapshot, with the display name already
/// resolved: the commenter's current nickname when registered, otherwise
/// the author name stored at posting time.
#[derive(Debug, Clone)]
pub struct ResolvedComment {
    pub candidate_id: String,
    pub display_name: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub email: String,
}
