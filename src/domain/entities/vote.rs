//! Vote entity.

use chrono::{DateTime, Utc};

/// Fixed score written by the admin boost operation.
pub const BOOST_SCORE: f64 = 5.0;

/// A single voter's rating of a candidate.
///
/// At most one row exists per `(candidate_id, email)` pair for rows written
/// through the vote operation; boost rows all share the admin identity and
/// deliberately bypass that rule.
#[derive(Debug, Clone)]
pub struct Vote {
    pub id: i64,
    pub candidate_id: String,
    pub score: f64,
    pub date: DateTime<Utc>,
    pub email: String,
}

/// Outcome of an upsert-style write, used to pick the response message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}
