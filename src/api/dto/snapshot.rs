//! DTOs for the snapshot endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::Snapshot;
use crate::domain::entities::{Candidate, ResolvedComment, Vote};

/// Full public snapshot: `{ candidates, votes, comments }`.
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub candidates: Vec<CandidateDto>,
    pub votes: Vec<VoteEntry>,
    pub comments: Vec<CommentEntry>,
}

/// Approved candidate as exposed publicly; `approved` itself is omitted.
#[derive(Debug, Serialize)]
pub struct CandidateDto {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub tg: String,
    pub music: String,
}

/// `[candidate_id, score, date, email]`, serialized as a JSON array.
#[derive(Debug, Serialize)]
pub struct VoteEntry(pub String, pub f64, pub DateTime<Utc>, pub String);

/// `[candidate_id, display_name, text, date, email]`, serialized as a
/// JSON array.
#[derive(Debug, Serialize)]
pub struct CommentEntry(
    pub String,
    pub String,
    pub String,
    pub DateTime<Utc>,
    pub String,
);

impl From<Candidate> for CandidateDto {
    fn from(c: Candidate) -> Self {
        CandidateDto {
            id: c.id,
            name: c.name,
            photo: c.photo,
            description: c.description,
            tg: c.tg,
            music: c.music,
        }
    }
}

impl From<Vote> for VoteEntry {
    fn from(v: Vote) -> Self {
        VoteEntry(v.candidate_id, v.score, v.date, v.email)
    }
}

impl From<ResolvedComment> for CommentEntry {
    fn from(c: ResolvedComment) -> Self {
        CommentEntry(c.candidate_id, c.display_name, c.text, c.date, c.email)
    }
}

impl From<Snapshot> for SnapshotResponse {
    fn from(s: Snapshot) -> Self {
        SnapshotResponse {
            candidates: s.candidates.into_iter().map(CandidateDto::from).collect(),
            votes: s.votes.into_iter().map(VoteEntry::from).collect(),
            comments: s.comments.into_iter().map(CommentEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_entry_serializes_as_array() {
        let entry = VoteEntry("c1".into(), 4.5, Utc::now(), "a@b.c".into());
        let json = serde_json::to_value(&entry).unwrap();

        let arr = json.as_array().expect("tuple struct serializes as array");
        assert_eq!(arr.len(), 4);
        assert_eq!(arr[0], "c1");
        assert_eq!(arr[1], 4.5);
        assert_eq!(arr[3], "a@b.c");
    }

    #[test]
    fn test_comment_entry_serializes_as_array() {
        let entry = CommentEntry("c1".into(), "Nick".into(), "hi".into(), Utc::now(), "a@b.c".into());
        let json = serde_json::to_value(&entry).unwrap();

        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[1], "Nick");
        assert_eq!(arr[2], "hi");
    }
}
