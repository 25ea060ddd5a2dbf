//! Candidate entity and approval state.

/// Moderation state of a candidate.
///
/// Stored as the literal `ДА`/`НЕТ` strings the frontend and the existing
/// data set use. Anything other than `ДА` is treated as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    Approved,
    Pending,
}

impl Approval {
    pub fn as_db(self) -> &'static str {
        match self {
            Approval::Approved => "ДА",
            Approval::Pending => "НЕТ",
        }
    }

    pub fn from_db(value: &str) -> Self {
        if value == "ДА" {
            Approval::Approved
        } else {
            Approval::Pending
        }
    }
}

/// A candidate that can be rated and commented on.
///
/// `id` is caller-supplied and unique; optional presentation fields are
/// stored as empty strings when absent.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub tg: String,
    pub music: String,
    pub approved: Approval,
}

/// Input data for the add/update candidate operation.
///
/// `approved` is intentionally absent: every write through this path
/// resets the candidate to pending, insert or update alike.
#[derive(Debug, Clone)]
pub struct CandidateUpsert {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub tg: String,
    pub music: String,
}
