use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Candidate;

/// One row of an election's results: a roster candidate and their count.
///
/// Serialises flat, so a row reads as the candidate record plus `votes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// The roster entry.
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Accepted votes for this candidate.
    pub votes: u64,
}

impl Deref for CandidateResult {
    type Target = Candidate;

    fn deref(&self) -> &Self::Target {
        &self.candidate
    }
}
