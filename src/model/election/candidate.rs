use serde::{Deserialize, Serialize};

use super::CandidateId;

/// A roster entry: one electable candidate.
///
/// The roster is fixed for the lifetime of an election, and a candidate's
/// position in it doubles as the tie-break key for results ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate unique ID.
    pub id: CandidateId,
    /// Display name.
    pub name: String,
    /// Party or affiliation.
    pub party: String,
}
