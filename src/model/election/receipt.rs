use serde::{Deserialize, Serialize};

use super::{CandidateId, VoterId};

/// Confirmation of an accepted vote, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Who voted.
    pub voter_id: VoterId,
    /// Who they voted for.
    pub candidate_id: CandidateId,
}
