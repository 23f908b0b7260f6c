pub use candidate::Candidate;
pub use election_core::Election;
pub use receipt::Receipt;
pub use results::CandidateResult;
pub use tally::{incremented, Tally};

mod candidate;
mod election_core;
mod receipt;
mod results;
mod tally;

/// Candidate IDs are strings.
pub type CandidateId = String;
/// Voter IDs are strings.
pub type VoterId = String;
