//! Single-question election tallying.
//!
//! An [`Election`] owns a fixed candidate roster and private vote state, and
//! exposes exactly four operations: voter registration, vote casting, ranked
//! results, and winner selection. Vote counts are only ever updated through
//! the pure [`model::election::incremented`], so each accepted vote replaces
//! the tally rather than mutating it in place.
//!
//! Expected failures never panic: registration reports a plain boolean,
//! vote casting reports a [`VoteError`], and voter validation reports an
//! [`InvalidVoter`] reason.

pub mod error;
pub mod model;

pub use error::{Result, VoteError};
pub use model::election::{incremented, Candidate, CandidateResult, Election, Receipt, Tally};
pub use model::voter::{validator, InvalidVoter, Rules, Voter};
