pub use validator::{validator, InvalidVoter, Rules};
pub use voter_core::Voter;

mod validator;
mod voter_core;
