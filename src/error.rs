use thiserror::Error;

pub type Result<T> = std::result::Result<T, VoteError>;

/// Reasons a vote can be rejected.
///
/// The `Display` strings are the stable reporting contract; callers that
/// surface rejections to users print these verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    /// The voter id never passed registration.
    #[error("voter not registered")]
    NotRegistered,
    /// The candidate id matches no roster entry.
    #[error("invalid candidate")]
    UnknownCandidate,
    /// The voter id has already cast an accepted vote.
    #[error("voter already voted")]
    AlreadyVoted,
}
