use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoteError};
use crate::model::voter::{validator, Rules, Voter};

use super::tally::{self, Tally};
use super::{Candidate, CandidateId, CandidateResult, Receipt, VoterId};

/// A single-question election over a fixed candidate roster.
///
/// All state is private; the only observations are through
/// [`register_voter`](Election::register_voter),
/// [`cast_vote`](Election::cast_vote), [`results`](Election::results) and
/// [`winner`](Election::winner). The check-then-record sequence in
/// `cast_vote` runs under a single `&mut self` borrow, so one voter can
/// never land two accepted votes on the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// The fixed roster, in declaration order.
    roster: Vec<Candidate>,
    /// Original roster position by candidate id; fixed at construction.
    index: HashMap<CandidateId, usize>,
    /// Accepted votes by candidate id; replaced wholesale on every accepted vote.
    tally: Tally,
    /// Voter ids that passed registration.
    registered: HashSet<VoterId>,
    /// Voter ids that have cast an accepted vote.
    voted: HashSet<VoterId>,
}

impl Election {
    /// Create a new election over `candidates`.
    ///
    /// Roster order is preserved and used as the tie-break key for results
    /// and winner selection. A duplicated id keeps its first roster position.
    pub fn new(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        let roster: Vec<Candidate> = candidates.into_iter().collect();
        let mut index = HashMap::with_capacity(roster.len());
        for (position, candidate) in roster.iter().enumerate() {
            index.entry(candidate.id.clone()).or_insert(position);
        }
        debug!("Created election with {} candidates", roster.len());

        Self {
            roster,
            index,
            tally: Tally::new(),
            registered: HashSet::new(),
            voted: HashSet::new(),
        }
    }

    /// Register `voter`, returning whether registration was accepted.
    ///
    /// Rejected when the record fails the registration rules (non-empty `id`
    /// and `name`, finite age of at least 18) or when the id is already
    /// registered. A rejection leaves all state untouched.
    pub fn register_voter(&mut self, voter: &Voter) -> bool {
        let eligible = validator(Rules {
            min_age: 18.0,
            required_fields: vec!["id".to_string(), "name".to_string()],
        });
        if let Err(reason) = eligible(voter) {
            warn!("Rejected registration for {:?}: {reason}", voter.id);
            return false;
        }
        if self.registered.contains(&voter.id) {
            warn!("Rejected duplicate registration for {:?}", voter.id);
            return false;
        }

        self.registered.insert(voter.id.clone());
        debug!("Registered voter {:?}", voter.id);
        true
    }

    /// Cast a vote from `voter_id` for `candidate_id`.
    ///
    /// Checks run in a fixed order and the first failure wins: unregistered
    /// voter, then unknown candidate, then repeat voter. On success the tally
    /// is replaced with an incremented copy, the voter is marked as having
    /// voted, and a [`Receipt`] is returned.
    pub fn cast_vote(&mut self, voter_id: &str, candidate_id: &str) -> Result<Receipt> {
        if !self.registered.contains(voter_id) {
            warn!("Rejected vote from {voter_id:?}: not registered");
            return Err(VoteError::NotRegistered);
        }
        if self.candidate(candidate_id).is_none() {
            warn!("Rejected vote from {voter_id:?}: unknown candidate {candidate_id:?}");
            return Err(VoteError::UnknownCandidate);
        }
        if self.voted.contains(voter_id) {
            warn!("Rejected vote from {voter_id:?}: already voted");
            return Err(VoteError::AlreadyVoted);
        }

        self.tally = tally::incremented(&self.tally, candidate_id);
        self.voted.insert(voter_id.to_string());
        debug!("Accepted vote from {voter_id:?} for {candidate_id:?}");

        Ok(Receipt {
            voter_id: voter_id.to_string(),
            candidate_id: candidate_id.to_string(),
        })
    }

    /// Callback-style variant of [`cast_vote`](Election::cast_vote).
    ///
    /// Exactly one of the two handlers runs, and its return value is passed
    /// through as the result of the call.
    pub fn cast_vote_with<T>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: impl FnOnce(Receipt) -> T,
        on_error: impl FnOnce(VoteError) -> T,
    ) -> T {
        self.cast_vote(voter_id, candidate_id)
            .map_or_else(on_error, on_success)
    }

    /// Results for every roster candidate, in the default order: votes
    /// descending, ties broken by original roster position.
    pub fn results(&self) -> Vec<CandidateResult> {
        let mut rows = self.rows();
        // Stable sort over a roster-ordered vec keeps ties in roster order.
        rows.sort_by(|a, b| b.votes.cmp(&a.votes));
        rows
    }

    /// Results ordered by a caller-supplied comparator instead of the
    /// default. Ordering among rows the comparator considers equal is
    /// unspecified beyond sort stability.
    pub fn results_sorted_by(
        &self,
        compare: impl FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    ) -> Vec<CandidateResult> {
        let mut rows = self.rows();
        rows.sort_by(compare);
        rows
    }

    /// The winning candidate, or `None` if no votes have been cast.
    ///
    /// Among candidates tied at the maximum count, the earliest roster entry
    /// wins. The returned record is a copy, never a handle into the roster.
    pub fn winner(&self) -> Option<Candidate> {
        self.results()
            .into_iter()
            .find(|row| row.votes > 0)
            .map(|row| row.candidate)
    }

    /// Look up a roster candidate by id.
    fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.index.get(id).map(|&position| &self.roster[position])
    }

    /// One freshly-built row per roster candidate, in roster order.
    fn rows(&self) -> Vec<CandidateResult> {
        self.roster
            .iter()
            .map(|candidate| CandidateResult {
                candidate: candidate.clone(),
                votes: self.tally.get(&candidate.id).copied().unwrap_or(0),
            })
            .collect()
    }
}
