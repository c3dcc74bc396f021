//! Tournament snapshots.
//!
//! A [`TournamentState`] is an immutable value describing one moment of a
//! tournament. Engine operations never mutate a snapshot; they build the
//! successor from it. Collections are `im` persistent structures, so cloning
//! a snapshot is O(1) and prior snapshots stay cheap to keep around.

use super::entry::{Entry, RoundId};
use super::vote::Vote;
use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a tournament stands, derived from the shape of its snapshot.
///
/// ```text
/// Empty --seed--> Seeded --advance--> Voting --advance--> Voting ... --advance--> Decided
///                    \                  |  ^                                        |
///                     `----restart------+--'-----------------restart----------------'
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Never seeded
    Empty,
    /// Entries known, no round opened yet
    Seeded,
    /// A round is open for votes
    Voting,
    /// A single winner remains.
    ///
    /// Seeding a decided tournament replaces its entries but keeps the
    /// winner, so the phase stays `Decided` and advancing still fails with
    /// `AlreadyDecided`. Only a restart leaves this phase.
    Decided,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Seeded => "Seeded",
            Self::Voting => "Voting",
            Self::Decided => "Decided",
        }
    }

    /// Decided tournaments only move again through a restart.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Decided)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Root snapshot of a tournament.
///
/// Fields are public so callers can inspect and construct snapshots
/// directly; the engine functions in [`crate::core`] are the only
/// operations that move a tournament forward.
///
/// # Example
///
/// ```rust
/// use versus::core::{seed, Phase, TournamentState};
///
/// let empty: TournamentState<String> = TournamentState::new();
/// assert_eq!(empty.phase(), Phase::Empty);
///
/// let seeded = seed(&empty, ["Alien".to_string(), "Heat".to_string()]);
/// assert_eq!(seeded.phase(), Phase::Seeded);
/// assert_eq!(empty.phase(), Phase::Empty); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TournamentState<E: Entry> {
    /// Entries waiting to compete, in pairing order
    pub entries: Option<Vector<E>>,
    /// Entries as originally seeded, kept for restarts
    pub initial_entries: Option<Vector<E>>,
    /// The round in progress
    pub vote: Option<Vote<E>>,
    /// Set once the tournament is decided
    pub winner: Option<E>,
    /// Round the winner emerged from, so numbering survives a restart
    #[serde(default)]
    pub final_round: Option<RoundId>,
}

impl<E: Entry> Default for TournamentState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> TournamentState<E> {
    /// An empty, never-seeded tournament.
    pub fn new() -> Self {
        Self {
            entries: None,
            initial_entries: None,
            vote: None,
            winner: None,
            final_round: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Decided
        } else if self.vote.is_some() {
            Phase::Voting
        } else if self.entries.is_some() {
            Phase::Seeded
        } else {
            Phase::Empty
        }
    }

    /// Id of the round in progress, if any.
    pub fn round(&self) -> Option<RoundId> {
        self.vote.as_ref().map(Vote::id)
    }

    /// Most recent round played: the open round, or the deciding round of a
    /// finished tournament.
    pub fn last_round(&self) -> Option<RoundId> {
        self.round().or(self.final_round)
    }

    /// Entries still in contention: those waiting plus the pair under vote.
    pub fn remaining(&self) -> usize {
        let waiting = self.entries.as_ref().map_or(0, Vector::len);
        let contesting = if self.vote.is_some() { 2 } else { 0 };
        waiting + contesting
    }

    pub fn can_restart(&self) -> bool {
        self.initial_entries.is_some()
    }
}
