//! Tournament transition history.
//!
//! Provides immutable tracking of the transitions a tournament went
//! through. Each step keeps the snapshot it replaced, which is what makes
//! undo possible; snapshots share structure, so this stays cheap.

use super::entry::{Entry, RoundId};
use super::state::{Phase, TournamentState};
use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The engine operation behind a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Seed,
    AdvanceRound,
    CastVote,
    Restart,
}

impl TransitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::AdvanceRound => "advance_round",
            Self::CastVote => "cast_vote",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<E: Entry> {
    /// Operation that was applied
    pub kind: TransitionKind,
    /// Phase before the transition
    pub from: Phase,
    /// Phase after the transition
    pub to: Phase,
    /// Round open after the transition, if any
    pub round: Option<RoundId>,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// Snapshot the transition replaced
    pub previous: TournamentState<E>,
}

impl<E: Entry> Step<E> {
    /// Describe the transition from `previous` to `next`, stamped now.
    pub fn between(
        kind: TransitionKind,
        previous: &TournamentState<E>,
        next: &TournamentState<E>,
    ) -> Self {
        Self {
            kind,
            from: previous.phase(),
            to: next.phase(),
            round: next.round(),
            timestamp: Utc::now(),
            previous: previous.clone(),
        }
    }

    /// Whether this step opened a new round.
    pub fn opened_round(&self) -> bool {
        matches!(self.kind, TransitionKind::AdvanceRound | TransitionKind::Restart)
            && self.to == Phase::Voting
    }
}

/// Ordered history of tournament transitions.
///
/// History is immutable - `record` returns a new history with the step
/// added.
///
/// # Example
///
/// ```rust
/// use versus::core::{advance_round, seed, Phase, Step, TournamentHistory, TournamentState, TransitionKind};
///
/// let empty = TournamentState::new();
/// let seeded = seed(&empty, vec![1, 2, 3]);
/// let voting = advance_round(&seeded).unwrap();
///
/// let history = TournamentHistory::new()
///     .record(Step::between(TransitionKind::Seed, &empty, &seeded))
///     .record(Step::between(TransitionKind::AdvanceRound, &seeded, &voting));
///
/// assert_eq!(history.phase_path(), vec![Phase::Empty, Phase::Seeded, Phase::Voting]);
/// assert_eq!(history.rounds_played(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TournamentHistory<E: Entry> {
    steps: Vector<Step<E>>,
}

impl<E: Entry> Default for TournamentHistory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> TournamentHistory<E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            steps: Vector::new(),
        }
    }

    /// Record a step, returning a new history.
    ///
    /// This is a pure function - the existing history is left as is.
    #[must_use]
    pub fn record(&self, step: Step<E>) -> Self {
        let mut steps = self.steps.clone();
        steps.push_back(step);
        Self { steps }
    }

    /// Keep only the most recent `limit` steps.
    #[must_use]
    pub fn truncated(&self, limit: usize) -> Self {
        let len = self.steps.len();
        if len <= limit {
            return self.clone();
        }
        Self {
            steps: self.steps.skip(len - limit),
        }
    }

    /// Split off the most recent step.
    ///
    /// Returns the history without that step, together with the step
    /// itself, or `None` when the history is empty.
    pub fn pop(&self) -> Option<(Self, Step<E>)> {
        let mut steps = self.steps.clone();
        let last = steps.pop_back()?;
        Some((Self { steps }, last))
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step<E>> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&Step<E>> {
        self.steps.back()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Phases traversed: the phase before the first step, then the phase
    /// after each step.
    pub fn phase_path(&self) -> Vec<Phase> {
        self.steps
            .front()
            .map(|first| first.from)
            .into_iter()
            .chain(self.steps.iter().map(|step| step.to))
            .collect()
    }

    /// Number of rounds opened, counting rounds opened by restarts.
    pub fn rounds_played(&self) -> usize {
        self.steps.iter().filter(|step| step.opened_round()).count()
    }

    /// Time between the first and the last recorded step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.front()?, self.steps.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
