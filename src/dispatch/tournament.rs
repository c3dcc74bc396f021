//! Single-writer tournament that applies actions and tracks history.

use super::action::Action;
use super::reduce;
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{
    EngineError, Entry, Phase, Step, TournamentHistory, TournamentState, TransitionKind, VoterId,
};
use crate::engine::{Engine, EngineConfig};
use tracing::debug;

/// A tournament in progress: the current snapshot plus its history.
///
/// Every change goes through `&mut self`, so one `Tournament` applies one
/// transition at a time. Snapshots handed out by [`Tournament::state`] are
/// values; holding on to one never blocks later transitions.
///
/// # Example
///
/// ```rust
/// use versus::dispatch::{Action, Tournament};
///
/// let mut tournament = Tournament::default();
/// tournament.dispatch(&Action::set_entries(["Alien", "Heat", "Ran"].map(String::from))).unwrap();
/// tournament.dispatch(&Action::Next).unwrap();
/// tournament.dispatch(&Action::vote("Heat".to_string(), "ada")).unwrap();
/// tournament.dispatch(&Action::Next).unwrap();
///
/// let vote = tournament.state().vote.as_ref().unwrap();
/// assert_eq!(vote.pair().first(), "Ran");
/// assert_eq!(vote.pair().second(), "Heat");
///
/// tournament.undo();
/// assert_eq!(tournament.state().round().unwrap().get(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Tournament<E: Entry> {
    engine: Engine,
    current: TournamentState<E>,
    history: TournamentHistory<E>,
}

impl<E: Entry> Default for Tournament<E> {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

impl<E: Entry> Tournament<E> {
    /// Create an empty, unseeded tournament.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            current: TournamentState::new(),
            history: TournamentHistory::new(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(Engine::new(config))
    }

    pub(crate) fn from_parts(
        engine: Engine,
        current: TournamentState<E>,
        history: TournamentHistory<E>,
    ) -> Self {
        Self {
            engine,
            current,
            history,
        }
    }

    /// Rebuild a tournament from a checkpoint, validating it first.
    pub fn restore(checkpoint: Checkpoint<E>) -> Result<Self, CheckpointError> {
        checkpoint.restore()
    }

    pub fn checkpoint(&self) -> Checkpoint<E> {
        Checkpoint::capture(self)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Get the current snapshot.
    pub fn state(&self) -> &TournamentState<E> {
        &self.current
    }

    pub fn history(&self) -> &TournamentHistory<E> {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.current.phase()
    }

    pub fn winner(&self) -> Option<&E> {
        self.current.winner.as_ref()
    }

    /// Apply an action. Unrecognized actions leave the tournament as is.
    ///
    /// On error nothing changes: neither the snapshot nor the history.
    pub fn dispatch(&mut self, action: &Action<E>) -> Result<&TournamentState<E>, EngineError> {
        let Some(kind) = action.kind() else {
            debug!("unrecognized action ignored");
            return Ok(&self.current);
        };
        let next = reduce(&self.engine, &self.current, action)?;
        Ok(self.apply(kind, next))
    }

    pub fn seed(&mut self, entries: impl IntoIterator<Item = E>) -> &TournamentState<E> {
        let next = self.engine.seed(&self.current, entries);
        self.apply(TransitionKind::Seed, next)
    }

    pub fn advance_round(&mut self) -> Result<&TournamentState<E>, EngineError> {
        let next = self.engine.advance_round(&self.current)?;
        Ok(self.apply(TransitionKind::AdvanceRound, next))
    }

    pub fn cast_vote(&mut self, entry: &E, voter: Option<&VoterId>) -> &TournamentState<E> {
        let next = self.engine.cast_vote(&self.current, entry, voter);
        self.apply(TransitionKind::CastVote, next)
    }

    pub fn restart(&mut self) -> Result<&TournamentState<E>, EngineError> {
        let next = self.engine.restart(&self.current)?;
        Ok(self.apply(TransitionKind::Restart, next))
    }

    /// Step back to the snapshot before the most recent transition.
    ///
    /// Returns `None`, leaving the tournament unchanged, when there is no
    /// history left to undo.
    pub fn undo(&mut self) -> Option<&TournamentState<E>> {
        let (rest, step) = self.history.pop()?;
        debug!(undone = %step.kind, phase = %step.from, "transition undone");
        self.history = rest;
        self.current = step.previous;
        Some(&self.current)
    }

    fn apply(&mut self, kind: TransitionKind, next: TournamentState<E>) -> &TournamentState<E> {
        // Identity transitions (ignored votes) leave no trace in the history.
        if next != self.current {
            let step = Step::between(kind, &self.current, &next);
            debug!(
                transition = %kind,
                from = %step.from,
                to = %step.to,
                round = ?step.round,
                "transition applied"
            );
            let history = self.history.record(step);
            self.history = match self.engine.config().history_limit {
                Some(limit) => history.truncated(limit),
                None => history,
            };
            self.current = next;
        }
        &self.current
    }
}
