//! Action dispatch around the pure engine.
//!
//! This is the "imperative shell": [`reduce`] maps each [`Action`] onto one
//! engine operation, and [`Tournament`] owns a current snapshot, applies
//! actions to it one at a time and keeps the history needed for undo.
//!
//! Unrecognized actions are identity transitions.

mod action;
mod tournament;

pub use action::Action;
pub use tournament::Tournament;

use crate::core::{EngineError, Entry, TournamentState};
use crate::engine::Engine;
use tracing::debug;

/// Apply one action to `state`, returning the successor snapshot.
///
/// # Example
///
/// ```rust
/// use versus::core::TournamentState;
/// use versus::dispatch::{reduce, Action};
/// use versus::engine::Engine;
///
/// let engine = Engine::default();
/// let state = reduce(&engine, &TournamentState::new(), &Action::set_entries(["Heat".to_string()])).unwrap();
/// let state = reduce(&engine, &state, &Action::Next).unwrap();
/// assert_eq!(state.winner, Some("Heat".to_string()));
/// ```
pub fn reduce<E: Entry>(
    engine: &Engine,
    state: &TournamentState<E>,
    action: &Action<E>,
) -> Result<TournamentState<E>, EngineError> {
    match action {
        Action::SetEntries { entries } => Ok(engine.seed(state, entries.iter().cloned())),
        Action::Next => engine.advance_round(state),
        Action::Vote { entry, voter_id } => Ok(engine.cast_vote(state, entry, voter_id.as_ref())),
        Action::Restart => engine.restart(state),
        Action::Unrecognized => {
            debug!("unrecognized action ignored");
            Ok(state.clone())
        }
    }
}

/// Apply `actions` in order, starting from `state`. Stops at the first
/// engine error.
pub fn reduce_all<'a, E, I>(
    engine: &Engine,
    state: &TournamentState<E>,
    actions: I,
) -> Result<TournamentState<E>, EngineError>
where
    E: Entry,
    I: IntoIterator<Item = &'a Action<E>>,
{
    actions
        .into_iter()
        .try_fold(state.clone(), |state, action| reduce(engine, &state, action))
}
