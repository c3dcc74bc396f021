//! Mode-aware facade over the core transition functions.
//!
//! [`Engine`] exposes the four tournament operations behind one interface
//! for both variants of the engine. In [`EngineMode::Full`] it forwards to
//! [`crate::core`]. In [`EngineMode::Anonymous`] voter identity is dropped,
//! so every vote is an independent increment, and restarts are refused.

mod config;

pub use config::{ConfigError, EngineConfig, EngineMode};

use crate::core::{EngineError, Entry, TournamentState, VoterId};
use tracing::debug;

/// Stateless tournament engine configured for one variant.
///
/// # Example
///
/// ```rust
/// use versus::core::{TournamentState, VoterId};
/// use versus::engine::{Engine, EngineConfig};
///
/// let engine = Engine::new(EngineConfig::anonymous());
/// let state = engine.seed(&TournamentState::new(), vec![1, 2]);
/// let state = engine.advance_round(&state).unwrap();
///
/// // Without voter identity, repeated votes all count.
/// let voter = VoterId::from("v");
/// let state = engine.cast_vote(&state, &1, Some(&voter));
/// let state = engine.cast_vote(&state, &1, Some(&voter));
/// assert_eq!(state.vote.unwrap().tally_for(&1), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> EngineMode {
        self.config.mode
    }

    /// Seed the tournament. Only the full engine keeps a copy of the
    /// entries for restarts.
    pub fn seed<E, I>(&self, state: &TournamentState<E>, entries: I) -> TournamentState<E>
    where
        E: Entry,
        I: IntoIterator<Item = E>,
    {
        let seeded = crate::core::seed(state, entries);
        match self.mode() {
            EngineMode::Full => seeded,
            EngineMode::Anonymous => TournamentState {
                initial_entries: None,
                ..seeded
            },
        }
    }

    pub fn advance_round<E: Entry>(
        &self,
        state: &TournamentState<E>,
    ) -> Result<TournamentState<E>, EngineError> {
        crate::core::advance_round(state)
    }

    /// Cast a vote. The anonymous engine ignores `voter`.
    pub fn cast_vote<E: Entry>(
        &self,
        state: &TournamentState<E>,
        entry: &E,
        voter: Option<&VoterId>,
    ) -> TournamentState<E> {
        let voter = match self.mode() {
            EngineMode::Full => voter,
            EngineMode::Anonymous => None,
        };
        crate::core::cast_vote(state, entry, voter)
    }

    pub fn restart<E: Entry>(
        &self,
        state: &TournamentState<E>,
    ) -> Result<TournamentState<E>, EngineError> {
        match self.mode() {
            EngineMode::Full => crate::core::restart(state),
            EngineMode::Anonymous => {
                debug!("restart refused by anonymous engine");
                Err(EngineError::RestartUnsupported)
            }
        }
    }
}
