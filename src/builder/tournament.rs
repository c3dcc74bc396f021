//! Builder for constructing tournaments.

use crate::builder::error::BuildError;
use crate::core::Entry;
use crate::dispatch::Tournament;
use crate::engine::{EngineConfig, EngineMode};

/// Builder for constructing tournaments with a fluent API.
pub struct TournamentBuilder<E: Entry> {
    entries: Option<Vec<E>>,
    config: EngineConfig,
    start_first_round: bool,
}

impl<E: Entry> TournamentBuilder<E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: None,
            config: EngineConfig::default(),
            start_first_round: false,
        }
    }

    /// Set the entries to seed with (required).
    pub fn entries(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.entries = Some(entries.into_iter().collect());
        self
    }

    pub fn mode(mut self, mode: EngineMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Replace the whole configuration, including any mode or history
    /// limit set earlier.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Open the first round as part of building.
    pub fn start_first_round(mut self, start: bool) -> Self {
        self.start_first_round = start;
        self
    }

    /// Build the tournament, seeded and optionally with its first round open.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Tournament<E>, BuildError> {
        let entries = self.entries.ok_or(BuildError::MissingEntries)?;

        if self.config.history_limit == Some(0) {
            return Err(BuildError::HistoryLimitZero);
        }

        let mut tournament = Tournament::with_config(self.config);
        tournament.seed(entries);
        if self.start_first_round {
            tournament.advance_round()?;
        }

        Ok(tournament)
    }
}

impl<E: Entry> Default for TournamentBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
