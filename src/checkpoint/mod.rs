//! Checkpoint and resume for tournaments.
//!
//! A [`Checkpoint`] captures everything needed to resume a [`Tournament`]:
//! the engine configuration, the current snapshot and the history. It
//! serializes to JSON for storage that people read and to bincode for
//! compact storage. Restoring validates the checkpoint first, so a tampered
//! or corrupted file is rejected instead of producing a tournament the
//! engine could never reach.

use crate::core::{Entry, TournamentHistory, TournamentState};
use crate::dispatch::Tournament;
use crate::engine::{Engine, EngineConfig};
use crate::validation::{check_invariants, describe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a tournament.
///
/// # Example
///
/// ```rust
/// use versus::checkpoint::Checkpoint;
/// use versus::dispatch::{Action, Tournament};
///
/// let mut tournament = Tournament::default();
/// tournament.dispatch(&Action::set_entries(["Alien", "Heat"].map(String::from))).unwrap();
/// tournament.dispatch(&Action::Next).unwrap();
///
/// let json = tournament.checkpoint().to_json().unwrap();
/// let restored = Tournament::restore(Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(restored.state(), tournament.state());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<E: Entry> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Engine configuration the tournament runs under
    pub config: EngineConfig,

    /// Current snapshot
    pub state: TournamentState<E>,

    /// Complete transition history
    pub history: TournamentHistory<E>,
}

impl<E: Entry> Checkpoint<E> {
    pub fn capture(tournament: &Tournament<E>) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            config: tournament.engine().config().clone(),
            state: tournament.state().clone(),
            history: tournament.history().clone(),
        };
        debug!(id = %checkpoint.id, phase = %checkpoint.state.phase(), "checkpoint captured");
        checkpoint
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check the format version, the configuration, the history length and
    /// the invariants of every snapshot, including those kept for undo.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        self.config.validate()?;

        if let Some(limit) = self.config.history_limit {
            if self.history.len() > limit {
                return Err(CheckpointError::HistoryTooLong {
                    len: self.history.len(),
                    limit,
                });
            }
        }

        let snapshots = std::iter::once(("current snapshot".to_string(), &self.state)).chain(
            self.history
                .steps()
                .enumerate()
                .map(|(index, step)| (format!("history step {index}"), &step.previous)),
        );
        for (location, snapshot) in snapshots {
            if let Some(reason) = describe(&check_invariants(snapshot, self.config.mode)) {
                warn!(id = %self.id, %location, %reason, "checkpoint failed validation");
                return Err(CheckpointError::InvalidSnapshot { location, reason });
            }
        }

        Ok(())
    }

    /// Rebuild the tournament this checkpoint was captured from.
    pub fn restore(self) -> Result<Tournament<E>, CheckpointError> {
        self.validate()?;
        debug!(id = %self.id, phase = %self.state.phase(), "checkpoint restored");
        Ok(Tournament::from_parts(
            Engine::new(self.config),
            self.state,
            self.history,
        ))
    }
}
