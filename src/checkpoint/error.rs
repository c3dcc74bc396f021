//! Checkpoint error types.

use crate::engine::ConfigError;
use thiserror::Error;

/// Why a checkpoint could not be written, read or resumed.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Checkpoint binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Checkpoint configuration is invalid: {0}")]
    Config(#[from] ConfigError),

    /// History holds more steps than the configured limit allows
    #[error("Checkpoint history has {len} steps, limit is {limit}")]
    HistoryTooLong { len: usize, limit: usize },

    /// A snapshot breaks the tournament invariants; `location` names the
    /// current snapshot or the history step it came from
    #[error("Checkpoint {location} breaks tournament invariants: {reason}")]
    InvalidSnapshot { location: String, reason: String },
}
