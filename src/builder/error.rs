//! Build errors for tournament builders.

use crate::core::EngineError;
use thiserror::Error;

/// Errors that can occur when building a tournament.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Entries not specified. Call .entries(iter) before .build()")]
    MissingEntries,

    #[error("History limit must be at least 1")]
    HistoryLimitZero,

    #[error("Could not open the first round: {0}")]
    Engine(#[from] EngineError),
}
