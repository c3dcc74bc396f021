//! Engine error types.

use thiserror::Error;

/// Contract violations reported by the tournament engine.
///
/// None of these arise from well-formed use: they mark calls the dispatch
/// layer must not make, such as advancing a tournament that was never
/// seeded. Invalid votes are not errors; they leave the state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Tournament has not been seeded with entries")]
    NotSeeded,

    #[error("Tournament is already decided; restart it to play again")]
    AlreadyDecided,

    #[error("No candidates left to form a round")]
    NoCandidates,

    #[error("Cannot pair entry {entry} against itself")]
    DuplicatePair { entry: String },

    #[error("Restart is not available in anonymous mode")]
    RestartUnsupported,
}
