//! Core tournament types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - Entry, voter and round identifiers
//! - The round record (`Vote`) and the root snapshot (`TournamentState`)
//! - The transition functions `seed`, `advance_round`, `cast_vote` and `restart`
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects beyond `tracing`
//! events): every operation returns a new snapshot.

mod entry;
mod error;
mod history;
mod rules;
mod state;
mod vote;

pub use entry::{Entry, RoundId, VoterId};
pub use error::EngineError;
pub use history::{Step, TournamentHistory, TransitionKind};
pub use rules::{advance_round, advance_round_to, cast_vote, restart, round_winners, seed};
pub use state::{Phase, TournamentState};
pub use vote::{Pair, Vote};
