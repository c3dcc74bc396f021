//! Versus: a pairwise-elimination voting tournament engine
//!
//! Versus is built on a "pure core, imperative shell" design. The core
//! tournament logic is composed of pure functions over immutable snapshots,
//! while the shell ([`dispatch::Tournament`]) owns the current snapshot,
//! applies actions one at a time and keeps the history.
//!
//! # Core Concepts
//!
//! - **Entry**: anything that can compete, via the blanket `Entry` trait
//! - **Vote**: one round between a pair of entries, with its tally
//! - **TournamentState**: the immutable root snapshot
//! - **Engine**: the four operations `seed`, `advance_round`, `cast_vote`
//!   and `restart`, in full or anonymous mode
//!
//! Each round pairs the first two waiting entries. When the round closes,
//! the entries with the most votes (both of them on a tie or when nobody
//! voted) go to the back of the queue. The last entry standing wins.
//!
//! # Example
//!
//! ```rust
//! use versus::core::{TournamentState, VoterId};
//! use versus::engine::Engine;
//!
//! let engine = Engine::default();
//! let state = engine.seed(&TournamentState::new(), ["X", "Y", "Z"].map(String::from));
//!
//! // Round 1: X vs Y
//! let state = engine.advance_round(&state).unwrap();
//! let state = engine.cast_vote(&state, &"X".to_string(), Some(&VoterId::from("ada")));
//!
//! // Round 2: Z vs X
//! let state = engine.advance_round(&state).unwrap();
//! let state = engine.cast_vote(&state, &"Z".to_string(), Some(&VoterId::from("ada")));
//!
//! let state = engine.advance_round(&state).unwrap();
//! assert_eq!(state.winner, Some("Z".to_string()));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod dispatch;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, TournamentBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{EngineError, Entry, Phase, RoundId, TournamentState, Vote, VoterId};
pub use crate::dispatch::{Action, Tournament};
pub use crate::engine::{Engine, EngineConfig, EngineMode};
