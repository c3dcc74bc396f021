//! Invariant checks over tournament snapshots.
//!
//! Snapshots produced by the engine always hold these invariants. Snapshots
//! that arrive from outside (a restored checkpoint, a hand-built state) may
//! not, so [`check_invariants`] inspects one and reports every violation it
//! finds in a single pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use versus::core::{seed, TournamentState};
//! use versus::engine::EngineMode;
//! use versus::validation::check_invariants;
//!
//! let state = seed(&TournamentState::new(), ["Alien".to_string(), "Heat".to_string()]);
//! assert!(check_invariants(&state, EngineMode::Full).is_success());
//!
//! let tampered = TournamentState { initial_entries: None, ..state };
//! assert!(check_invariants(&tampered, EngineMode::Full).is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_invariants, describe};
pub use violations::InvariantViolation;
