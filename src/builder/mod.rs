//! Builder API for ergonomic tournament construction.
//!
//! # Example
//!
//! ```rust
//! use versus::builder::TournamentBuilder;
//! use versus::core::Phase;
//! use versus::engine::EngineMode;
//!
//! let tournament = TournamentBuilder::new()
//!     .entries(["Alien", "Heat", "Ran"].map(String::from))
//!     .mode(EngineMode::Full)
//!     .history_limit(100)
//!     .start_first_round(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tournament.phase(), Phase::Voting);
//! ```

pub mod error;
pub mod tournament;

pub use error::BuildError;
pub use tournament::TournamentBuilder;
