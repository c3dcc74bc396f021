//! Identifiers used by the tournament engine.
//!
//! Entries are opaque to the engine: it only compares, hashes, clones and
//! serializes them. Voters and rounds get small newtypes so they can't be
//! confused with entries or with each other.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for values that can compete in a tournament.
///
/// The engine never looks inside an entry. Anything that is cloneable,
/// comparable, hashable and serializable qualifies through the blanket
/// implementation below, so titles as `String` or numeric ids work out of
/// the box.
///
/// # Required Traits
///
/// - `Clone`: entries are copied into snapshots, pairs and tallies
/// - `Eq` + `Hash`: entries key the tally
/// - `Debug`: entries appear in diagnostics and log fields
/// - `Serialize` + `Deserialize`: entries travel inside checkpoints
///
/// # Example
///
/// ```rust
/// use versus::core::Entry;
///
/// fn assert_entry<E: Entry>() {}
///
/// assert_entry::<String>();
/// assert_entry::<u32>();
/// ```
pub trait Entry:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

impl<T> Entry for T where
    T: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

/// Identity of a voter within a round.
///
/// A voter's latest choice replaces their earlier one, so the id is what
/// lets the engine retract a previous vote.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VoterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VoterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Round number. The first round of a tournament is 1 and every new round,
/// including the first round after a restart, gets a larger number.
///
/// # Example
///
/// ```rust
/// use versus::core::RoundId;
///
/// let first = RoundId::FIRST;
/// assert_eq!(first.get(), 1);
/// assert_eq!(first.next().get(), 2);
/// assert_eq!(RoundId::after(None), RoundId::FIRST);
/// assert_eq!(RoundId::after(Some(RoundId::new(7))).get(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(u64);

impl RoundId {
    pub const FIRST: RoundId = RoundId(1);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The id following `current`, or the first id when no round has been
    /// played yet.
    pub fn after(current: Option<RoundId>) -> Self {
        current.map_or(Self::FIRST, RoundId::next)
    }
}

impl Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
