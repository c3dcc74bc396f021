//! The in-progress round: a pair under contest and the votes cast for it.

use super::entry::{Entry, RoundId, VoterId};
use super::error::EngineError;
use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Two distinct entries contesting a round.
///
/// The order is kept for display. It carries no meaning beyond which entry
/// is reported first when both advance.
///
/// # Example
///
/// ```rust
/// use versus::core::Pair;
///
/// let pair = Pair::new("Alien".to_string(), "Heat".to_string()).unwrap();
/// assert!(pair.contains(&"Heat".to_string()));
/// assert!(Pair::new("Heat".to_string(), "Heat".to_string()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Pair<E: Entry>([E; 2]);

impl<E: Entry> Pair<E> {
    /// Pair two entries, rejecting an entry paired with itself.
    pub fn new(first: E, second: E) -> Result<Self, EngineError> {
        if first == second {
            return Err(EngineError::DuplicatePair {
                entry: format!("{first:?}"),
            });
        }
        Ok(Self([first, second]))
    }

    pub fn first(&self) -> &E {
        &self.0[0]
    }

    pub fn second(&self) -> &E {
        &self.0[1]
    }

    pub fn contains(&self, entry: &E) -> bool {
        self.0.contains(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.0.iter()
    }

    /// False only for a pair that bypassed [`Pair::new`], e.g. one read
    /// back from a tampered checkpoint.
    pub fn is_distinct(&self) -> bool {
        self.0[0] != self.0[1]
    }

    pub fn to_vector(&self) -> Vector<E> {
        self.0.iter().cloned().collect()
    }
}

/// Record of the round being voted on.
///
/// Votes are immutable values: [`Vote::cast`] returns a new record and
/// leaves the original untouched, so earlier snapshots stay valid.
///
/// # Example
///
/// ```rust
/// use versus::core::{Pair, RoundId, Vote, VoterId};
///
/// let alien = "Alien".to_string();
/// let heat = "Heat".to_string();
/// let vote = Vote::new(Pair::new(alien.clone(), heat.clone()).unwrap(), RoundId::FIRST);
///
/// let ada = VoterId::from("ada");
/// let vote = vote.cast(&alien, Some(&ada));
/// assert_eq!(vote.tally_for(&alien), 1);
///
/// // Voting again retracts the earlier choice.
/// let vote = vote.cast(&heat, Some(&ada));
/// assert_eq!(vote.tally_for(&alien), 0);
/// assert_eq!(vote.tally_for(&heat), 1);
/// assert_eq!(vote.choice_of(&ada), Some(&heat));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Vote<E: Entry> {
    pair: Pair<E>,
    /// Absent until the first vote of the round is cast
    #[serde(with = "tally_pairs")]
    tally: Option<HashMap<E, u32>>,
    /// Current choice of each identified voter
    votes: HashMap<VoterId, E>,
    id: RoundId,
}

impl<E: Entry> Vote<E> {
    /// Open a round with no votes.
    pub fn new(pair: Pair<E>, id: RoundId) -> Self {
        Self {
            pair,
            tally: None,
            votes: HashMap::new(),
            id,
        }
    }

    pub fn pair(&self) -> &Pair<E> {
        &self.pair
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Whether at least one vote has been cast this round.
    pub fn is_tallied(&self) -> bool {
        self.tally.is_some()
    }

    pub fn tally(&self) -> Option<&HashMap<E, u32>> {
        self.tally.as_ref()
    }

    /// Current count for `entry`, zero when it has none.
    pub fn tally_for(&self, entry: &E) -> u32 {
        self.tally
            .as_ref()
            .and_then(|tally| tally.get(entry))
            .copied()
            .unwrap_or(0)
    }

    pub fn votes(&self) -> &HashMap<VoterId, E> {
        &self.votes
    }

    pub fn choice_of(&self, voter: &VoterId) -> Option<&E> {
        self.votes.get(voter)
    }

    /// Cast a vote for `entry`, returning the updated record.
    ///
    /// A vote for an entry outside the pair is ignored and the record comes
    /// back unchanged. With a voter id, the voter's previous choice is
    /// retracted before the new one counts, so re-voting never inflates the
    /// tally. Without one the vote is an independent increment.
    #[must_use]
    pub fn cast(&self, entry: &E, voter: Option<&VoterId>) -> Self {
        if !self.pair.contains(entry) {
            return self.clone();
        }
        match voter {
            Some(voter) => self.retract(voter).apply(entry, Some(voter)),
            None => self.apply(entry, None),
        }
    }

    fn retract(&self, voter: &VoterId) -> Self {
        let Some(previous) = self.votes.get(voter) else {
            return self.clone();
        };
        let tally = self.tally.as_ref().map(|tally| {
            let count = tally.get(previous).copied().unwrap_or(0);
            tally.update(previous.clone(), count.saturating_sub(1))
        });
        Self {
            pair: self.pair.clone(),
            tally,
            votes: self.votes.without(voter),
            id: self.id,
        }
    }

    fn apply(&self, entry: &E, voter: Option<&VoterId>) -> Self {
        let tally = self.tally.clone().unwrap_or_default();
        let count = tally.get(entry).copied().unwrap_or(0);
        let votes = match voter {
            Some(voter) => self.votes.update(voter.clone(), entry.clone()),
            None => self.votes.clone(),
        };
        Self {
            pair: self.pair.clone(),
            tally: Some(tally.update(entry.clone(), count + 1)),
            votes,
            id: self.id,
        }
    }

    /// Entries that advance out of this round.
    ///
    /// An untallied round returns both contestants. Otherwise every entry
    /// holding the highest count advances, so a tie carries all tied
    /// entries forward. Entries are reported in pair order.
    pub fn winners(&self) -> Vector<E> {
        let Some(tally) = &self.tally else {
            return self.pair.to_vector();
        };
        let (_, winners) = self
            .pair
            .iter()
            .filter_map(|entry| tally.get(entry).map(|count| (entry, *count)))
            .fold((0, Vector::new()), |(max, mut winners), (entry, count)| {
                match count.cmp(&max) {
                    Ordering::Greater => (count, Vector::unit(entry.clone())),
                    Ordering::Equal => {
                        winners.push_back(entry.clone());
                        (max, winners)
                    }
                    Ordering::Less => (max, winners),
                }
            });
        winners
    }
}

/// Tallies serialize as `[entry, count]` pairs. Entries need not be
/// strings, and JSON only allows string map keys.
mod tally_pairs {
    use super::Entry;
    use im::HashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<E, S>(tally: &Option<HashMap<E, u32>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: Entry,
        S: Serializer,
    {
        tally
            .as_ref()
            .map(|tally| tally.iter().collect::<Vec<(&E, &u32)>>())
            .serialize(serializer)
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<HashMap<E, u32>>, D::Error>
    where
        E: Entry,
        D: Deserializer<'de>,
    {
        let pairs = Option::<Vec<(E, u32)>>::deserialize(deserializer)?;
        Ok(pairs.map(|pairs| pairs.into_iter().collect()))
    }
}
