//! Actions understood by the dispatcher.

use crate::core::{Entry, TransitionKind, VoterId};
use serde::{Deserialize, Serialize};

/// An external request to move a tournament forward.
///
/// Actions are tagged by a `type` field. Any other `type` deserializes to
/// [`Action::Unrecognized`], which dispatches as a no-op instead of failing.
///
/// # Example
///
/// ```rust
/// use versus::dispatch::Action;
///
/// let action: Action<String> =
///     serde_json::from_str(r#"{ "type": "VOTE", "entry": "Heat", "voterId": "ada" }"#).unwrap();
/// assert_eq!(action, Action::vote("Heat".to_string(), "ada"));
///
/// let unknown: Action<String> = serde_json::from_str(r#"{ "type": "SHUFFLE" }"#).unwrap();
/// assert_eq!(unknown, Action::Unrecognized);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", bound = "")]
pub enum Action<E: Entry> {
    SetEntries {
        entries: Vec<E>,
    },
    Next,
    Vote {
        entry: E,
        #[serde(default, alias = "voterId")]
        voter_id: Option<VoterId>,
    },
    Restart,
    #[serde(other)]
    Unrecognized,
}

impl<E: Entry> Action<E> {
    pub fn set_entries(entries: impl IntoIterator<Item = E>) -> Self {
        Self::SetEntries {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn vote(entry: E, voter: impl Into<VoterId>) -> Self {
        Self::Vote {
            entry,
            voter_id: Some(voter.into()),
        }
    }

    /// A vote with no voter identity; it never replaces an earlier vote.
    pub fn anonymous_vote(entry: E) -> Self {
        Self::Vote {
            entry,
            voter_id: None,
        }
    }

    /// The engine operation this action maps to, `None` when unrecognized.
    pub fn kind(&self) -> Option<TransitionKind> {
        match self {
            Self::SetEntries { .. } => Some(TransitionKind::Seed),
            Self::Next => Some(TransitionKind::AdvanceRound),
            Self::Vote { .. } => Some(TransitionKind::CastVote),
            Self::Restart => Some(TransitionKind::Restart),
            Self::Unrecognized => None,
        }
    }
}
