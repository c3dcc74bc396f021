//! Invariant violations found in a snapshot.

use thiserror::Error;

/// A broken snapshot invariant. Entries and voters are carried in their
/// `Debug` form so the violation does not depend on the entry type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("round pairs an entry with itself")]
    PairNotDistinct,

    #[error("tally counts {entry}, which is not in the pair")]
    TallyOutsidePair { entry: String },

    #[error("tally for {entry} is {tally} but {votes} identified voters chose it")]
    TallyMismatch {
        entry: String,
        tally: u32,
        votes: usize,
    },

    #[error("voter {voter} chose an entry outside the pair")]
    VoteOutsidePair { voter: String },

    #[error("voter {voter} recorded in anonymous mode")]
    AnonymousVoterRecorded { voter: String },

    #[error("winner set while a round is still open")]
    WinnerWithActiveRound,

    #[error("seeded tournament has no initial entries to restart from")]
    InitialEntriesMissing,
}
