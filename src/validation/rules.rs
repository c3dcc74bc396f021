//! Snapshot invariants, checked with `Validation` so every violation is
//! reported together.

use crate::core::{Entry, Phase, TournamentState, Vote};
use crate::engine::EngineMode;
use crate::validation::violations::InvariantViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of checking a snapshot.
pub type InvariantCheck = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Check every snapshot invariant, accumulating ALL violations.
///
/// - the pair under vote holds two distinct entries
/// - tally keys are pair members, and each tally covers at least the
///   identified voters who chose that entry
/// - every recorded voter chose a pair member
/// - anonymous tournaments record no voters
/// - a decided tournament has no open round
/// - a seeded full-mode tournament remembers its initial entries
pub fn check_invariants<E: Entry>(state: &TournamentState<E>, mode: EngineMode) -> InvariantCheck {
    let mut checks: Vec<InvariantCheck> = Vec::new();

    if let Some(vote) = &state.vote {
        checks.extend(check_vote(vote, mode));
    }

    if state.winner.is_some() && state.vote.is_some() {
        checks.push(Validation::fail(InvariantViolation::WinnerWithActiveRound));
    }

    if mode == EngineMode::Full && state.phase() != Phase::Empty && state.initial_entries.is_none()
    {
        checks.push(Validation::fail(InvariantViolation::InitialEntriesMissing));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_vote<E: Entry>(vote: &Vote<E>, mode: EngineMode) -> Vec<InvariantCheck> {
    let pair = vote.pair();
    let mut checks = Vec::new();

    if !pair.is_distinct() {
        checks.push(Validation::fail(InvariantViolation::PairNotDistinct));
    }

    if let Some(tally) = vote.tally() {
        for entry in tally.keys().filter(|entry| !pair.contains(entry)) {
            checks.push(Validation::fail(InvariantViolation::TallyOutsidePair {
                entry: format!("{entry:?}"),
            }));
        }
    }

    for entry in pair.iter() {
        let votes = vote.votes().values().filter(|choice| *choice == entry).count();
        let tally = vote.tally_for(entry);
        if (tally as usize) < votes {
            checks.push(Validation::fail(InvariantViolation::TallyMismatch {
                entry: format!("{entry:?}"),
                tally,
                votes,
            }));
        }
    }

    for (voter, choice) in vote.votes() {
        if !pair.contains(choice) {
            checks.push(Validation::fail(InvariantViolation::VoteOutsidePair {
                voter: voter.to_string(),
            }));
        }
        if mode == EngineMode::Anonymous {
            checks.push(Validation::fail(InvariantViolation::AnonymousVoterRecorded {
                voter: voter.to_string(),
            }));
        }
    }

    checks
}

/// Join the violations of a failed check into one line, for error messages.
pub fn describe(check: &InvariantCheck) -> Option<String> {
    match check {
        Validation::Success(_) => None,
        Validation::Failure(errors) => Some(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        ),
    }
}
