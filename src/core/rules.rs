//! Tournament transition functions.
//!
//! Each function takes a snapshot by reference and returns its successor.
//! These implement the full-featured engine: initial entries are captured
//! for restarts and votes carry voter identity. [`crate::engine::Engine`]
//! layers the anonymous variant on top.

use super::entry::{Entry, RoundId, VoterId};
use super::error::EngineError;
use super::state::{Phase, TournamentState};
use super::vote::{Pair, Vote};
use im::Vector;
use tracing::{debug, trace};

/// Seed a tournament with its entries.
///
/// The entries become both the waiting pool and the reference list used by
/// [`restart`]. Any previous entries are replaced; an open round or a winner
/// is left as is.
///
/// # Example
///
/// ```rust
/// use im::vector;
/// use versus::core::{seed, TournamentState};
///
/// let state = seed(&TournamentState::new(), vec![1, 2, 3]);
/// assert_eq!(state.entries, Some(vector![1, 2, 3]));
/// assert_eq!(state.initial_entries, Some(vector![1, 2, 3]));
/// ```
pub fn seed<E, I>(state: &TournamentState<E>, entries: I) -> TournamentState<E>
where
    E: Entry,
    I: IntoIterator<Item = E>,
{
    let entries: Vector<E> = entries.into_iter().collect();
    debug!(entries = entries.len(), "seeding tournament");
    TournamentState {
        entries: Some(entries.clone()),
        initial_entries: Some(entries),
        ..state.clone()
    }
}

/// Entries carried out of `vote` into the next round.
///
/// Before the first round there is nothing to carry over.
pub fn round_winners<E: Entry>(vote: Option<&Vote<E>>) -> Vector<E> {
    vote.map(Vote::winners).unwrap_or_default()
}

/// Close the current round and open the next one, numbered one past the
/// current round (or 1 when no round has been played).
///
/// The round's winners join the back of the waiting pool and the first two
/// entries of the pool are paired. When only one entry is left it is
/// declared the winner.
///
/// # Example
///
/// ```rust
/// use im::vector;
/// use versus::core::{advance_round, seed, RoundId, TournamentState};
///
/// let state = seed(&TournamentState::new(), vec!["Alien", "Heat", "Ran"].into_iter().map(String::from));
/// let state = advance_round(&state).unwrap();
///
/// let vote = state.vote.as_ref().unwrap();
/// assert_eq!(vote.pair().first(), "Alien");
/// assert_eq!(vote.pair().second(), "Heat");
/// assert_eq!(vote.id(), RoundId::FIRST);
/// assert_eq!(state.entries, Some(vector!["Ran".to_string()]));
/// ```
pub fn advance_round<E: Entry>(state: &TournamentState<E>) -> Result<TournamentState<E>, EngineError> {
    advance_round_to(state, RoundId::after(state.round()))
}

/// Like [`advance_round`], but the new round gets the id `round`.
pub fn advance_round_to<E: Entry>(
    state: &TournamentState<E>,
    round: RoundId,
) -> Result<TournamentState<E>, EngineError> {
    match state.phase() {
        Phase::Empty => return Err(EngineError::NotSeeded),
        Phase::Decided => return Err(EngineError::AlreadyDecided),
        Phase::Seeded | Phase::Voting => {}
    }

    let mut candidates = state.entries.clone().unwrap_or_default();
    candidates.append(round_winners(state.vote.as_ref()));

    if candidates.len() == 1 {
        let winner = candidates.pop_front();
        debug!(winner = ?winner, "tournament decided");
        return Ok(TournamentState {
            entries: None,
            vote: None,
            winner,
            final_round: state.last_round(),
            ..state.clone()
        });
    }

    let (Some(first), Some(second)) = (candidates.pop_front(), candidates.pop_front()) else {
        return Err(EngineError::NoCandidates);
    };
    let pair = Pair::new(first, second)?;
    debug!(
        round = %round,
        pair = ?pair,
        waiting = candidates.len(),
        "round opened"
    );

    Ok(TournamentState {
        entries: Some(candidates),
        vote: Some(Vote::new(pair, round)),
        final_round: None,
        ..state.clone()
    })
}

/// Record a vote for `entry` in the round in progress.
///
/// Votes for entries outside the current pair, and votes cast while no
/// round is open, return the snapshot unchanged. A voter who votes again
/// has their previous choice replaced.
pub fn cast_vote<E: Entry>(
    state: &TournamentState<E>,
    entry: &E,
    voter: Option<&VoterId>,
) -> TournamentState<E> {
    let Some(vote) = &state.vote else {
        debug!(entry = ?entry, "vote ignored: no round in progress");
        return state.clone();
    };
    if !vote.pair().contains(entry) {
        debug!(round = %vote.id(), entry = ?entry, "vote ignored: entry not in pair");
        return state.clone();
    }

    trace!(
        round = %vote.id(),
        entry = ?entry,
        voter = voter.map(VoterId::as_str),
        "vote cast"
    );
    TournamentState {
        vote: Some(vote.cast(entry, voter)),
        ..state.clone()
    }
}

/// Start the tournament over from its seeded entries.
///
/// The open round (and any partial tally) or the winner is discarded and a
/// new first round is opened. Round numbering continues from the last round
/// played, including the deciding round of a finished tournament, instead
/// of going back to 1.
pub fn restart<E: Entry>(state: &TournamentState<E>) -> Result<TournamentState<E>, EngineError> {
    let initial = state.initial_entries.clone().ok_or(EngineError::NotSeeded)?;
    let round = RoundId::after(state.last_round());
    debug!(round = %round, entries = initial.len(), "restarting tournament");

    let reset = TournamentState {
        entries: Some(initial),
        initial_entries: state.initial_entries.clone(),
        vote: None,
        winner: None,
        final_round: state.last_round(),
    };
    advance_round_to(&reset, round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::vector;

    fn titles(names: &[&str]) -> Vector<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn title(name: &str) -> String {
        name.to_string()
    }

    fn voting(
        pair: (&str, &str),
        id: u64,
        votes: &[(&str, usize)],
        entries: &[&str],
    ) -> TournamentState<String> {
        let open = Vote::new(Pair::new(title(pair.0), title(pair.1)).unwrap(), RoundId::new(id));
        let vote = votes.iter().fold(open, |vote, (entry, times)| {
            (0..*times).fold(vote, |vote, _| vote.cast(&title(entry), None))
        });
        TournamentState {
            entries: Some(titles(entries)),
            vote: Some(vote),
            ..TournamentState::new()
        }
    }

    fn open_round(pair: (&str, &str), id: u64, entries: &[&str]) -> TournamentState<String> {
        voting(pair, id, &[], entries)
    }

    #[test]
    fn seed_sets_entries_and_initial_entries() {
        let state = seed(&TournamentState::new(), titles(&["Trainspotting", "28 Days Later"]));

        assert_eq!(
            state,
            TournamentState {
                entries: Some(titles(&["Trainspotting", "28 Days Later"])),
                initial_entries: Some(titles(&["Trainspotting", "28 Days Later"])),
                ..TournamentState::new()
            }
        );
    }

    #[test]
    fn seed_accepts_any_iterable() {
        let from_vec = seed(&TournamentState::new(), vec![title("A"), title("B")]);
        let from_array = seed(&TournamentState::new(), [title("A"), title("B")]);
        assert_eq!(from_vec, from_array);
    }

    #[test]
    fn seed_overwrites_previous_entries() {
        let first = seed(&TournamentState::new(), titles(&["A", "B"]));
        let second = seed(&first, titles(&["C"]));

        assert_eq!(second.entries, Some(titles(&["C"])));
        assert_eq!(second.initial_entries, Some(titles(&["C"])));
    }

    #[test]
    fn advance_takes_first_two_entries() {
        let state = TournamentState {
            entries: Some(titles(&["Trainspotting", "28 Days Later", "Sunshine"])),
            ..TournamentState::new()
        };

        let next = advance_round(&state).unwrap();

        assert_eq!(next, open_round(("Trainspotting", "28 Days Later"), 1, &["Sunshine"]));
    }

    #[test]
    fn advance_with_exactly_two_entries_leaves_empty_pool() {
        let state = TournamentState {
            entries: Some(titles(&["Trainspotting", "28 Days Later"])),
            ..TournamentState::new()
        };

        let next = advance_round(&state).unwrap();

        assert_eq!(next.entries, Some(Vector::new()));
        assert_eq!(next.phase(), Phase::Voting);
    }

    #[test]
    fn advance_puts_clear_winner_back() {
        let state = voting(
            ("Trainspotting", "28 Days Later"),
            1,
            &[("Trainspotting", 4), ("28 Days Later", 2)],
            &["Sunshine", "Millions", "127 Hours"],
        );

        let next = advance_round(&state).unwrap();

        assert_eq!(
            next,
            open_round(("Sunshine", "Millions"), 2, &["127 Hours", "Trainspotting"])
        );
    }

    #[test]
    fn advance_puts_both_back_on_tie() {
        let state = voting(
            ("Trainspotting", "28 Days Later"),
            1,
            &[("Trainspotting", 3), ("28 Days Later", 3)],
            &["Sunshine", "Millions", "127 Hours"],
        );

        let next = advance_round(&state).unwrap();

        assert_eq!(
            next,
            open_round(
                ("Sunshine", "Millions"),
                2,
                &["127 Hours", "Trainspotting", "28 Days Later"]
            )
        );
    }

    #[test]
    fn advance_puts_both_back_when_nobody_voted() {
        let state = open_round(("A", "B"), 1, &["C", "D", "E"]);

        let next = advance_round(&state).unwrap();

        assert_eq!(next, open_round(("C", "D"), 2, &["E", "A", "B"]));
    }

    #[test]
    fn advance_declares_last_entry_winner() {
        let state = voting(
            ("Trainspotting", "28 Days Later"),
            4,
            &[("Trainspotting", 4), ("28 Days Later", 2)],
            &[],
        );

        let next = advance_round(&state).unwrap();

        assert_eq!(
            next,
            TournamentState {
                winner: Some(title("Trainspotting")),
                final_round: Some(RoundId::new(4)),
                ..TournamentState::new()
            }
        );
    }

    #[test]
    fn advance_keeps_initial_entries() {
        let state = seed(&TournamentState::new(), titles(&["A", "B", "C"]));
        let next = advance_round(&state).unwrap();
        assert_eq!(next.initial_entries, Some(titles(&["A", "B", "C"])));
    }

    #[test]
    fn single_entry_seed_is_decided_immediately() {
        let state = seed(&TournamentState::new(), titles(&["Trainspotting"]));

        let next = advance_round(&state).unwrap();

        assert_eq!(next.winner, Some(title("Trainspotting")));
        assert_eq!(next.phase(), Phase::Decided);
        assert!(next.entries.is_none());
        assert!(next.final_round.is_none());
    }

    #[test]
    fn explicit_round_id_overrides_default() {
        let state = open_round(("A", "B"), 1, &["C"]);
        let next = advance_round_to(&state, RoundId::new(10)).unwrap();
        assert_eq!(next.round(), Some(RoundId::new(10)));
    }

    #[test]
    fn advance_rejects_unseeded_tournament() {
        let state: TournamentState<String> = TournamentState::new();
        assert_eq!(advance_round(&state), Err(EngineError::NotSeeded));
    }

    #[test]
    fn advance_rejects_decided_tournament() {
        let state = TournamentState {
            winner: Some(title("A")),
            ..TournamentState::new()
        };
        assert_eq!(advance_round(&state), Err(EngineError::AlreadyDecided));
    }

    #[test]
    fn advance_rejects_empty_seed() {
        let state = seed(&TournamentState::<String>::new(), Vec::new());
        assert_eq!(advance_round(&state), Err(EngineError::NoCandidates));
    }

    #[test]
    fn advance_rejects_duplicate_pair() {
        let state = seed(&TournamentState::new(), titles(&["A", "A", "B"]));
        assert!(matches!(
            advance_round(&state),
            Err(EngineError::DuplicatePair { .. })
        ));
    }

    #[test]
    fn cast_vote_creates_tally_and_records_voter() {
        let state = open_round(("Trainspotting", "28 Days Later"), 1, &[]);
        let voter = VoterId::from("John");

        let next = cast_vote(&state, &title("Trainspotting"), Some(&voter));

        let vote = next.vote.as_ref().unwrap();
        assert_eq!(vote.tally_for(&title("Trainspotting")), 1);
        assert_eq!(vote.choice_of(&voter), Some(&title("Trainspotting")));
        assert_eq!(next.entries, state.entries);
    }

    #[test]
    fn cast_vote_replaces_previous_choice() {
        let state = open_round(("Trainspotting", "28 Days Later"), 1, &[]);
        let voter = VoterId::from("John");

        let first = cast_vote(&state, &title("Trainspotting"), Some(&voter));
        let second = cast_vote(&first, &title("28 Days Later"), Some(&voter));

        let vote = second.vote.as_ref().unwrap();
        assert_eq!(vote.tally_for(&title("Trainspotting")), 0);
        assert_eq!(vote.tally_for(&title("28 Days Later")), 1);
        assert_eq!(vote.choice_of(&voter), Some(&title("28 Days Later")));
    }

    #[test]
    fn cast_vote_for_unknown_entry_is_identity() {
        let state = open_round(("Trainspotting", "28 Days Later"), 1, &[]);

        let next = cast_vote(&state, &title("Sunshine"), Some(&VoterId::from("John")));

        assert_eq!(next, state);
    }

    #[test]
    fn cast_vote_without_round_is_identity() {
        let state = seed(&TournamentState::new(), titles(&["A", "B"]));
        let next = cast_vote(&state, &title("A"), Some(&VoterId::from("John")));
        assert_eq!(next, state);
    }

    #[test]
    fn round_winners_is_empty_before_first_round() {
        assert!(round_winners::<String>(None).is_empty());
    }

    fn with_initial(state: TournamentState<String>, initial: &[&str]) -> TournamentState<String> {
        TournamentState {
            initial_entries: Some(titles(initial)),
            ..state
        }
    }

    #[test]
    fn restart_replaces_round_with_first_pair() {
        let initial = ["Sunshine", "Millions", "127 Hours", "Trainspotting", "28 Days Later"];
        let state = with_initial(
            voting(
                ("Trainspotting", "28 Days Later"),
                1,
                &[("Trainspotting", 4), ("28 Days Later", 2)],
                &["Sunshine", "Millions", "127 Hours"],
            ),
            &initial,
        );

        let next = restart(&state).unwrap();

        assert_eq!(
            next,
            with_initial(
                open_round(
                    ("Sunshine", "Millions"),
                    2,
                    &["127 Hours", "Trainspotting", "28 Days Later"]
                ),
                &initial
            )
        );
    }

    #[test]
    fn restart_removes_winner() {
        let initial = ["Sunshine", "Millions", "127 Hours", "Trainspotting", "28 Days Later"];
        let state = with_initial(
            TournamentState {
                winner: Some(title("Trainspotting")),
                ..TournamentState::new()
            },
            &initial,
        );

        let next = restart(&state).unwrap();

        assert_eq!(
            next,
            with_initial(
                open_round(
                    ("Sunshine", "Millions"),
                    1,
                    &["127 Hours", "Trainspotting", "28 Days Later"]
                ),
                &initial
            )
        );
    }

    #[test]
    fn restart_during_first_round_bumps_round_id() {
        let initial = ["Trainspotting", "28 Days Later", "Sunshine"];
        let state = with_initial(
            voting(
                ("Trainspotting", "28 Days Later"),
                1,
                &[("Trainspotting", 4)],
                &["Sunshine"],
            ),
            &initial,
        );

        let next = restart(&state).unwrap();

        assert_eq!(
            next,
            with_initial(
                open_round(("Trainspotting", "28 Days Later"), 2, &["Sunshine"]),
                &initial
            )
        );
    }

    #[test]
    fn restart_after_decided_tournament_continues_numbering() {
        let state = seed(&TournamentState::new(), titles(&["A", "B"]));
        let state = advance_round(&state).unwrap();
        let state = cast_vote(&state, &title("B"), Some(&VoterId::from("v")));
        let decided = advance_round(&state).unwrap();
        assert_eq!(decided.winner, Some(title("B")));

        let next = restart(&decided).unwrap();

        assert_eq!(next.round(), Some(RoundId::new(2)));
        assert!(next.winner.is_none());
        assert!(next.final_round.is_none());
        assert_eq!(next.vote.unwrap().pair().to_vector(), titles(&["A", "B"]));
    }

    #[test]
    fn restart_into_single_entry_keeps_round_numbering() {
        let state = seed(&TournamentState::new(), titles(&["A", "B"]));
        let state = advance_round(&state).unwrap();
        let state = advance_round(&state).unwrap();
        let state = advance_round(&state).unwrap();
        assert_eq!(state.round(), Some(RoundId::new(3)));

        let solo = restart(&seed(&state, titles(&["Solo"]))).unwrap();
        assert_eq!(solo.winner, Some(title("Solo")));
        assert_eq!(solo.last_round(), Some(RoundId::new(3)));

        let next = restart(&seed(&solo, titles(&["A", "B"]))).unwrap();

        assert_eq!(next.round(), Some(RoundId::new(4)));
        assert!(next.final_round.is_none());
    }

    #[test]
    fn seeding_a_decided_tournament_waits_for_restart() {
        let decided = advance_round(&seed(&TournamentState::new(), titles(&["A"]))).unwrap();
        let reseeded = seed(&decided, titles(&["B", "C"]));

        assert_eq!(reseeded.phase(), Phase::Decided);
        assert_eq!(advance_round(&reseeded), Err(EngineError::AlreadyDecided));

        let next = restart(&reseeded).unwrap();
        assert_eq!(next.phase(), Phase::Voting);
        assert!(next.winner.is_none());
        assert_eq!(next.vote.unwrap().pair().to_vector(), titles(&["B", "C"]));
    }

    #[test]
    fn restart_before_first_round_opens_round_one() {
        let state = seed(&TournamentState::new(), titles(&["A", "B", "C"]));

        let next = restart(&state).unwrap();

        assert_eq!(next.round(), Some(RoundId::FIRST));
        assert_eq!(next.entries, Some(vector![title("C")]));
    }

    #[test]
    fn restart_requires_initial_entries() {
        let state = open_round(("A", "B"), 3, &[]);
        assert_eq!(restart(&state), Err(EngineError::NotSeeded));
    }

    #[test]
    fn end_to_end_three_entries() {
        let x = title("X");
        let z = title("Z");
        let voter = VoterId::from("v");

        let state = seed(&TournamentState::new(), titles(&["X", "Y", "Z"]));
        let state = advance_round(&state).unwrap();
        assert_eq!(state.round(), Some(RoundId::new(1)));
        assert_eq!(state.entries, Some(vector![z.clone()]));

        let state = cast_vote(&state, &x, Some(&voter));
        let state = advance_round(&state).unwrap();
        let vote = state.vote.as_ref().unwrap();
        assert_eq!(vote.pair().to_vector(), vector![z.clone(), x.clone()]);
        assert_eq!(vote.id(), RoundId::new(2));
        assert_eq!(state.entries, Some(Vector::new()));

        let state = cast_vote(&state, &z, Some(&voter));
        let state = advance_round(&state).unwrap();
        assert_eq!(state.winner, Some(z));
        assert!(state.vote.is_none());
        assert!(state.entries.is_none());
    }
}
