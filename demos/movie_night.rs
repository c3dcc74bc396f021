//! Movie Night
//!
//! This example runs a small movie-night tournament through actions.
//!
//! Key concepts:
//! - Actions parsed from JSON and dispatched one at a time
//! - Voters changing their minds before a round closes
//! - Ties carrying both entries into a later round
//! - Checkpointing mid-tournament and resuming from it
//!
//! Run with: RUST_LOG=versus=debug cargo run --example movie_night

use tracing_subscriber::EnvFilter;
use versus::checkpoint::Checkpoint;
use versus::core::TournamentState;
use versus::dispatch::{Action, Tournament};

const OPENING: &str = r#"[
    { "type": "SET_ENTRIES", "entries": ["Trainspotting", "28 Days Later", "Sunshine", "Alien"] },
    { "type": "NEXT" },
    { "type": "VOTE", "entry": "Trainspotting", "voterId": "ada" },
    { "type": "VOTE", "entry": "28 Days Later", "voterId": "bob" },
    { "type": "VOTE", "entry": "28 Days Later", "voterId": "ada" },
    { "type": "NEXT" },
    { "type": "VOTE", "entry": "Sunshine", "voterId": "ada" },
    { "type": "VOTE", "entry": "Alien", "voterId": "bob" },
    { "type": "POPCORN" }
]"#;

fn describe(state: &TournamentState<String>) {
    if let Some(winner) = &state.winner {
        println!("  Winner: {}", winner);
        return;
    }
    if let Some(vote) = &state.vote {
        println!(
            "  Round {}: {} ({}) vs {} ({})",
            vote.id(),
            vote.pair().first(),
            vote.tally_for(vote.pair().first()),
            vote.pair().second(),
            vote.tally_for(vote.pair().second()),
        );
    }
    if let Some(entries) = &state.entries {
        let waiting: Vec<&str> = entries.iter().map(String::as_str).collect();
        println!("  Waiting: {:?}", waiting);
    }
}

fn play(tournament: &mut Tournament<String>, actions: &[Action<String>]) {
    for action in actions {
        match tournament.dispatch(action) {
            Ok(state) => {
                println!("{:?}", action);
                describe(state);
            }
            Err(e) => println!("{:?} rejected: {}", action, e),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Movie Night Example ===\n");

    let opening: Vec<Action<String>> = match serde_json::from_str(OPENING) {
        Ok(actions) => actions,
        Err(e) => {
            println!("Could not parse actions: {}", e);
            return;
        }
    };

    let mut tournament = Tournament::default();
    play(&mut tournament, &opening);

    // Save the tied round and pick it back up
    let json = match tournament.checkpoint().to_json() {
        Ok(json) => json,
        Err(e) => {
            println!("Checkpoint failed: {}", e);
            return;
        }
    };
    println!("\n[Checkpoint] {} bytes of JSON\n", json.len());

    let mut resumed = match Checkpoint::<String>::from_json(&json).and_then(Checkpoint::restore) {
        Ok(tournament) => tournament,
        Err(e) => {
            println!("Resume failed: {}", e);
            return;
        }
    };

    let closing = [
        Action::Next,
        Action::vote("28 Days Later".to_string(), "ada"),
        Action::vote("28 Days Later".to_string(), "bob"),
        Action::Next,
        Action::vote("Alien".to_string(), "ada"),
        Action::vote("Sunshine".to_string(), "bob"),
        Action::Next,
        Action::Next,
    ];
    play(&mut resumed, &closing);

    println!("\nPhases: {:?}", resumed.history().phase_path());
    println!("Rounds played: {}", resumed.history().rounds_played());

    println!("\n=== Example Complete ===");
}
