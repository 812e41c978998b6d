//! Full Match
//!
//! This demo plays a scripted best-of-three match from the first serve to
//! match point, with an operator mistake corrected by undo along the way.
//!
//! Key concepts:
//! - Commands in, snapshot and events out
//! - Serve follows the scorer on every rally
//! - Set wins reset the scoreboard; the match-winning set does not
//!
//! Run with: cargo run --example full_match

use rallypoint::{MatchEngine, MatchEvent, TargetScore, Team};

fn scoreboard(engine: &MatchEngine) -> String {
    let state = engine.state();
    format!(
        "{:02}-{:02}  (sets {}-{}, {} serving)",
        state.score_a(),
        state.score_b(),
        state.sets_a(),
        state.sets_b(),
        state.serving()
    )
}

fn announce(event: Option<MatchEvent>) {
    match event {
        Some(MatchEvent::SetWon(team)) => println!("  >>> set to team {team}!"),
        Some(MatchEvent::MatchWon(team)) => println!("  >>> match to team {team}!"),
        None => {}
    }
}

fn main() {
    println!("=== Full Match Demo ===\n");

    let mut engine = MatchEngine::new();
    engine.start_match(TargetScore::Eleven);
    println!("Match started: first to 11, ceiling 16, best of three\n");

    // Set 1: team A runs away with it.
    for _ in 0..11 {
        let event = engine.record_point(Team::A).unwrap();
        announce(event);
    }
    println!("After set 1: {}", scoreboard(&engine));

    // Set 2: B leads, the operator fat-fingers a point for A and takes it back.
    for _ in 0..9 {
        engine.record_point(Team::B).unwrap();
    }
    engine.record_point(Team::A).unwrap();
    println!("\nMis-tap, point given to A: {}", scoreboard(&engine));
    engine.undo();
    println!("Undone:                    {}", scoreboard(&engine));

    for _ in 0..2 {
        let event = engine.record_point(Team::B).unwrap();
        announce(event);
    }
    println!("After set 2: {}", scoreboard(&engine));

    // Deciding set: long deuce, settled two points clear of the target.
    for _ in 0..10 {
        engine.record_point(Team::A).unwrap();
        engine.record_point(Team::B).unwrap();
    }
    println!("\nDeuce in the decider: {}", scoreboard(&engine));

    engine.record_point(Team::A).unwrap();
    let event = engine.record_point(Team::A).unwrap();
    announce(event);
    println!("Final: {}", scoreboard(&engine));
    println!(
        "Match over: {}, points recorded: {}",
        engine.state().match_over(),
        engine.metadata().points_recorded
    );

    println!("\n=== Demo Complete ===");
}
