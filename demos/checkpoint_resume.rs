//! Checkpoint and Resume
//!
//! This demo checkpoints a match mid-set, rebuilds the engine from the
//! serialized form, and shows that undo still walks back through points
//! recorded before the restart.
//!
//! Key concepts:
//! - State and history are serialized together, never separately
//! - JSON for readability, binary for compactness
//! - Restores are validated before an engine is rebuilt
//!
//! Run with: cargo run --example checkpoint_resume

use rallypoint::{Checkpoint, MatchEngine, TargetScore, Team};

fn main() {
    println!("=== Checkpoint and Resume Demo ===\n");

    let mut engine = MatchEngine::new();
    engine.start_match(TargetScore::TwentyOne);
    for team in [Team::A, Team::B, Team::B, Team::A, Team::B] {
        engine.record_point(team).unwrap();
    }
    println!(
        "Live engine: {}-{}, {} serving, {} points undoable",
        engine.state().score_a(),
        engine.state().score_b(),
        engine.state().serving(),
        engine.undo_depth()
    );

    // Capture both codecs; a host application would write these to disk.
    let checkpoint = engine.checkpoint();
    let json = checkpoint.to_json().unwrap();
    let bytes = checkpoint.to_bytes().unwrap();
    println!(
        "Captured checkpoint {}: {} bytes of JSON, {} bytes binary",
        checkpoint.id,
        json.len(),
        bytes.len()
    );

    // Simulate a restart: the live engine is gone, only the JSON survives.
    drop(engine);

    let restored = Checkpoint::from_json(&json).unwrap();
    let mut engine = MatchEngine::from_checkpoint(restored).unwrap();
    println!(
        "\nRestored engine: {}-{}, {} serving, {} points undoable",
        engine.state().score_a(),
        engine.state().score_b(),
        engine.state().serving(),
        engine.undo_depth()
    );

    // Undo reaches points recorded before the restart.
    engine.undo();
    engine.undo();
    println!(
        "After two undos: {}-{}, {} serving",
        engine.state().score_a(),
        engine.state().score_b(),
        engine.state().serving()
    );

    println!("\n=== Demo Complete ===");
}
