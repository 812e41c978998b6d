//! Property-based tests for the scoring engine.
//!
//! These tests use proptest to verify the scoring invariants hold across
//! many randomly generated point sequences.

use proptest::prelude::*;
use rallypoint::{Checkpoint, MatchEngine, MatchState, TargetScore, Team};

prop_compose! {
    fn arbitrary_team()(variant in 0..2u8) -> Team {
        match variant {
            0 => Team::A,
            _ => Team::B,
        }
    }
}

prop_compose! {
    fn arbitrary_target()(variant in 0..3u8) -> TargetScore {
        match variant {
            0 => TargetScore::Eleven,
            1 => TargetScore::Fifteen,
            _ => TargetScore::TwentyOne,
        }
    }
}

/// Feed a point sequence to a fresh engine, stopping at match completion.
/// Returns the engine and how many points were actually recorded.
fn play(target: TargetScore, points: &[Team]) -> (MatchEngine, usize) {
    let mut engine = MatchEngine::new();
    engine.start_match(target);

    let mut recorded = 0;
    for &team in points {
        if engine.state().match_over() {
            break;
        }
        engine.record_point(team).unwrap();
        recorded += 1;
    }
    (engine, recorded)
}

proptest! {
    #[test]
    fn undo_is_the_exact_inverse_of_every_point(
        target in arbitrary_target(),
        points in prop::collection::vec(arbitrary_team(), 0..120)
    ) {
        let (mut engine, recorded) = play(target, &points);
        prop_assert_eq!(engine.undo_depth(), recorded);

        // Walk forward again from scratch, checkpointing each state, then
        // undo all the way back and compare step by step.
        let mut replay = MatchEngine::new();
        replay.start_match(target);
        let mut trail: Vec<MatchState> = vec![replay.state().clone()];
        for &team in &points[..recorded] {
            replay.record_point(team).unwrap();
            trail.push(replay.state().clone());
        }

        for expected in trail.iter().rev().skip(1) {
            prop_assert!(engine.undo());
            prop_assert_eq!(engine.state(), expected);
        }

        // Fully unwound: the exact post-start state, nothing left to undo.
        prop_assert!(!engine.undo());
        prop_assert_eq!(engine.state(), &trail[0]);
        prop_assert_eq!(engine.state().score_a(), 0);
        prop_assert_eq!(engine.state().sets_a(), 0);
        prop_assert_eq!(engine.state().serving(), Team::A);
        prop_assert!(!engine.state().match_over());
    }

    #[test]
    fn serve_always_belongs_to_the_last_scorer(
        target in arbitrary_target(),
        points in prop::collection::vec(arbitrary_team(), 1..120)
    ) {
        let (engine, recorded) = play(target, &points);
        if recorded > 0 {
            prop_assert_eq!(engine.state().serving(), points[recorded - 1]);
        }
    }

    #[test]
    fn scores_never_exceed_the_ceiling(
        target in arbitrary_target(),
        points in prop::collection::vec(arbitrary_team(), 0..200)
    ) {
        let mut engine = MatchEngine::new();
        engine.start_match(target);
        let ceiling = engine.state().config().ceiling();

        for &team in &points {
            if engine.state().match_over() {
                break;
            }
            engine.record_point(team).unwrap();
            prop_assert!(engine.state().score_a() <= ceiling);
            prop_assert!(engine.state().score_b() <= ceiling);
        }
    }

    #[test]
    fn match_is_over_iff_a_side_holds_two_sets(
        target in arbitrary_target(),
        points in prop::collection::vec(arbitrary_team(), 0..200)
    ) {
        let mut engine = MatchEngine::new();
        engine.start_match(target);

        for &team in &points {
            if engine.state().match_over() {
                break;
            }
            engine.record_point(team).unwrap();

            let state = engine.state();
            let decided = state.sets_a() == 2 || state.sets_b() == 2;
            prop_assert_eq!(state.match_over(), decided);
            prop_assert!(state.sets_a() <= 2 && state.sets_b() <= 2);
        }
    }

    #[test]
    fn history_depth_tracks_points_minus_undos(
        points in prop::collection::vec(arbitrary_team(), 0..60),
        undos in 0..80usize
    ) {
        let (mut engine, recorded) = play(TargetScore::TwentyOne, &points);

        let mut undone = 0;
        for _ in 0..undos {
            if engine.undo() {
                undone += 1;
            }
        }

        prop_assert_eq!(undone, undos.min(recorded));
        prop_assert_eq!(engine.undo_depth(), recorded - undone);
    }

    #[test]
    fn checkpoint_roundtrip_is_behavior_preserving(
        target in arbitrary_target(),
        points in prop::collection::vec(arbitrary_team(), 0..80)
    ) {
        let (mut engine, _) = play(target, &points);

        let json = engine.checkpoint().to_json().unwrap();
        let mut restored =
            MatchEngine::from_checkpoint(Checkpoint::from_json(&json).unwrap()).unwrap();

        prop_assert_eq!(restored.state(), engine.state());

        // Both engines unwind through identical states.
        loop {
            let a = engine.undo();
            let b = restored.undo();
            prop_assert_eq!(a, b);
            if !a {
                break;
            }
            prop_assert_eq!(engine.state(), restored.state());
        }
    }

    #[test]
    fn config_never_changes_during_a_match(
        target in arbitrary_target(),
        points in prop::collection::vec(arbitrary_team(), 0..120)
    ) {
        let mut engine = MatchEngine::new();
        engine.start_match(target);
        let config = engine.state().config();

        for &team in &points {
            if engine.state().match_over() {
                break;
            }
            engine.record_point(team).unwrap();
            prop_assert_eq!(engine.state().config(), config);
        }
    }
}
