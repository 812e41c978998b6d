//! Rallypoint: a rally-point match scoring engine
//!
//! Rallypoint keeps the authoritative score of a two-team, best-of-three
//! match under rally-point rules (badminton-style: serve always follows the
//! scorer, sets go to a target score with a two-point margin, capped at a
//! hard ceiling). The scoring rules are pure functions with no side effects;
//! mutation and event emission live in the [`MatchEngine`] shell.
//!
//! # Core Concepts
//!
//! - **MatchState**: one cohesive value object holding scores, set tally,
//!   serve possession, and match phase; consumers read snapshots, never
//!   individual mutable fields
//! - **Rules**: pure predicates deciding set and match completion
//! - **History**: append-only pre-point snapshots that make [`MatchEngine::undo`]
//!   an exact inverse of every recorded point
//!
//! # Example
//!
//! ```rust
//! use rallypoint::{MatchEngine, TargetScore, Team};
//!
//! let mut engine = MatchEngine::new();
//! engine.start_match(TargetScore::TwentyOne);
//!
//! engine.record_point(Team::B).unwrap();
//! assert_eq!(engine.state().score_b(), 1);
//! assert_eq!(engine.state().serving(), Team::B);
//!
//! // Undo is the exact inverse of the point, serve included.
//! engine.undo();
//! assert_eq!(engine.state().score_b(), 0);
//! assert_eq!(engine.state().serving(), Team::A);
//! ```

pub mod checkpoint;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::checkpoint::{Checkpoint, CheckpointError, MatchMetadata};
pub use crate::core::{
    ConfigError, MatchConfig, MatchEvent, MatchPhase, MatchState, PointHistory, PointSnapshot,
    TargetScore, Team,
};
pub use crate::machine::{Command, CommandError, MatchEngine};
