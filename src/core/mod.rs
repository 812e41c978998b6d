//! Core scoring types and logic.
//!
//! This module contains the pure functional core of the scorekeeper:
//! - Match configuration and team identity
//! - Win predicates for set and match completion
//! - The cohesive `MatchState` value object and its point transition
//! - Immutable point history for exact rollback
//!
//! All logic in this module is pure (no side effects); mutation and event
//! emission happen in the `machine` shell.

mod config;
mod history;
mod rules;
mod state;

pub use config::{ConfigError, MatchConfig, TargetScore, Team, SETS_TO_WIN};
pub use history::{PointHistory, PointSnapshot};
pub use rules::{match_won, set_won};
pub use state::{MatchEvent, MatchPhase, MatchState};
