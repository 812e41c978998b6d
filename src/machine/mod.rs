//! The imperative shell executing operator commands against the pure core.
//!
//! # Key Concepts
//!
//! - **MatchEngine**: owns the authoritative state/history pair and applies
//!   commands one at a time
//! - **Commands**: plain-data operator input (start, point, undo)
//! - **Events**: set/match conclusions emitted for the presentation layer
//!   to announce; the engine schedules no timers of its own

mod command;
mod engine;
mod error;

pub use command::Command;
pub use engine::MatchEngine;
pub use error::CommandError;
