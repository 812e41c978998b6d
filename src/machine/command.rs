//! The command surface consumed by a presentation layer.
//!
//! A scoreboard UI forwards opaque operator input as [`Command`] values and
//! renders the snapshot and event that come back. Commands are plain data,
//! so an input surface can queue, log, or replay them without touching the
//! engine.

use crate::core::{TargetScore, Team};
use serde::{Deserialize, Serialize};

/// An operator command accepted by [`MatchEngine`](crate::MatchEngine).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Hard-reset into a fresh match played to the given target.
    ///
    /// Carries no confirmation semantics; a UI that wants a "really
    /// restart?" dialog owns that exchange itself.
    Start(TargetScore),

    /// Award the current rally's point to a team.
    Point(Team),

    /// Roll back the most recently recorded point.
    Undo,
}
