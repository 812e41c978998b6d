//! Checkpoint and resume support.
//!
//! A checkpoint serializes the match state and the point history *together*,
//! so an undo performed after a restore behaves exactly as it would have
//! before the process went away. Restores are validated against the match
//! invariants before an engine is rebuilt from them.

use crate::core::{MatchPhase, MatchState, PointHistory, SETS_TO_WIN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Bookkeeping tracked by the engine alongside the match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchMetadata {
    /// When the engine was created
    pub created_at: DateTime<Utc>,

    /// Last command time
    pub updated_at: DateTime<Utc>,

    /// Total points recorded across the match. Monotone; undo does not
    /// decrement it.
    pub points_recorded: usize,
}

impl Default for MatchMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            points_recorded: 0,
        }
    }
}

impl MatchMetadata {
    /// Stamp the record with the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Serializable checkpoint of a match engine.
///
/// Carries the full `MatchState` + `PointHistory` pair; persisting one
/// without the other would leave undo inconsistent across restarts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was captured
    pub captured_at: DateTime<Utc>,

    /// The authoritative match state
    pub state: MatchState,

    /// The undo history, entry-for-entry
    pub history: PointHistory,

    /// Engine bookkeeping
    pub metadata: MatchMetadata,
}

impl Checkpoint {
    /// Build a checkpoint around the given state/history pair.
    pub fn capture(state: MatchState, history: PointHistory, metadata: MatchMetadata) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            captured_at: Utc::now(),
            state,
            history,
            metadata,
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the format version and the match state invariants.
    ///
    /// Rejects data that no reachable engine state could produce: scores
    /// past the ceiling, set counters past the match, a terminal phase
    /// without the sets to justify it, or history entries recorded from a
    /// finished match.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let state = &self.state;
        let ceiling = state.config().ceiling();

        if state.score_a() > ceiling || state.score_b() > ceiling {
            return Err(CheckpointError::ValidationFailed(format!(
                "scores {}-{} exceed the ceiling {}",
                state.score_a(),
                state.score_b(),
                ceiling
            )));
        }

        if state.sets_a() > SETS_TO_WIN || state.sets_b() > SETS_TO_WIN {
            return Err(CheckpointError::ValidationFailed(format!(
                "set tally {}-{} exceeds a best-of-three match",
                state.sets_a(),
                state.sets_b()
            )));
        }

        let decided = state.sets_a() == SETS_TO_WIN || state.sets_b() == SETS_TO_WIN;
        match state.phase() {
            MatchPhase::MatchOver if !decided => {
                return Err(CheckpointError::ValidationFailed(
                    "phase is MatchOver but neither side holds two sets".into(),
                ));
            }
            MatchPhase::NotStarted | MatchPhase::InProgress if decided => {
                return Err(CheckpointError::ValidationFailed(
                    "a side holds two sets but the phase is not MatchOver".into(),
                ));
            }
            MatchPhase::NotStarted
                if !self.history.is_empty()
                    || state.score_a() > 0
                    || state.score_b() > 0
                    || state.sets_a() > 0
                    || state.sets_b() > 0 =>
            {
                return Err(CheckpointError::ValidationFailed(
                    "scores or history recorded before the match started".into(),
                ));
            }
            _ => {}
        }

        for entry in self.history.entries() {
            if entry.sets_a >= SETS_TO_WIN || entry.sets_b >= SETS_TO_WIN {
                return Err(CheckpointError::ValidationFailed(
                    "history contains a snapshot taken after the match ended".into(),
                ));
            }
        }

        Ok(())
    }
}
