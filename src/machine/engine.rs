//! The match engine: imperative shell around the pure scoring core.

use crate::checkpoint::{Checkpoint, CheckpointError, MatchMetadata};
use crate::core::{
    MatchConfig, MatchEvent, MatchPhase, MatchState, PointHistory, TargetScore, Team,
};
use crate::machine::command::Command;
use crate::machine::error::CommandError;
use tracing::{debug, info};

/// Owns the authoritative [`MatchState`] / [`PointHistory`] pair and
/// executes operator commands against it.
///
/// Single-writer by design: commands are discrete, fully synchronous, and
/// must be issued one at a time. No command leaves the state violating the
/// scoring invariants, on the success or the error path.
pub struct MatchEngine {
    state: MatchState,
    history: PointHistory,
    metadata: MatchMetadata,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Create an idle engine with nothing scored and no match running.
    pub fn new() -> Self {
        Self {
            state: MatchState::not_started(),
            history: PointHistory::new(),
            metadata: MatchMetadata::default(),
        }
    }

    /// Current state snapshot (pure). Readable after every command.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Points that can still be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Engine bookkeeping (pure).
    pub fn metadata(&self) -> &MatchMetadata {
        &self.metadata
    }

    /// Begin a fresh match played to `target`.
    ///
    /// A hard reset: scores, set tally, and serve go back to their initial
    /// values, the history is cleared, and the previous configuration is
    /// replaced. Valid in every phase, including mid-match.
    pub fn start_match(&mut self, target: TargetScore) {
        let config = MatchConfig::new(target);
        self.state = MatchState::new_match(config);
        self.history = PointHistory::new();
        self.metadata.touch();
        info!(
            target_score = config.target(),
            ceiling = config.ceiling(),
            "match started"
        );
    }

    /// Record a rally point for `team`.
    ///
    /// Pushes the pre-point snapshot, applies the pure point transition,
    /// and returns the conclusion event when the point ended a set or the
    /// match. Rejected without side effects when no match is running.
    pub fn record_point(&mut self, team: Team) -> Result<Option<MatchEvent>, CommandError> {
        match self.state.phase() {
            MatchPhase::NotStarted => Err(CommandError::MatchNotStarted),
            MatchPhase::MatchOver => Err(CommandError::MatchAlreadyOver),
            MatchPhase::InProgress => {
                self.history = self.history.push(self.state.snapshot());
                let (next, event) = self.state.with_point(team);
                self.state = next;
                self.metadata.points_recorded += 1;
                self.metadata.touch();

                match event {
                    None => debug!(
                        %team,
                        score_a = self.state.score_a(),
                        score_b = self.state.score_b(),
                        "point recorded"
                    ),
                    Some(MatchEvent::SetWon(winner)) => info!(
                        %winner,
                        sets_a = self.state.sets_a(),
                        sets_b = self.state.sets_b(),
                        "set won"
                    ),
                    Some(MatchEvent::MatchWon(winner)) => info!(%winner, "match won"),
                }

                Ok(event)
            }
        }
    }

    /// Roll back the most recently recorded point.
    ///
    /// Restores the pre-point snapshot exactly, serve included, and
    /// recomputes the phase, so undoing the match-winning point
    /// reopens the match. Returns `false` (a safe no-op) when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some((snapshot, remaining)) = self.history.pop() else {
            return false;
        };
        self.state = self.state.restored(&snapshot);
        self.history = remaining;
        self.metadata.touch();
        debug!(depth = self.history.len(), "point undone");
        true
    }

    /// Execute one command, returning the conclusion event if the command
    /// produced one.
    pub fn dispatch(&mut self, command: Command) -> Result<Option<MatchEvent>, CommandError> {
        match command {
            Command::Start(target) => {
                self.start_match(target);
                Ok(None)
            }
            Command::Point(team) => self.record_point(team),
            Command::Undo => {
                self.undo();
                Ok(None)
            }
        }
    }

    /// Capture the full engine (state, history, and bookkeeping) for
    /// persistence.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(
            self.state.clone(),
            self.history.clone(),
            self.metadata.clone(),
        )
    }

    /// Rebuild an engine from a checkpoint, validating it first.
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        Ok(Self {
            state: checkpoint.state,
            history: checkpoint.history,
            metadata: checkpoint.metadata,
        })
    }
}
