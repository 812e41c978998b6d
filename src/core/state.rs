//! The authoritative match state and its pure point transition.
//!
//! `MatchState` is a single value object; consumers read whole snapshots
//! instead of subscribing to individual fields, so the set tally, serve and
//! match phase can never be observed mid-update.

use super::config::{MatchConfig, Team};
use super::history::PointSnapshot;
use super::rules;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a match.
///
/// `NotStarted → InProgress → MatchOver`; the next `start_match` resets a
/// terminal match back to `InProgress`. Set completion is computed
/// synchronously from the scores, so no per-set sub-phase is persisted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MatchPhase {
    NotStarted,
    InProgress,
    MatchOver,
}

impl MatchPhase {
    /// The phase's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::InProgress => "InProgress",
            Self::MatchOver => "MatchOver",
        }
    }

    /// Whether this phase is terminal for the current match.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::MatchOver)
    }
}

/// Conclusion reached by a recorded point.
///
/// Emitted alongside the updated state so a presentation layer can announce
/// the result; any announcement delay is the presentation layer's business,
/// the state itself is already final when the event is produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MatchEvent {
    /// The scorer took the set; the next set starts at 0-0.
    SetWon(Team),
    /// The scorer took the set and with it the match.
    MatchWon(Team),
}

/// The authoritative record of one match.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    score_a: u8,
    score_b: u8,
    sets_a: u8,
    sets_b: u8,
    serving: Team,
    phase: MatchPhase,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::not_started()
    }
}

impl MatchState {
    /// Idle pre-match state: default preset, nothing scored, team A to
    /// serve once play begins.
    pub fn not_started() -> Self {
        Self {
            config: MatchConfig::default(),
            score_a: 0,
            score_b: 0,
            sets_a: 0,
            sets_b: 0,
            serving: Team::A,
            phase: MatchPhase::NotStarted,
        }
    }

    /// Fresh state at the first rally of a match.
    pub fn new_match(config: MatchConfig) -> Self {
        Self {
            config,
            score_a: 0,
            score_b: 0,
            sets_a: 0,
            sets_b: 0,
            serving: Team::A,
            phase: MatchPhase::InProgress,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> MatchConfig {
        self.config
    }

    /// Team A's points in the current set.
    pub fn score_a(&self) -> u8 {
        self.score_a
    }

    /// Team B's points in the current set.
    pub fn score_b(&self) -> u8 {
        self.score_b
    }

    /// Points held by the given team in the current set.
    pub fn score(&self, team: Team) -> u8 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }

    /// Sets won by team A.
    pub fn sets_a(&self) -> u8 {
        self.sets_a
    }

    /// Sets won by team B.
    pub fn sets_b(&self) -> u8 {
        self.sets_b
    }

    /// Sets won by the given team.
    pub fn sets(&self, team: Team) -> u8 {
        match team {
            Team::A => self.sets_a,
            Team::B => self.sets_b,
        }
    }

    /// The side currently holding serve.
    pub fn serving(&self) -> Team {
        self.serving
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Whether the match has concluded.
    pub fn match_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Pre-point image of the five fields a point can change.
    pub fn snapshot(&self) -> PointSnapshot {
        PointSnapshot {
            score_a: self.score_a,
            score_b: self.score_b,
            sets_a: self.sets_a,
            sets_b: self.sets_b,
            serving: self.serving,
        }
    }

    /// Apply one rally point for `team`, returning the next state and the
    /// conclusion it produced, if any.
    ///
    /// Pure; the receiver is unchanged. Callers must only apply points to
    /// an in-progress state; the engine enforces that before calling here.
    ///
    /// The scorer's total increments, serve moves to the scorer, and the
    /// set-win rule is evaluated. A non-final set win increments the set
    /// tally and resets both scores; the match-clinching set win also
    /// increments the tally but leaves the final scores visible.
    pub fn with_point(&self, team: Team) -> (Self, Option<MatchEvent>) {
        let mut next = self.clone();

        match team {
            Team::A => next.score_a += 1,
            Team::B => next.score_b += 1,
        }
        next.serving = team;

        let scorer = next.score(team);
        let opponent = next.score(team.opponent());
        if !rules::set_won(scorer, opponent, self.config) {
            return (next, None);
        }

        let sets = match team {
            Team::A => {
                next.sets_a += 1;
                next.sets_a
            }
            Team::B => {
                next.sets_b += 1;
                next.sets_b
            }
        };

        if rules::match_won(sets, self.config) {
            next.phase = MatchPhase::MatchOver;
            (next, Some(MatchEvent::MatchWon(team)))
        } else {
            next.score_a = 0;
            next.score_b = 0;
            (next, Some(MatchEvent::SetWon(team)))
        }
    }

    /// Rebuild the state as it was when `snapshot` was taken.
    ///
    /// The phase is recomputed from the restored set counters rather than
    /// carried over, so undoing the match-winning point reverts a terminal
    /// match to `InProgress`. The configuration is untouched.
    pub fn restored(&self, snapshot: &PointSnapshot) -> Self {
        let mut prev = self.clone();
        prev.score_a = snapshot.score_a;
        prev.score_b = snapshot.score_b;
        prev.sets_a = snapshot.sets_a;
        prev.sets_b = snapshot.sets_b;
        prev.serving = snapshot.serving;
        prev.phase = if rules::match_won(prev.sets_a, prev.config)
            || rules::match_won(prev.sets_b, prev.config)
        {
            MatchPhase::MatchOver
        } else {
            MatchPhase::InProgress
        };
        prev
    }
}
