//! Point history enabling exact rollback.
//!
//! Every recorded point pushes a pre-point snapshot; undo pops from the
//! tail. Entries are value copies, never references into live state, so a
//! pushed snapshot stays valid no matter how the live state mutates later.

use super::config::Team;
use serde::{Deserialize, Serialize};

/// Immutable pre-point image of the scoreboard.
///
/// Captures exactly the fields a point can change: both scores, both set
/// counters, and serve possession. Restoring one of these reverts a single
/// recorded point, including across a set or match boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub score_a: u8,
    pub score_b: u8,
    pub sets_a: u8,
    pub sets_b: u8,
    pub serving: Team,
}

/// Ordered history of pre-point snapshots.
///
/// Append-only during play, pop-from-tail on undo. `push` and `pop` are
/// pure; they return a new history rather than mutating the existing one,
/// so no entry is ever modified after it was recorded.
///
/// # Example
///
/// ```rust
/// use rallypoint::{PointHistory, PointSnapshot, Team};
///
/// let snapshot = PointSnapshot {
///     score_a: 3,
///     score_b: 2,
///     sets_a: 0,
///     sets_b: 0,
///     serving: Team::A,
/// };
///
/// let history = PointHistory::new();
/// let history = history.push(snapshot);
///
/// let (latest, rest) = history.pop().unwrap();
/// assert_eq!(latest, snapshot);
/// assert!(rest.is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointHistory {
    entries: Vec<PointSnapshot>,
}

impl Default for PointHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PointHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a snapshot, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn push(&self, snapshot: PointSnapshot) -> Self {
        let mut entries = self.entries.clone();
        entries.push(snapshot);
        Self { entries }
    }

    /// Split off the most recent snapshot, returning it together with the
    /// remaining history. Returns `None` when there is nothing to undo.
    pub fn pop(&self) -> Option<(PointSnapshot, Self)> {
        let (last, rest) = self.entries.split_last()?;
        Some((
            *last,
            Self {
                entries: rest.to_vec(),
            },
        ))
    }

    /// Number of recorded snapshots, which is also the number of points
    /// that can still be undone.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is anything to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All snapshots in recording order.
    pub fn entries(&self) -> &[PointSnapshot] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(score_a: u8, score_b: u8) -> PointSnapshot {
        PointSnapshot {
            score_a,
            score_b,
            sets_a: 0,
            sets_b: 0,
            serving: Team::A,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = PointHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.pop().is_none());
    }

    #[test]
    fn push_is_pure() {
        let history = PointHistory::new();
        let grown = history.push(snapshot(1, 0));

        assert_eq!(history.len(), 0);
        assert_eq!(grown.len(), 1);
    }

    #[test]
    fn pop_returns_latest_snapshot() {
        let history = PointHistory::new()
            .push(snapshot(0, 0))
            .push(snapshot(1, 0))
            .push(snapshot(1, 1));

        let (latest, rest) = history.pop().unwrap();
        assert_eq!(latest, snapshot(1, 1));
        assert_eq!(rest.len(), 2);

        // The popped-from history is unchanged.
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn entries_preserve_recording_order() {
        let history = PointHistory::new()
            .push(snapshot(0, 0))
            .push(snapshot(0, 1));

        assert_eq!(history.entries(), &[snapshot(0, 0), snapshot(0, 1)]);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = PointHistory::new().push(snapshot(4, 2));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: PointHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.entries(), deserialized.entries());
    }
}
