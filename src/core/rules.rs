//! Pure predicates deciding set and match completion.
//!
//! These functions are the only place the win conditions are written down.
//! They are deterministic and side-effect free, so every transition in the
//! engine can be checked without mocking anything.

use super::config::MatchConfig;

/// Whether the side that just scored has won the current set.
///
/// `scorer` is the scoring side's new total, `opponent` the other side's
/// total. A set ends when the scorer reaches the target with a two-point
/// margin, or immediately upon hitting the ceiling, a hard cutoff that
/// ends an otherwise unbounded deuce.
///
/// # Example
///
/// ```rust
/// use rallypoint::core::{set_won, MatchConfig};
///
/// let config = MatchConfig::default(); // to 21, ceiling 30
///
/// assert!(set_won(21, 19, config));  // margin of two at the target
/// assert!(!set_won(21, 20, config)); // deuce, play on
/// assert!(set_won(30, 29, config));  // ceiling overrides the margin
/// ```
pub fn set_won(scorer: u8, opponent: u8, config: MatchConfig) -> bool {
    (scorer >= config.target() && scorer.saturating_sub(opponent) >= 2)
        || scorer == config.ceiling()
}

/// Whether a side holding `sets` set wins has won the match.
pub fn match_won(sets: u8, config: MatchConfig) -> bool {
    sets >= config.sets_to_win()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TargetScore;

    fn to_21() -> MatchConfig {
        MatchConfig::new(TargetScore::TwentyOne)
    }

    #[test]
    fn no_win_below_target_even_with_margin() {
        assert!(!set_won(5, 0, to_21()));
        assert!(!set_won(20, 3, to_21()));
    }

    #[test]
    fn margin_win_at_target() {
        assert!(set_won(21, 19, to_21()));
        assert!(set_won(21, 0, to_21()));
    }

    #[test]
    fn deuce_requires_two_point_margin() {
        assert!(!set_won(21, 20, to_21()));
        assert!(!set_won(25, 24, to_21()));
        assert!(set_won(25, 23, to_21()));
    }

    #[test]
    fn ceiling_ends_set_without_margin() {
        assert!(set_won(30, 29, to_21()));

        let to_11 = MatchConfig::new(TargetScore::Eleven);
        assert!(set_won(16, 15, to_11));
        assert!(!set_won(15, 14, to_11));
    }

    #[test]
    fn match_needs_two_sets() {
        assert!(!match_won(0, to_21()));
        assert!(!match_won(1, to_21()));
        assert!(match_won(2, to_21()));
    }
}
