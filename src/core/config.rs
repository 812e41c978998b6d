//! Match configuration: teams, scoring presets, and the derived ceiling.
//!
//! Configuration is immutable for the lifetime of a match. Validation
//! happens at the conversion boundary, so a [`MatchConfig`] can only ever
//! hold a supported preset.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Sets a side must win to take the match (best-of-three).
pub const SETS_TO_WIN: u8 = 2;

/// One of the two sides of the net.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Errors raised while configuring a match.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested target score is not one of the supported presets.
    #[error("unsupported target score {points}; expected one of 11, 15, 21")]
    UnsupportedTarget { points: u8 },
}

/// Supported target scores for a set.
///
/// Raw operator input is validated here, via `TryFrom<u8>`; every other
/// value is rejected before a match can start.
///
/// # Example
///
/// ```rust
/// use rallypoint::{ConfigError, TargetScore};
///
/// let target = TargetScore::try_from(15).unwrap();
/// assert_eq!(target.points(), 15);
/// assert_eq!(target.ceiling(), 20);
///
/// assert!(matches!(
///     TargetScore::try_from(13),
///     Err(ConfigError::UnsupportedTarget { points: 13 })
/// ));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TargetScore {
    Eleven,
    Fifteen,
    TwentyOne,
}

impl TargetScore {
    /// Points a side needs (with a two-point margin) to take a set.
    pub fn points(self) -> u8 {
        match self {
            Self::Eleven => 11,
            Self::Fifteen => 15,
            Self::TwentyOne => 21,
        }
    }

    /// Hard cap at which a set ends regardless of margin.
    ///
    /// 30 for the 21-point preset, `points + 5` for the others.
    pub fn ceiling(self) -> u8 {
        match self {
            Self::TwentyOne => 30,
            other => other.points() + 5,
        }
    }
}

impl Default for TargetScore {
    fn default() -> Self {
        Self::TwentyOne
    }
}

impl TryFrom<u8> for TargetScore {
    type Error = ConfigError;

    fn try_from(points: u8) -> Result<Self, Self::Error> {
        match points {
            11 => Ok(Self::Eleven),
            15 => Ok(Self::Fifteen),
            21 => Ok(Self::TwentyOne),
            other => Err(ConfigError::UnsupportedTarget { points: other }),
        }
    }
}

impl fmt::Display for TargetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Immutable per-match configuration.
///
/// Set once when a match starts and never mutated afterwards; the next
/// `start_match` replaces it wholesale.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    target: TargetScore,
}

impl MatchConfig {
    /// Create a configuration for the given preset.
    pub fn new(target: TargetScore) -> Self {
        Self { target }
    }

    /// The preset this match is played to.
    pub fn preset(self) -> TargetScore {
        self.target
    }

    /// Points needed to win a set (with a two-point margin).
    pub fn target(self) -> u8 {
        self.target.points()
    }

    /// Score at which a set ends immediately, margin or not.
    pub fn ceiling(self) -> u8 {
        self.target.ceiling()
    }

    /// Sets needed to win the match.
    pub fn sets_to_win(self) -> u8 {
        SETS_TO_WIN
    }
}
