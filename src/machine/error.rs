//! Command rejection errors.

use thiserror::Error;

/// Errors that can reject an operator command.
///
/// A rejected command leaves the match state and the point history exactly
/// as they were.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no match in progress; call start_match before recording points")]
    MatchNotStarted,

    #[error("the match is over; no further points can be recorded")]
    MatchAlreadyOver,
}
