//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while capturing or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or binary failed.
    #[error("checkpoint encoding failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or binary failed.
    #[error("checkpoint decoding failed: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible format version.
    #[error("unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded data violates the match state invariants.
    #[error("checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
