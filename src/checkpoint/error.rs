//! Checkpoint error types.

use crate::enumerate::OdometerError;
use thiserror::Error;

/// Errors that can occur when saving, loading or resuming a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or binary failed
    #[error("Checkpoint encoding failed: {0}")]
    Encode(String),

    /// Decoding from JSON or binary failed
    #[error("Checkpoint decoding failed: {0}")]
    Decode(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Next tuple has {found} indices, checkpoint length is {expected}")]
    MalformedTuple { expected: usize, found: usize },

    /// Checkpoint was taken from a run with a different combination length
    #[error("Checkpoint length {checkpoint} does not match enumerator length {enumerator}")]
    LengthMismatch { checkpoint: usize, enumerator: usize },

    /// Checkpoint was taken from a run over a different alphabet
    #[error("Checkpoint alphabet does not match enumerator alphabet")]
    AlphabetMismatch,

    /// Emitted count disagrees with the position of the next tuple
    #[error("Emitted count {emitted} does not match the recorded position")]
    PositionMismatch { emitted: u64 },

    #[error("Checkpoint position is invalid: {0}")]
    InvalidPosition(#[from] OdometerError),
}
