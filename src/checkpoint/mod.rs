//! Checkpoint and resume functionality for enumeration runs.
//!
//! A checkpoint records where a run stopped so a later process can continue
//! and produce exactly the lines an uninterrupted run would have produced.

use crate::core::Alphabet;
use crate::enumerate::{rank, Enumerator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable position within an enumeration run.
///
/// # Example
///
/// ```rust
/// use tm_combos::checkpoint::Checkpoint;
/// use tm_combos::enumerate::Enumerator;
///
/// let enumerator = Enumerator::standard();
/// let mut run = enumerator.iter();
/// run.by_ref().take(3).for_each(drop);
///
/// let json = run.checkpoint().to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap();
///
/// let mut resumed = enumerator.resume(&restored).unwrap();
/// assert_eq!(resumed.next(), run.next());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Rendered tokens of the alphabet, in order
    pub alphabet: Vec<String>,

    /// Tokens per combination
    pub length: usize,

    /// Combinations already yielded
    pub emitted: u64,

    /// Index tuple to yield next, `None` once the run is exhausted
    pub next: Option<Vec<usize>>,
}

impl Checkpoint {
    pub fn new(alphabet: &Alphabet, length: usize, emitted: u64, next: Option<Vec<usize>>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            alphabet: alphabet.labels(),
            length,
            emitted,
            next,
        }
    }

    /// Whether the run this checkpoint belongs to has finished.
    pub fn is_complete(&self) -> bool {
        self.next.is_none()
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Deserialize and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    /// Deserialize and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check internal consistency: supported version and a `next` tuple of
    /// the recorded length.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(next) = &self.next {
            if next.len() != self.length {
                return Err(CheckpointError::MalformedTuple {
                    expected: self.length,
                    found: next.len(),
                });
            }
        }

        Ok(())
    }

    /// Check that this checkpoint was taken from a run of `enumerator`.
    pub(crate) fn validate_for(&self, enumerator: &Enumerator) -> Result<(), CheckpointError> {
        self.validate()?;

        if self.length != enumerator.length() {
            return Err(CheckpointError::LengthMismatch {
                checkpoint: self.length,
                enumerator: enumerator.length(),
            });
        }

        if self.alphabet != enumerator.alphabet().labels() {
            return Err(CheckpointError::AlphabetMismatch);
        }

        let expected = match &self.next {
            Some(next) => rank(enumerator.alphabet().len(), next),
            None => Some(enumerator.total()),
        };
        if expected != Some(self.emitted) {
            return Err(CheckpointError::PositionMismatch {
                emitted: self.emitted,
            });
        }

        Ok(())
    }
}
