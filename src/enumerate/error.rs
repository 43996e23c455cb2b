//! Errors for building and positioning enumerators.

use thiserror::Error;

/// Errors that can occur when building an enumerator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Alphabet is empty. Provide at least one token")]
    EmptyAlphabet,

    #[error("Combination length is zero. Call .length(k) with k > 0")]
    ZeroLength,

    #[error("{alphabet_size} tokens taken {length} at a time overflows a u64 count")]
    CountOverflow { alphabet_size: usize, length: usize },
}

/// Errors that can occur when positioning an odometer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OdometerError {
    #[error("Expected {expected} indices, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("Index {index} at position {position} is outside an alphabet of {alphabet_size}")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        alphabet_size: usize,
    },

    #[error("Index at position {position} is below the one before it")]
    Decreasing { position: usize },

    #[error("Position {position} is past the end of a {total}-combination run")]
    PositionOutOfRange { position: u64, total: u64 },
}
