//! Errors for tokens, alphabets and combinations.

use thiserror::Error;

/// Errors that can occur when parsing a single token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenParseError {
    #[error("Token {token:?} has {found} characters, expected 3")]
    WrongWidth { token: String, found: usize },

    #[error("Token {token:?} has unknown {field} symbol {symbol:?}")]
    UnknownSymbol {
        token: String,
        field: &'static str,
        symbol: char,
    },
}

/// Errors that can occur when building an alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("Token {token} appears at positions {first} and {second}")]
    DuplicateToken {
        token: String,
        first: usize,
        second: usize,
    },
}

/// A single problem found while validating a combination.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CombinationViolation {
    #[error("Expected {expected} tokens, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("Token {token:?} at position {position} is not in the alphabet")]
    UnknownToken { position: usize, token: String },

    #[error("Index {index} at position {position} is outside an alphabet of {alphabet_size}")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        alphabet_size: usize,
    },

    #[error("Index {current} at position {position} is below the previous index {previous}")]
    OutOfOrder {
        position: usize,
        previous: usize,
        current: usize,
    },

    #[error("Token {token} at position {position} disagrees with index {index}")]
    TokenMismatch {
        position: usize,
        index: usize,
        token: String,
    },
}

/// Every violation found in a rejected combination.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid combination: {}", join_violations(.violations))]
pub struct CombinationError {
    pub violations: Vec<CombinationViolation>,
}

fn join_violations(violations: &[CombinationViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
