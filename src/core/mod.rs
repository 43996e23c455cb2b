//! Core token and combination types.
//!
//! This module contains the pure value types of the crate:
//! - Token parts via the `TokenPart` trait
//! - Transition tokens and the ordered alphabet they form
//! - Validated combinations with replacement over that alphabet
//!
//! Nothing in this module performs I/O.

mod alphabet;
mod combination;
mod error;
mod macros;
mod part;
mod token;

pub use alphabet::Alphabet;
pub use combination::{Combination, CombinationValidation};
pub use error::{AlphabetError, CombinationError, CombinationViolation, TokenParseError};
pub use part::TokenPart;
pub use token::{Bit, Direction, StateLabel, Token};

/// Number of tokens in the standard alphabet.
pub const ALPHABET_SIZE: usize = 20;

/// Number of tokens in each emitted combination.
pub const COMBINATION_LENGTH: usize = 8;

/// Number of combinations with replacement of the standard shape, C(27, 8).
pub const TOTAL_COMBINATIONS: u64 = 2_220_075;
