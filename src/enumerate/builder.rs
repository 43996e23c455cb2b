//! Builder for constructing enumerators.

use super::enumerator::Enumerator;
use super::error::BuildError;
use super::odometer::count_with_replacement;
use crate::core::{Alphabet, COMBINATION_LENGTH};

/// Builder for enumerators with a non-standard alphabet or length.
///
/// Unset fields fall back to the standard alphabet and a length of 8.
///
/// # Example
///
/// ```rust
/// use tm_combos::enumerate::EnumeratorBuilder;
///
/// let enumerator = EnumeratorBuilder::new().length(2).build().unwrap();
/// assert_eq!(enumerator.total(), 210);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnumeratorBuilder {
    alphabet: Option<Alphabet>,
    length: Option<usize>,
}

impl EnumeratorBuilder {
    pub fn new() -> Self {
        Self {
            alphabet: None,
            length: None,
        }
    }

    /// Draw tokens from `alphabet`.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Number of tokens in each combination.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Build the enumerator.
    /// Returns an error if the alphabet is empty, the length is zero, or the
    /// total count does not fit in a `u64`.
    pub fn build(self) -> Result<Enumerator, BuildError> {
        let alphabet = self.alphabet.unwrap_or_else(Alphabet::standard);
        if alphabet.is_empty() {
            return Err(BuildError::EmptyAlphabet);
        }

        let length = self.length.unwrap_or(COMBINATION_LENGTH);
        if length == 0 {
            return Err(BuildError::ZeroLength);
        }

        let total =
            count_with_replacement(alphabet.len(), length).ok_or(BuildError::CountOverflow {
                alphabet_size: alphabet.len(),
                length,
            })?;

        Ok(Enumerator::from_parts(alphabet, length, total))
    }
}
