//! Combinations with replacement over an alphabet.
//!
//! Validation uses Stillwater's `Validation` so a rejected line reports
//! every problem at once instead of only the first.

use super::alphabet::Alphabet;
use super::error::{CombinationError, CombinationViolation};
use super::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a combination, carrying all violations on failure.
pub type CombinationValidation = Validation<Combination, NonEmptyVec<CombinationViolation>>;

type Check = Validation<(), NonEmptyVec<CombinationViolation>>;

/// A sequence of tokens whose alphabet indices never decrease.
///
/// # Example
///
/// ```rust
/// use tm_combos::core::{Alphabet, Combination};
///
/// let alphabet = Alphabet::standard();
/// let combination = Combination::parse_line("0LA 0LA 1RB 1RH", &alphabet, 4).unwrap();
///
/// assert_eq!(combination.indices(), &[0, 0, 7, 19]);
/// assert_eq!(combination.to_string(), "0LA 0LA 1RB 1RH");
///
/// // Decreasing indices are rejected.
/// assert!(Combination::parse_line("1RH 0LA", &alphabet, 2).is_err());
/// ```
///
/// Deserialization has no alphabet to check against, so it checks the
/// record's own consistency: the indices never decrease and each index
/// always pairs with the same token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CombinationRecord")]
pub struct Combination {
    indices: Vec<usize>,
    tokens: Vec<Token>,
}

/// Unchecked serialized form of a [`Combination`].
#[derive(Deserialize)]
struct CombinationRecord {
    indices: Vec<usize>,
    tokens: Vec<Token>,
}

impl Combination {
    /// Build a combination from alphabet indices.
    ///
    /// Fails if any index is outside the alphabet or the indices decrease.
    pub fn from_indices(alphabet: &Alphabet, indices: &[usize]) -> Result<Self, CombinationError> {
        let mut checks: Vec<Check> = indices
            .iter()
            .enumerate()
            .map(|(position, &index)| -> Check {
                if index < alphabet.len() {
                    Validation::success(())
                } else {
                    Validation::fail(CombinationViolation::IndexOutOfRange {
                        position,
                        index,
                        alphabet_size: alphabet.len(),
                    })
                }
            })
            .collect();
        checks.extend(ordering_checks(indices.iter().copied().map(Some)));

        let owned = indices.to_vec();
        into_result(Validation::all_vec(checks).map(move |_| Self::from_sorted(alphabet, owned)))
    }

    /// Validate a space-separated line against `alphabet`, expecting
    /// exactly `length` tokens.
    pub fn validate_line(line: &str, alphabet: &Alphabet, length: usize) -> CombinationValidation {
        let trimmed = line.trim();
        let words: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split(' ').collect()
        };

        let mut checks: Vec<Check> = Vec::new();

        if words.len() != length {
            checks.push(Validation::fail(CombinationViolation::WrongLength {
                expected: length,
                found: words.len(),
            }));
        }

        let resolved: Vec<Option<usize>> = words
            .iter()
            .map(|word| {
                word.parse::<Token>()
                    .ok()
                    .and_then(|token| alphabet.index_of(&token))
            })
            .collect();

        for (position, (word, index)) in words.iter().zip(&resolved).enumerate() {
            if index.is_none() {
                checks.push(Validation::fail(CombinationViolation::UnknownToken {
                    position,
                    token: (*word).to_string(),
                }));
            }
        }

        checks.extend(ordering_checks(resolved.iter().copied()));

        Validation::all_vec(checks).map(move |_| {
            let indices: Vec<usize> = resolved.into_iter().flatten().collect();
            Self::from_sorted(alphabet, indices)
        })
    }

    /// Parse a space-separated line, collecting every violation on failure.
    pub fn parse_line(
        line: &str,
        alphabet: &Alphabet,
        length: usize,
    ) -> Result<Self, CombinationError> {
        into_result(Self::validate_line(line, alphabet, length))
    }

    /// Build from indices already known to be in range and non-decreasing.
    pub(crate) fn from_sorted(alphabet: &Alphabet, indices: Vec<usize>) -> Self {
        let tokens = indices.iter().map(|&index| alphabet.tokens()[index]).collect();
        Self { indices, tokens }
    }

    /// Alphabet indices, non-decreasing.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Tokens in the same order as [`Self::indices`].
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens that enter the halt state.
    pub fn halting_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_halting()).count()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, token) in self.tokens.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl TryFrom<CombinationRecord> for Combination {
    type Error = CombinationError;

    fn try_from(record: CombinationRecord) -> Result<Self, Self::Error> {
        let CombinationRecord { indices, tokens } = record;
        let mut checks: Vec<Check> = Vec::new();

        if tokens.len() != indices.len() {
            checks.push(Validation::fail(CombinationViolation::WrongLength {
                expected: indices.len(),
                found: tokens.len(),
            }));
        }

        checks.extend(ordering_checks(indices.iter().copied().map(Some)));
        checks.extend(pairing_checks(&indices, &tokens));

        into_result(Validation::all_vec(checks).map(move |_| Self { indices, tokens }))
    }
}

/// One check per position that its index and token agree with every
/// earlier pairing.
fn pairing_checks(indices: &[usize], tokens: &[Token]) -> Vec<Check> {
    let mut by_index: HashMap<usize, Token> = HashMap::new();
    let mut by_token: HashMap<Token, usize> = HashMap::new();

    indices
        .iter()
        .zip(tokens)
        .enumerate()
        .map(|(position, (&index, &token))| -> Check {
            let known_token = *by_index.entry(index).or_insert(token);
            let known_index = *by_token.entry(token).or_insert(index);
            if known_token == token && known_index == index {
                Validation::success(())
            } else {
                Validation::fail(CombinationViolation::TokenMismatch {
                    position,
                    index,
                    token: token.to_string(),
                })
            }
        })
        .collect()
}

/// One check per known index against the last known index before it.
/// Unknown entries are skipped.
fn ordering_checks(indices: impl Iterator<Item = Option<usize>>) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut previous: Option<usize> = None;
    for (position, current) in indices.enumerate() {
        match (previous, current) {
            (Some(prev), Some(cur)) if cur < prev => {
                checks.push(Validation::fail(CombinationViolation::OutOfOrder {
                    position,
                    previous: prev,
                    current: cur,
                }));
            }
            _ => checks.push(Validation::success(())),
        }
        if current.is_some() {
            previous = current;
        }
    }
    checks
}

fn into_result(validation: CombinationValidation) -> Result<Combination, CombinationError> {
    match validation {
        Validation::Success(combination) => Ok(combination),
        Validation::Failure(violations) => Err(CombinationError {
            violations: violations.iter().cloned().collect(),
        }),
    }
}
