//! The ordered token alphabet combinations are drawn from.

use super::error::AlphabetError;
use super::part::TokenPart;
use super::token::{Bit, Direction, StateLabel, Token};
use super::ALPHABET_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered list of distinct tokens.
///
/// A token's position in the list is its index; combinations are
/// sequences of such indices.
///
/// # Example
///
/// ```rust
/// use tm_combos::core::Alphabet;
///
/// let alphabet = Alphabet::standard();
/// let first: Vec<String> = alphabet.iter().take(5).map(|t| t.to_string()).collect();
/// assert_eq!(first, ["0LA", "0RA", "1LA", "1RA", "0LB"]);
/// assert_eq!(alphabet.len(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Token>", into = "Vec<Token>")]
pub struct Alphabet {
    tokens: Vec<Token>,
}

impl Alphabet {
    /// The 20-token alphabet: state outermost, then bit, then direction.
    pub fn standard() -> Self {
        let mut tokens = Vec::with_capacity(ALPHABET_SIZE);
        for &state in StateLabel::ALL {
            for &bit in Bit::ALL {
                for &direction in Direction::ALL {
                    tokens.push(Token::new(bit, direction, state));
                }
            }
        }
        Self { tokens }
    }

    /// Build an alphabet from tokens in the given order.
    ///
    /// Returns an error if any token appears twice.
    pub fn new(tokens: Vec<Token>) -> Result<Self, AlphabetError> {
        let mut seen: HashMap<Token, usize> = HashMap::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            if let Some(&first) = seen.get(token) {
                return Err(AlphabetError::DuplicateToken {
                    token: token.to_string(),
                    first,
                    second: position,
                });
            }
            seen.insert(*token, position);
        }
        Ok(Self { tokens })
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the alphabet has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Position of `token`, if present.
    pub fn index_of(&self, token: &Token) -> Option<usize> {
        self.tokens.iter().position(|candidate| candidate == token)
    }

    /// Tokens in index order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the tokens in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Rendered form of every token, in alphabet order.
    pub fn labels(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Token>> for Alphabet {
    type Error = AlphabetError;

    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        Self::new(tokens)
    }
}

impl From<Alphabet> for Vec<Token> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.tokens
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
