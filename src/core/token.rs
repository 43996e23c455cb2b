//! Transition tokens.
//!
//! A token such as `1RB` names one transition rule: the bit to write, the
//! direction to move the head, and the state to enter next.

use super::error::TokenParseError;
use super::part::TokenPart;
use crate::token_part;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

token_part! {
    /// Tape bit written by a transition.
    pub enum Bit {
        Zero = '0',
        One = '1',
    }
}

token_part! {
    /// Head movement after a write.
    pub enum Direction {
        Left = 'L',
        Right = 'R',
    }
}

token_part! {
    /// Next machine state. `H` is the halt state.
    pub enum StateLabel {
        A = 'A',
        B = 'B',
        C = 'C',
        D = 'D',
        H = 'H',
    }
}

impl StateLabel {
    /// Whether entering this state halts the machine.
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::H)
    }
}

/// A single transition token, rendered as `<bit><direction><state>`.
///
/// # Example
///
/// ```rust
/// use tm_combos::core::{Bit, Direction, StateLabel, Token};
///
/// let token: Token = "1RB".parse().unwrap();
/// assert_eq!(token, Token::new(Bit::One, Direction::Right, StateLabel::B));
/// assert_eq!(token.to_string(), "1RB");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token {
    pub bit: Bit,
    pub direction: Direction,
    pub state: StateLabel,
}

impl Token {
    /// Rendered width of every token.
    pub const WIDTH: usize = 3;

    /// Build a token from its three parts.
    pub const fn new(bit: Bit, direction: Direction, state: StateLabel) -> Self {
        Self {
            bit,
            direction,
            state,
        }
    }

    /// Whether this transition enters the halt state.
    pub fn is_halting(&self) -> bool {
        self.state.is_halt()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.bit, self.direction, self.state)
    }
}

impl FromStr for Token {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(bit), Some(direction), Some(state), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(TokenParseError::WrongWidth {
                token: s.to_string(),
                found: s.chars().count(),
            });
        };

        Ok(Self {
            bit: part(s, "bit", bit)?,
            direction: part(s, "direction", direction)?,
            state: part(s, "state", state)?,
        })
    }
}

impl TryFrom<String> for Token {
    type Error = TokenParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

fn part<P: TokenPart>(token: &str, field: &'static str, symbol: char) -> Result<P, TokenParseError> {
    P::from_symbol(symbol).ok_or_else(|| TokenParseError::UnknownSymbol {
        token: token.to_string(),
        field,
        symbol,
    })
}
