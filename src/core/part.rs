//! The `TokenPart` trait shared by the three fields of a transition token.
//!
//! A token is the concatenation of one symbol from each part: the bit
//! written, the head direction, and the next state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One field of a transition token.
///
/// Implementors are small closed enums whose variants each render as a
/// single character. `ALL` lists the variants in declaration order, which is
/// also the order used when the token alphabet is generated.
///
/// # Example
///
/// ```rust
/// use tm_combos::core::{Direction, TokenPart};
///
/// assert_eq!(Direction::Left.symbol(), 'L');
/// assert_eq!(Direction::from_symbol('R'), Some(Direction::Right));
/// assert_eq!(Direction::ALL, &[Direction::Left, Direction::Right]);
/// ```
pub trait TokenPart:
    Copy + Eq + Ord + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The single character this variant renders as.
    fn symbol(&self) -> char;

    /// The variant's name for diagnostics.
    fn name(&self) -> &str;

    /// Look up the variant rendered as `symbol`.
    fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|part| part.symbol() == symbol)
    }
}
