//! tm-combos: combinations with replacement of Turing machine transition tokens
//!
//! A transition token such as `1RB` names the bit a rule writes, the
//! direction the head moves, and the state entered next. With two bits, two
//! directions and the states `A`–`D` plus halt `H`, there are 20 tokens.
//! This crate enumerates every multiset of 8 of them, C(27, 8) = 2,220,075
//! combinations, in canonical combinations-with-replacement order.
//!
//! # Core Concepts
//!
//! - **Token**: a typed `<bit><direction><state>` triple, see [`core::Token`]
//! - **Alphabet**: the fixed ordered token list, see [`core::Alphabet`]
//! - **Combination**: tokens with non-decreasing alphabet indices
//! - **Enumerator**: lazy, restartable iteration with checkpoints
//!
//! # Example
//!
//! ```rust
//! use tm_combos::Enumerator;
//!
//! let enumerator = Enumerator::standard();
//! let lines: Vec<String> = enumerator.iter().take(3).map(|c| c.to_string()).collect();
//!
//! assert_eq!(lines[0], "0LA 0LA 0LA 0LA 0LA 0LA 0LA 0LA");
//! assert_eq!(lines[1], "0LA 0LA 0LA 0LA 0LA 0LA 0LA 0RA");
//! assert_eq!(lines[2], "0LA 0LA 0LA 0LA 0LA 0LA 0LA 1LA");
//! ```

pub mod checkpoint;
pub mod core;
pub mod enumerate;
pub mod output;

// Re-export commonly used types
pub use checkpoint::Checkpoint;
pub use self::core::{Alphabet, Combination, Token};
pub use enumerate::{Combinations, Enumerator, EnumeratorBuilder};
pub use output::{write_enumeration, EmitSummary, OutputError};
