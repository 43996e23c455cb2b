//! Enumeration of combinations with replacement.
//!
//! [`IndexOdometer`] produces non-decreasing index tuples in lexicographic
//! order; [`Enumerator`] maps them onto an alphabet and hands out resumable
//! [`Combinations`] cursors.

pub mod builder;
pub mod enumerator;
pub mod error;
pub mod odometer;

pub use builder::EnumeratorBuilder;
pub use enumerator::{Combinations, Enumerator};
pub use error::{BuildError, OdometerError};
pub use odometer::{count_with_replacement, rank, unrank, IndexOdometer};
