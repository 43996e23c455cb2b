//! Non-decreasing index tuples in lexicographic order.
//!
//! The odometer holds one tuple and steps it in place: find the rightmost
//! position that can still grow, bump it, and copy the new value over every
//! position to its right.

use super::error::OdometerError;
use std::iter::FusedIterator;

/// Number of non-decreasing `k`-tuples over `n` values, C(n + k - 1, k).
///
/// Returns `None` if the count does not fit in a `u64`.
///
/// # Example
///
/// ```rust
/// use tm_combos::enumerate::count_with_replacement;
///
/// assert_eq!(count_with_replacement(20, 8), Some(2_220_075));
/// assert_eq!(count_with_replacement(3, 0), Some(1));
/// assert_eq!(count_with_replacement(0, 2), Some(0));
/// ```
pub fn count_with_replacement(n: usize, k: usize) -> Option<u64> {
    if k == 0 {
        return Some(1);
    }
    if n == 0 {
        return Some(0);
    }
    let top = (n as u128).checked_add(k as u128)? - 1;
    let r = (k as u128).min(n as u128 - 1);
    let mut result: u128 = 1;
    for i in 1..=r {
        result = result.checked_mul(top - r + i)? / i;
    }
    u64::try_from(result).ok()
}

/// Zero-based position of `indices` among all non-decreasing tuples of the
/// same length over `n` values.
///
/// Returns `None` if an index is outside `0..n`, the indices decrease, or
/// the position does not fit in a `u64`.
pub fn rank(n: usize, indices: &[usize]) -> Option<u64> {
    let k = indices.len();
    let mut rank: u64 = 0;
    let mut floor = 0;
    for (position, &index) in indices.iter().enumerate() {
        if index >= n || index < floor {
            return None;
        }
        let remaining = k - position - 1;
        for value in floor..index {
            rank = rank.checked_add(count_with_replacement(n - value, remaining)?)?;
        }
        floor = index;
    }
    Some(rank)
}

/// The non-decreasing `k`-tuple over `0..n` at zero-based `position`.
///
/// Inverse of [`rank`]. Returns `None` if `position` is past the last tuple.
///
/// # Example
///
/// ```rust
/// use tm_combos::enumerate::{rank, unrank};
///
/// assert_eq!(unrank(3, 2, 3), Some(vec![1, 1]));
/// assert_eq!(rank(3, &[1, 1]), Some(3));
/// assert_eq!(unrank(3, 2, 6), None);
/// ```
pub fn unrank(n: usize, k: usize, position: u64) -> Option<Vec<usize>> {
    if position >= count_with_replacement(n, k)? {
        return None;
    }
    let mut left = position;
    let mut indices = Vec::with_capacity(k);
    let mut value = 0;
    for slot in 0..k {
        let remaining = k - slot - 1;
        loop {
            let block = count_with_replacement(n - value, remaining)?;
            if left < block {
                break;
            }
            left -= block;
            value += 1;
        }
        indices.push(value);
    }
    Some(indices)
}

/// Steps through every non-decreasing `k`-tuple over `0..n`.
///
/// `advance` lends the current tuple without allocating; the `Iterator`
/// impl yields owned copies.
///
/// # Example
///
/// ```rust
/// use tm_combos::enumerate::IndexOdometer;
///
/// let tuples: Vec<Vec<usize>> = IndexOdometer::new(3, 2).collect();
/// assert_eq!(
///     tuples,
///     vec![
///         vec![0, 0], vec![0, 1], vec![0, 2],
///         vec![1, 1], vec![1, 2],
///         vec![2, 2],
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct IndexOdometer {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl IndexOdometer {
    /// Start at the all-zero tuple.
    ///
    /// A zero-length odometer yields one empty tuple. An odometer over no
    /// values with non-zero length yields nothing.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: vec![0; k],
            started: false,
            done: n == 0 && k > 0,
        }
    }

    /// Start at `indices`, which is the next tuple to be yielded.
    pub fn starting_at(n: usize, indices: Vec<usize>) -> Result<Self, OdometerError> {
        for (position, &index) in indices.iter().enumerate() {
            if index >= n {
                return Err(OdometerError::IndexOutOfRange {
                    position,
                    index,
                    alphabet_size: n,
                });
            }
            if position > 0 && index < indices[position - 1] {
                return Err(OdometerError::Decreasing { position });
            }
        }
        Ok(Self {
            n,
            indices,
            started: false,
            done: false,
        })
    }

    /// An odometer that yields nothing.
    pub fn exhausted(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: vec![0; k],
            started: true,
            done: true,
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.n
    }

    pub fn length(&self) -> usize {
        self.indices.len()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Move to the next tuple and lend it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.as_slice());
        }
        if Self::step(self.n, &mut self.indices) {
            Some(self.indices.as_slice())
        } else {
            self.done = true;
            None
        }
    }

    /// The tuple the next `advance` will yield, without moving.
    pub fn peek_next(&self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let mut next = self.indices.clone();
        if !self.started || Self::step(self.n, &mut next) {
            Some(next)
        } else {
            None
        }
    }

    fn step(n: usize, indices: &mut [usize]) -> bool {
        match indices.iter().rposition(|&index| index + 1 < n) {
            Some(position) => {
                let next = indices[position] + 1;
                for slot in &mut indices[position..] {
                    *slot = next;
                }
                true
            }
            None => false,
        }
    }
}

impl Iterator for IndexOdometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}

impl FusedIterator for IndexOdometer {}
