//! Token combinations drawn from an alphabet.

use super::builder::EnumeratorBuilder;
use super::error::OdometerError;
use super::odometer::{rank, unrank, IndexOdometer};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{
    Alphabet, Combination, CombinationError, CombinationValidation, COMBINATION_LENGTH,
    TOTAL_COMBINATIONS,
};
use std::iter::FusedIterator;
use tracing::debug;

/// Every combination with replacement of a fixed length over an alphabet.
///
/// The enumerator itself holds no cursor; `iter` and the `resume` methods
/// hand out independent [`Combinations`] iterators, so a run can be
/// repeated any number of times with identical results.
///
/// # Example
///
/// ```rust
/// use tm_combos::enumerate::Enumerator;
///
/// let enumerator = Enumerator::standard();
/// let mut combinations = enumerator.iter();
///
/// let first = combinations.next().unwrap();
/// assert_eq!(first.to_string(), "0LA 0LA 0LA 0LA 0LA 0LA 0LA 0LA");
/// assert_eq!(enumerator.total(), 2_220_075);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumerator {
    alphabet: Alphabet,
    length: usize,
    total: u64,
}

impl Enumerator {
    /// The 20-token alphabet taken 8 at a time.
    pub fn standard() -> Self {
        Self {
            alphabet: Alphabet::standard(),
            length: COMBINATION_LENGTH,
            total: TOTAL_COMBINATIONS,
        }
    }

    /// Start building an enumerator with a custom alphabet or length.
    pub fn builder() -> EnumeratorBuilder {
        EnumeratorBuilder::new()
    }

    pub(crate) fn from_parts(alphabet: Alphabet, length: usize, total: u64) -> Self {
        Self {
            alphabet,
            length,
            total,
        }
    }

    /// Alphabet combinations are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Tokens per combination.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of combinations a full run yields.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate from the first combination.
    pub fn iter(&self) -> Combinations<'_> {
        let odometer = IndexOdometer::new(self.alphabet.len(), self.length);
        Combinations::new(self, odometer, 0)
    }

    /// Iterate starting at the combination with zero-based index `position`.
    ///
    /// `position == total()` gives an exhausted cursor.
    pub fn iter_from(&self, position: u64) -> Result<Combinations<'_>, OdometerError> {
        let n = self.alphabet.len();
        if position == self.total {
            let odometer = IndexOdometer::exhausted(n, self.length);
            return Ok(Combinations::new(self, odometer, position));
        }

        let indices =
            unrank(n, self.length, position).ok_or(OdometerError::PositionOutOfRange {
                position,
                total: self.total,
            })?;
        let odometer = IndexOdometer::starting_at(n, indices)?;
        Ok(Combinations::new(self, odometer, position))
    }

    /// Continue a run from a checkpoint taken by [`Combinations::checkpoint`].
    pub fn resume(&self, checkpoint: &Checkpoint) -> Result<Combinations<'_>, CheckpointError> {
        checkpoint.validate_for(self)?;

        let odometer = match &checkpoint.next {
            Some(next) => IndexOdometer::starting_at(self.alphabet.len(), next.clone())?,
            None => IndexOdometer::exhausted(self.alphabet.len(), self.length),
        };

        debug!(
            checkpoint = %checkpoint.id,
            emitted = checkpoint.emitted,
            "resuming enumeration from checkpoint"
        );
        Ok(Combinations::new(self, odometer, checkpoint.emitted))
    }

    /// Continue a run with the combination that follows `last`.
    pub fn resume_after(&self, last: &Combination) -> Result<Combinations<'_>, OdometerError> {
        if last.len() != self.length {
            return Err(OdometerError::WrongLength {
                expected: self.length,
                found: last.len(),
            });
        }

        let n = self.alphabet.len();
        let mut odometer = IndexOdometer::starting_at(n, last.indices().to_vec())?;
        odometer.advance();

        let emitted = rank(n, last.indices()).map_or(self.total, |position| position + 1);
        debug!(after = %last, emitted, "resuming enumeration after combination");
        Ok(Combinations::new(self, odometer, emitted))
    }

    /// Validate one output line, collecting every violation.
    pub fn validate_line(&self, line: &str) -> CombinationValidation {
        Combination::validate_line(line, &self.alphabet, self.length)
    }

    /// Parse one output line back into a combination.
    pub fn parse_line(&self, line: &str) -> Result<Combination, CombinationError> {
        Combination::parse_line(line, &self.alphabet, self.length)
    }
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Enumerator {
    type Item = Combination;
    type IntoIter = Combinations<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A cursor over an [`Enumerator`]'s combinations.
#[derive(Clone, Debug)]
pub struct Combinations<'a> {
    enumerator: &'a Enumerator,
    odometer: IndexOdometer,
    emitted: u64,
}

impl<'a> Combinations<'a> {
    fn new(enumerator: &'a Enumerator, odometer: IndexOdometer, emitted: u64) -> Self {
        Self {
            enumerator,
            odometer,
            emitted,
        }
    }

    pub fn enumerator(&self) -> &'a Enumerator {
        self.enumerator
    }

    /// Combinations yielded so far, counting any before a resume point.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Combinations still to be yielded.
    pub fn remaining(&self) -> u64 {
        self.enumerator.total.saturating_sub(self.emitted)
    }

    /// Advance and lend the next index tuple without building a
    /// [`Combination`].
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        let indices = self.odometer.advance()?;
        self.emitted += 1;
        Some(indices)
    }

    /// Move the cursor so the next combination yielded is the one at
    /// zero-based index `position`.
    pub fn seek(&mut self, position: u64) -> Result<(), OdometerError> {
        let enumerator = self.enumerator;
        *self = enumerator.iter_from(position)?;
        Ok(())
    }

    /// Capture the current position so a later run can pick up from here.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(
            &self.enumerator.alphabet,
            self.enumerator.length,
            self.emitted,
            self.odometer.peek_next(),
        )
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let enumerator = self.enumerator;
        self.next_indices()
            .map(|indices| Combination::from_sorted(&enumerator.alphabet, indices.to_vec()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    fn small() -> Enumerator {
        let tokens: Vec<Token> = ["0LA", "1RB", "1LH"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        Enumerator::builder()
            .alphabet(Alphabet::new(tokens).unwrap())
            .length(2)
            .build()
            .unwrap()
    }

    #[test]
    fn small_enumeration_is_lexicographic() {
        let lines: Vec<String> = small().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            lines,
            [
                "0LA 0LA", "0LA 1RB", "0LA 1LH", "1RB 1RB", "1RB 1LH", "1LH 1LH"
            ]
        );
    }

    #[test]
    fn standard_first_and_last() {
        let enumerator = Enumerator::standard();
        let first = enumerator.iter().next().unwrap();
        assert_eq!(first.to_string(), "0LA 0LA 0LA 0LA 0LA 0LA 0LA 0LA");

        let last = Combination::from_indices(enumerator.alphabet(), &[19; 8]).unwrap();
        assert_eq!(last.to_string(), "1RH 1RH 1RH 1RH 1RH 1RH 1RH 1RH");
        let mut after = enumerator.resume_after(&last).unwrap();
        assert_eq!(after.next(), None);
        assert_eq!(after.emitted(), TOTAL_COMBINATIONS);
    }

    #[test]
    fn iter_is_restartable() {
        let enumerator = small();
        let first: Vec<Combination> = enumerator.iter().collect();
        let second: Vec<Combination> = enumerator.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len() as u64, enumerator.total());
    }

    #[test]
    fn size_hint_tracks_remaining() {
        let enumerator = small();
        let mut combinations = enumerator.iter();
        assert_eq!(combinations.size_hint(), (6, Some(6)));
        combinations.next();
        combinations.next();
        assert_eq!(combinations.size_hint(), (4, Some(4)));
        assert_eq!(combinations.emitted(), 2);
    }

    #[test]
    fn resume_after_yields_the_tail() {
        let enumerator = small();
        let all: Vec<Combination> = enumerator.iter().collect();

        for (position, combination) in all.iter().enumerate() {
            let tail: Vec<Combination> = enumerator.resume_after(combination).unwrap().collect();
            assert_eq!(tail, all[position + 1..]);
        }
    }

    #[test]
    fn resume_after_counts_prior_combinations() {
        let enumerator = Enumerator::standard();
        let combination = enumerator.parse_line("0LA 0LA 0LA 0LA 0LA 0LA 0LA 0RA").unwrap();
        let resumed = enumerator.resume_after(&combination).unwrap();
        assert_eq!(resumed.emitted(), 2);
        assert_eq!(resumed.remaining(), TOTAL_COMBINATIONS - 2);
    }

    #[test]
    fn resume_after_rejects_wrong_length() {
        let enumerator = Enumerator::standard();
        let short = Combination::from_indices(enumerator.alphabet(), &[0, 1]).unwrap();
        assert_eq!(
            enumerator.resume_after(&short).unwrap_err(),
            OdometerError::WrongLength {
                expected: 8,
                found: 2
            }
        );
    }

    #[test]
    fn resume_from_checkpoint_yields_the_tail() {
        let enumerator = small();
        let all: Vec<Combination> = enumerator.iter().collect();

        for taken in 0..=all.len() {
            let mut combinations = enumerator.iter();
            for _ in 0..taken {
                combinations.next();
            }
            let checkpoint = combinations.checkpoint();
            assert_eq!(checkpoint.emitted, taken as u64);

            let tail: Vec<Combination> = enumerator.resume(&checkpoint).unwrap().collect();
            assert_eq!(tail, all[taken..]);
        }
    }

    #[test]
    fn iter_from_yields_the_tail() {
        let enumerator = small();
        let all: Vec<Combination> = enumerator.iter().collect();

        for position in 0..=all.len() {
            let combinations = enumerator.iter_from(position as u64).unwrap();
            assert_eq!(combinations.emitted(), position as u64);
            let tail: Vec<Combination> = combinations.collect();
            assert_eq!(tail, all[position..]);
        }
    }

    #[test]
    fn iter_from_rejects_positions_past_the_end() {
        let enumerator = small();
        assert_eq!(
            enumerator.iter_from(7).unwrap_err(),
            OdometerError::PositionOutOfRange {
                position: 7,
                total: 6
            }
        );
    }

    #[test]
    fn seek_moves_backwards_and_forwards() {
        let enumerator = Enumerator::standard();
        let mut combinations = enumerator.iter();
        for _ in 0..10 {
            combinations.next();
        }

        combinations.seek(3).unwrap();
        assert_eq!(combinations.emitted(), 3);
        assert_eq!(
            combinations.next().map(|c| c.indices().to_vec()),
            Some(vec![0, 0, 0, 0, 0, 0, 0, 3])
        );

        combinations.seek(TOTAL_COMBINATIONS).unwrap();
        assert_eq!(combinations.next(), None);
        assert!(combinations.checkpoint().is_complete());
    }

    #[test]
    fn resume_rejects_checkpoint_from_other_shape() {
        let checkpoint = small().iter().checkpoint();
        assert!(matches!(
            Enumerator::standard().resume(&checkpoint),
            Err(CheckpointError::LengthMismatch {
                checkpoint: 2,
                enumerator: 8
            })
        ));

        let other_alphabet = Enumerator::builder().length(2).build().unwrap();
        assert!(matches!(
            other_alphabet.resume(&checkpoint),
            Err(CheckpointError::AlphabetMismatch)
        ));
    }

    #[test]
    fn parse_line_round_trips_enumerated_lines() {
        let enumerator = Enumerator::standard();
        for combination in enumerator.iter().step_by(97_001) {
            let parsed = enumerator.parse_line(&combination.to_string()).unwrap();
            assert_eq!(parsed, combination);
        }
    }
}
