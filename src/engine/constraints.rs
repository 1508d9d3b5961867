//! Turning one colored row into per-letter observations

use super::Row;
use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// One colored cell of a row, as seen from the letter it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub position: usize,
    pub feedback: Feedback,
}

/// The observations of a single row, keyed by letter
///
/// Letters that do not appear in the row have no entry. That is different
/// from a letter that appears with only [`Feedback::Absent`] observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    word_length: usize,
    letters: FxHashMap<u8, Vec<Observation>>,
}

impl ConstraintSet {
    /// Build the constraint set for a complete row
    ///
    /// Observation lists keep the row's left-to-right order.
    ///
    /// # Panics
    /// Panics if the row has an empty cell. Only complete rows can be
    /// filtered on.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        assert!(
            row.is_complete(),
            "cannot build constraints from incomplete row {row}"
        );

        let mut letters: FxHashMap<u8, Vec<Observation>> = FxHashMap::default();
        for (position, (cell, &feedback)) in row.cells().iter().zip(row.colors()).enumerate() {
            if let Some(letter) = *cell {
                letters
                    .entry(letter)
                    .or_default()
                    .push(Observation { position, feedback });
            }
        }

        Self {
            word_length: row.len(),
            letters,
        }
    }

    /// Build the constraint set for `guess` colored with `feedback`
    ///
    /// # Panics
    /// Panics if `feedback` does not have one color per letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Word, parse_feedback};
    /// use wordle_assist::engine::ConstraintSet;
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let constraints = ConstraintSet::from_guess(&guess, &parse_feedback("--G--").unwrap());
    /// assert_eq!(constraints.observations(b'E').len(), 2);
    /// assert!(constraints.observations(b'Z').is_empty());
    /// ```
    #[must_use]
    pub fn from_guess(guess: &Word, feedback: &[Feedback]) -> Self {
        Self::from_row(&Row::from_guess(guess, feedback))
    }

    /// Length of the row these constraints came from
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Observations for `letter`, empty if the row did not contain it
    #[must_use]
    pub fn observations(&self, letter: u8) -> &[Observation] {
        self.letters.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Iterate over each distinct letter with its observations
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[Observation])> {
        self.letters.iter().map(|(&l, obs)| (l, obs.as_slice()))
    }

    /// Number of distinct letters observed
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_feedback;

    fn constraints(guess: &str, pattern: &str) -> ConstraintSet {
        ConstraintSet::from_guess(&Word::new(guess).unwrap(), &parse_feedback(pattern).unwrap())
    }

    #[test]
    fn one_entry_per_distinct_letter() {
        let set = constraints("speed", "Y-G--");

        assert_eq!(set.letter_count(), 4);
        assert_eq!(set.word_length(), 5);
        assert_eq!(
            set.observations(b'S'),
            &[Observation {
                position: 0,
                feedback: Feedback::Present
            }]
        );
    }

    #[test]
    fn repeated_letter_keeps_row_order() {
        let set = constraints("speed", "--G--");

        assert_eq!(
            set.observations(b'E'),
            &[
                Observation {
                    position: 2,
                    feedback: Feedback::Correct
                },
                Observation {
                    position: 3,
                    feedback: Feedback::Absent
                },
            ]
        );
    }

    #[test]
    fn missing_letter_has_no_observations() {
        let set = constraints("crane", "-----");
        assert!(set.observations(b'Z').is_empty());
        // Absent letters still get an entry
        assert_eq!(set.observations(b'C').len(), 1);
    }

    #[test]
    fn every_set_carries_its_row_length() {
        let set = constraints("crane", "-----");
        assert_eq!(set.word_length(), 5);
        assert_eq!(set.letter_count(), 5);

        let pool = [Word::new("tough").unwrap(), Word::new("slate").unwrap()];
        let left = crate::engine::filter(&pool, &set);
        assert_eq!(left, [Word::new("tough").unwrap()]);
    }

    #[test]
    fn same_row_same_constraints() {
        assert_eq!(constraints("abbey", "GGYGG"), constraints("abbey", "GGYGG"));
        assert_ne!(constraints("abbey", "GGYGG"), constraints("abbey", "GG-GG"));
    }

    #[test]
    fn from_row_matches_from_guess() {
        let word = Word::new("robot").unwrap();
        let colors = parse_feedback("YY-G-").unwrap();
        let row = Row::from_guess(&word, &colors);
        assert_eq!(
            ConstraintSet::from_row(&row),
            ConstraintSet::from_guess(&word, &colors)
        );
    }

    #[test]
    #[should_panic(expected = "incomplete row")]
    fn incomplete_row_panics() {
        let mut row = Row::new(5);
        row.push_letter(b'A');
        let _ = ConstraintSet::from_row(&row);
    }

    #[test]
    #[should_panic(expected = "one color per letter")]
    fn color_count_mismatch_panics() {
        let _ = ConstraintSet::from_guess(
            &Word::new("crane").unwrap(),
            &parse_feedback("GGG").unwrap(),
        );
    }
}
