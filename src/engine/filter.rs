//! Narrowing a candidate pool with one row's constraints
//!
//! Each observed letter compiles to a [`LetterRule`]:
//!
//! - Correct at `i`: the letter must be at `i`
//! - Present at `i`: the letter must not be at `i`, and must appear at least
//!   once per Correct/Present mark it received in the row
//! - Absent at `i`: the letter must not be at `i`, and the count of Correct
//!   and Present marks becomes an exact count (zero if there are none)
//!
//! The last rule is what keeps repeated letters honest: guessing SPEED
//! with the first E green and the second gray means "exactly one E", not
//! "no E".

use super::{ConstraintSet, Observation};
use crate::core::{Feedback, Word};
use rayon::prelude::*;

/// Everything one row says about a single letter
#[derive(Debug, Clone, PartialEq, Eq)]
struct LetterRule {
    letter: u8,
    /// Positions that must hold the letter
    here: Vec<usize>,
    /// Positions that must not hold the letter
    not_here: Vec<usize>,
    /// Minimum number of copies
    min_count: usize,
    /// Whether `min_count` is also the maximum
    exact: bool,
}

impl LetterRule {
    fn compile(letter: u8, observations: &[Observation], word_length: usize) -> Self {
        let mut rule = Self {
            letter,
            here: Vec::new(),
            not_here: Vec::new(),
            min_count: 0,
            exact: false,
        };

        for obs in observations {
            assert!(
                obs.position < word_length,
                "observation of {} at position {} is outside a {word_length}-letter word",
                char::from(letter),
                obs.position
            );
            match obs.feedback {
                Feedback::Correct => {
                    rule.here.push(obs.position);
                    rule.min_count += 1;
                }
                Feedback::Present => {
                    rule.not_here.push(obs.position);
                    rule.min_count += 1;
                }
                Feedback::Absent => {
                    rule.not_here.push(obs.position);
                    rule.exact = true;
                }
            }
        }

        rule
    }

    fn is_satisfied_by(&self, letters: &[u8]) -> bool {
        if self.here.iter().any(|&i| letters[i] != self.letter) {
            return false;
        }
        if self.not_here.iter().any(|&i| letters[i] == self.letter) {
            return false;
        }

        let count = letters.iter().filter(|&&b| b == self.letter).count();
        if self.exact {
            count == self.min_count
        } else {
            count >= self.min_count
        }
    }
}

/// A constraint set compiled once and checked against many words
struct CompiledConstraints {
    word_length: usize,
    rules: Vec<LetterRule>,
}

impl CompiledConstraints {
    fn new(constraints: &ConstraintSet) -> Self {
        let word_length = constraints.word_length();
        let mut rules: Vec<LetterRule> = constraints
            .iter()
            .map(|(letter, obs)| LetterRule::compile(letter, obs, word_length))
            .collect();
        // Cheapest rejections first: fixed positions, then exclusions
        rules.sort_by_key(|r| (r.here.is_empty(), r.min_count == 0 && !r.exact, r.letter));
        Self { word_length, rules }
    }

    fn matches(&self, word: &Word) -> bool {
        assert_eq!(
            word.len(),
            self.word_length,
            "candidate {word} does not match the {}-letter constraints",
            self.word_length
        );
        let letters = word.letters();
        self.rules.iter().all(|rule| rule.is_satisfied_by(letters))
    }
}

impl ConstraintSet {
    /// Returns `true` iff `word` is consistent with every observation
    ///
    /// # Panics
    /// Panics if `word` has a different length than the row.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Word, parse_feedback};
    /// use wordle_assist::engine::ConstraintSet;
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let c = ConstraintSet::from_guess(&guess, &parse_feedback("--G--").unwrap());
    ///
    /// assert!(c.is_satisfied_by(&Word::new("their").unwrap()));
    /// assert!(!c.is_satisfied_by(&Word::new("theme").unwrap())); // two E's
    /// ```
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        CompiledConstraints::new(self).matches(word)
    }
}

/// Keep the words of `pool` consistent with `constraints`
///
/// The result keeps the order of `pool`. Filtering an empty pool yields an
/// empty pool.
///
/// # Panics
/// Panics if a candidate's length differs from the constraint row's length,
/// or an observation lies outside the word.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Word, parse_feedback};
/// use wordle_assist::engine::{ConstraintSet, filter};
///
/// let pool: Vec<Word> = ["ocean", "theme", "their", "ahead"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let c = ConstraintSet::from_guess(&Word::new("speed").unwrap(), &parse_feedback("--G--").unwrap());
///
/// let left = filter(&pool, &c);
/// let remaining: Vec<&str> = left.iter().map(Word::text).collect();
/// assert_eq!(remaining, ["OCEAN", "THEIR"]);
/// ```
#[must_use]
pub fn filter(pool: &[Word], constraints: &ConstraintSet) -> Vec<Word> {
    let compiled = CompiledConstraints::new(constraints);
    pool.par_iter()
        .filter(|word| compiled.matches(word))
        .cloned()
        .collect()
}
