//! Guess session state machine
//!
//! A session owns the rows typed so far and the candidate pool. Completing
//! and submitting a row narrows the pool with that row's constraints:
//!
//! ```text
//! Active --submit--> Active     (more than one candidate left, rows to spare)
//!        --submit--> Solved     (exactly one candidate left)
//!        --submit--> Empty      (no candidate left)
//!        --submit--> Exhausted  (last row used, still ambiguous)
//! any    --reset---> Active
//! ```
//!
//! Every mutating call returns a `Result`. A rejected call leaves the session
//! untouched, so front ends are free to ignore the error.

use super::{ConstraintSet, Row, filter};
use crate::core::{Dictionary, Feedback, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::{debug, info};

/// Shape of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Letters per word
    pub word_length: usize,
    /// Rows available, including the one auto-filled on a solve
    pub num_tries: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            num_tries: 6,
        }
    }
}

/// Error type for sessions that cannot be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("number of tries must be at least 1")]
    NoTries,
    #[error("session expects {expected}-letter words but the dictionary has {actual}-letter words")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Why a session operation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the game is over, reset to start again")]
    GameOver,
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("the current row is full")]
    RowFull,
    #[error("the current row is empty")]
    RowEmpty,
    #[error("fill every cell before submitting")]
    RowIncomplete,
    #[error("position {position} is outside a {word_length}-letter row")]
    PositionOutOfRange { position: usize, word_length: usize },
    #[error("'{word}' has {actual} letters, expected {expected}")]
    WrongLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("no candidates remain")]
    NoCandidates,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting input on the current row
    Active,
    /// Narrowed to exactly one word
    Solved,
    /// The feedback so far matches no dictionary word
    Empty,
    /// Every row was used and more than one candidate remains
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Pool sizes around one submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedRow {
    pub row_index: usize,
    pub guess: Word,
    pub colors: Vec<Feedback>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// One interactive narrowing session over a fixed dictionary
#[derive(Debug, Clone)]
pub struct GuessSession {
    config: SessionConfig,
    dictionary: Dictionary,
    rows: Vec<Row>,
    row_index: usize,
    pool: Vec<Word>,
    state: SessionState,
    history: Vec<SubmittedRow>,
    solution: Option<Word>,
}

impl GuessSession {
    /// Start a session over `dictionary`
    ///
    /// # Errors
    /// Returns `ConfigError` if `num_tries` is zero or the dictionary's word
    /// length differs from `config.word_length`.
    pub fn new(config: SessionConfig, dictionary: Dictionary) -> Result<Self, ConfigError> {
        if config.num_tries == 0 {
            return Err(ConfigError::NoTries);
        }
        if dictionary.word_length() != config.word_length {
            return Err(ConfigError::LengthMismatch {
                expected: config.word_length,
                actual: dictionary.word_length(),
            });
        }

        Ok(Self::start(config, dictionary))
    }

    /// Start a session with the default number of tries and the
    /// dictionary's own word length
    #[must_use]
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        let config = SessionConfig {
            word_length: dictionary.word_length(),
            ..SessionConfig::default()
        };
        Self::start(config, dictionary)
    }

    fn start(config: SessionConfig, dictionary: Dictionary) -> Self {
        Self {
            rows: vec![Row::new(config.word_length)],
            row_index: 0,
            pool: dictionary.words().to_vec(),
            state: SessionState::Active,
            history: Vec::new(),
            solution: None,
            config,
            dictionary,
        }
    }

    // ---- Read access ----------------------------------------------------

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Rows created so far; the last one is the current row
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn current_row(&self) -> &Row {
        &self.rows[self.row_index]
    }

    #[must_use]
    pub const fn current_row_index(&self) -> usize {
        self.row_index
    }

    /// Remaining candidates, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn solved(&self) -> bool {
        self.state.is_solved()
    }

    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The word the session narrowed down to, once solved
    #[must_use]
    pub const fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    /// Submitted rows with the pool size before and after each
    #[must_use]
    pub fn history(&self) -> &[SubmittedRow] {
        &self.history
    }

    // ---- Row editing ----------------------------------------------------

    /// Type `letter` into the first empty cell of the current row
    ///
    /// # Errors
    /// `GameOver`, `InvalidLetter` for anything but an ASCII letter, or
    /// `RowFull`.
    pub fn edit_cell(&mut self, letter: char) -> Result<(), SessionError> {
        self.ensure_active()?;
        let letter = normalize_letter(letter)?;
        if self.current_row_mut().push_letter(letter) {
            Ok(())
        } else {
            Err(SessionError::RowFull)
        }
    }

    /// Overwrite the cell at `position` of the current row
    ///
    /// # Errors
    /// `GameOver`, `InvalidLetter`, or `PositionOutOfRange`.
    pub fn edit_cell_at(&mut self, position: usize, letter: char) -> Result<(), SessionError> {
        self.ensure_active()?;
        let letter = normalize_letter(letter)?;
        self.check_position(position)?;
        self.current_row_mut().set_letter(position, letter);
        Ok(())
    }

    /// Clear the rightmost filled cell of the current row
    ///
    /// # Errors
    /// `GameOver` or `RowEmpty`.
    pub fn delete_cell(&mut self) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.current_row_mut()
            .pop_letter()
            .map(|_| ())
            .ok_or(SessionError::RowEmpty)
    }

    /// Record the color of a cell on the current row
    ///
    /// The row does not need to be complete.
    ///
    /// # Errors
    /// `GameOver` or `PositionOutOfRange`.
    pub fn set_cell_color(&mut self, position: usize, color: Feedback) -> Result<(), SessionError> {
        self.ensure_active()?;
        self.check_position(position)?;
        self.current_row_mut().set_color(position, color);
        Ok(())
    }

    /// Advance a cell's color gray → yellow → green → gray, returning the new color
    ///
    /// # Errors
    /// `GameOver` or `PositionOutOfRange`.
    pub fn cycle_cell_color(&mut self, position: usize) -> Result<Feedback, SessionError> {
        self.ensure_active()?;
        self.check_position(position)?;
        let next = self.current_row().colors()[position].cycle();
        self.current_row_mut().set_color(position, next);
        Ok(next)
    }

    /// Fill the current row with `word`, replacing whatever was typed
    ///
    /// Colors are kept and nothing is filtered.
    ///
    /// # Errors
    /// `GameOver` or `WrongLength`.
    pub fn select_word(&mut self, word: &Word) -> Result<(), SessionError> {
        self.ensure_active()?;
        if word.len() != self.config.word_length {
            return Err(SessionError::WrongLength {
                word: word.text().to_string(),
                expected: self.config.word_length,
                actual: word.len(),
            });
        }
        self.current_row_mut().fill(word);
        Ok(())
    }

    /// Select a remaining candidate drawn uniformly with `rng`
    ///
    /// # Errors
    /// `GameOver` or `NoCandidates`.
    pub fn choose_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Word, SessionError> {
        self.ensure_active()?;
        let word = self
            .pool
            .choose(rng)
            .cloned()
            .ok_or(SessionError::NoCandidates)?;
        self.select_word(&word)?;
        Ok(word)
    }

    // ---- Transitions ----------------------------------------------------

    /// Filter the pool with the current row and move the session forward
    ///
    /// Returns the state the session ends up in.
    ///
    /// # Errors
    /// `GameOver` or `RowIncomplete`. The pool is untouched in both cases.
    pub fn submit_row(&mut self) -> Result<SessionState, SessionError> {
        self.ensure_active()?;
        let row = self.current_row();
        let Some(guess) = row.word() else {
            return Err(SessionError::RowIncomplete);
        };
        let colors = row.colors().to_vec();
        let constraints = ConstraintSet::from_row(row);

        let candidates_before = self.pool.len();
        self.pool = filter(&self.pool, &constraints);
        let candidates_after = self.pool.len();
        debug!(
            row = self.row_index,
            guess = %guess,
            candidates_before,
            candidates_after,
            "filtered candidates"
        );
        self.history.push(SubmittedRow {
            row_index: self.row_index,
            guess,
            colors,
            candidates_before,
            candidates_after,
        });

        let on_last_row = self.row_index + 1 >= self.config.num_tries;
        self.state = match candidates_after {
            0 => SessionState::Empty,
            1 => {
                let word = self.pool[0].clone();
                // The solved word goes on a fresh row when one is left
                if !on_last_row {
                    self.add_row();
                    let row = self.current_row_mut();
                    row.fill(&word);
                    row.fill_colors(Feedback::Correct);
                }
                self.solution = Some(word);
                SessionState::Solved
            }
            _ if on_last_row => SessionState::Exhausted,
            _ => {
                self.add_row();
                SessionState::Active
            }
        };

        if self.state.is_game_over() {
            info!(
                state = ?self.state,
                rows = self.history.len(),
                solution = ?self.solution.as_ref().map(Word::text),
                "session finished"
            );
        }
        Ok(self.state)
    }

    /// Start over with the full dictionary
    pub fn reset(&mut self) {
        self.rows = vec![Row::new(self.config.word_length)];
        self.row_index = 0;
        self.pool = self.dictionary.words().to_vec();
        self.state = SessionState::Active;
        self.history.clear();
        self.solution = None;
        info!(candidates = self.pool.len(), "session reset");
    }

    // ---- Helpers --------------------------------------------------------

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.state.is_game_over() {
            return Err(SessionError::GameOver);
        }
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<(), SessionError> {
        if position >= self.config.word_length {
            return Err(SessionError::PositionOutOfRange {
                position,
                word_length: self.config.word_length,
            });
        }
        Ok(())
    }

    fn current_row_mut(&mut self) -> &mut Row {
        &mut self.rows[self.row_index]
    }

    fn add_row(&mut self) {
        debug_assert!(self.row_index + 1 < self.config.num_tries);
        self.rows.push(Row::new(self.config.word_length));
        self.row_index += 1;
    }
}

fn normalize_letter(letter: char) -> Result<u8, SessionError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter.to_ascii_uppercase() as u8)
    } else {
        Err(SessionError::InvalidLetter(letter))
    }
}
