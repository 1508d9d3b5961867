//! One-shot filtering command
//!
//! Applies `WORD=PATTERN` rows to a fresh session, in order.

use crate::core::{Feedback, Word, WordError, feedback_to_pattern, parse_feedback};
use crate::engine::{GuessSession, SessionError, SessionState};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A guess with the colors it received, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow {
    pub guess: Word,
    pub colors: Vec<Feedback>,
}

/// Error type for malformed `WORD=PATTERN` arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("expected WORD=PATTERN, got '{0}'")]
    MissingSeparator(String),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("'{0}' is not a color pattern (use G, Y and -)")]
    Pattern(String),
    #[error("{guess} has {letters} letters but {colors} colors")]
    ColorCount {
        guess: String,
        letters: usize,
        colors: usize,
    },
}

impl FromStr for FeedbackRow {
    type Err = RowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, pattern) = s
            .split_once('=')
            .ok_or_else(|| RowParseError::MissingSeparator(s.to_string()))?;
        let guess = Word::new(word)?;
        let colors =
            parse_feedback(pattern).ok_or_else(|| RowParseError::Pattern(pattern.to_string()))?;
        if colors.len() != guess.len() {
            return Err(RowParseError::ColorCount {
                guess: guess.text().to_string(),
                letters: guess.len(),
                colors: colors.len(),
            });
        }
        Ok(Self { guess, colors })
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.guess, feedback_to_pattern(&self.colors))
    }
}

/// A row the session refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row} ({text}): {source}")]
pub struct ApplyError {
    /// One-based position on the command line
    pub row: usize,
    pub text: String,
    pub source: SessionError,
}

/// Submit `rows` to `session` one after another
///
/// # Errors
/// Returns `ApplyError` for the first row the session rejects, such as a
/// word of the wrong length or a row given after the game ended.
pub fn apply_rows(
    session: &mut GuessSession,
    rows: &[FeedbackRow],
) -> Result<SessionState, ApplyError> {
    for (index, row) in rows.iter().enumerate() {
        submit(session, row).map_err(|source| ApplyError {
            row: index + 1,
            text: row.to_string(),
            source,
        })?;
        debug!(row = %row, remaining = session.candidates().len(), "applied row");
    }
    Ok(session.state())
}

fn submit(session: &mut GuessSession, row: &FeedbackRow) -> Result<SessionState, SessionError> {
    session.select_word(&row.guess)?;
    for (position, &color) in row.colors.iter().enumerate() {
        session.set_cell_color(position, color)?;
    }
    session.submit_row()
}
