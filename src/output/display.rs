//! Display functions for the line-based front ends

use super::formatters::{colored_row, status_text, word_columns};
use crate::core::feedback_to_emoji;
use crate::engine::{GuessSession, SessionState};
use colored::Colorize;
use std::io::{self, Write};

/// Line width used when listing candidates
pub const LIST_WIDTH: usize = 70;

/// Write the rows entered so far, one colored line each
///
/// # Errors
/// Returns any error from `out`.
pub fn write_rows<W: Write>(out: &mut W, session: &GuessSession) -> io::Result<()> {
    for (i, row) in session.rows().iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        writeln!(out, "  {}. {}", (i + 1).to_string().bright_black(), colored_row(row))?;
    }
    Ok(())
}

/// Write the status headline and up to `limit` candidates
///
/// # Errors
/// Returns any error from `out`.
pub fn write_candidates<W: Write>(
    out: &mut W,
    session: &GuessSession,
    limit: Option<usize>,
) -> io::Result<()> {
    let status = status_text(session);
    let headline = match session.state() {
        SessionState::Solved => status.green().bold(),
        SessionState::Empty | SessionState::Exhausted => status.red().bold(),
        SessionState::Active => status.cyan().bold(),
    };
    writeln!(out, "\n{headline}")?;

    let candidates = session.candidates();
    let shown = limit.map_or(candidates.len(), |l| l.min(candidates.len()));
    for line in word_columns(&candidates[..shown], LIST_WIDTH) {
        writeln!(out, "  {line}")?;
    }
    if shown < candidates.len() {
        writeln!(
            out,
            "  {}",
            format!("... and {} more", candidates.len() - shown).bright_black()
        )?;
    }
    Ok(())
}

/// Write the submitted rows as an emoji summary with pool sizes
///
/// # Errors
/// Returns any error from `out`.
pub fn write_history<W: Write>(out: &mut W, session: &GuessSession) -> io::Result<()> {
    for entry in session.history() {
        writeln!(
            out,
            "  {}. {} {}  {} → {}",
            entry.row_index + 1,
            entry.guess.text().bright_white().bold(),
            feedback_to_emoji(&entry.colors),
            entry.candidates_before,
            entry.candidates_after
        )?;
    }
    Ok(())
}

/// Print a finished or in-progress session to stdout
///
/// # Errors
/// Returns any error from writing to stdout.
pub fn print_session(session: &GuessSession, limit: Option<usize>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_session(&mut out, session, limit)
}

/// Write the history followed by the candidate list
///
/// # Errors
/// Returns any error from `out`.
pub fn write_session<W: Write>(
    out: &mut W,
    session: &GuessSession,
    limit: Option<usize>,
) -> io::Result<()> {
    write_history(out, session)?;
    write_candidates(out, session, limit)
}
