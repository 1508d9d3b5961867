//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};
use crate::engine::{GuessSession, Row, SessionState};
use colored::{ColoredString, Colorize};

/// Headline describing the pool, as shown above the candidate list
#[must_use]
pub fn status_text(session: &GuessSession) -> String {
    match session.state() {
        SessionState::Solved => "SOLVED".to_string(),
        SessionState::Empty => "NO WORDS MATCH".to_string(),
        SessionState::Exhausted => {
            format!("OUT OF TRIES, {} POSSIBLE WORDS", session.candidates().len())
        }
        SessionState::Active => match session.candidates().len() {
            1 => "1 POSSIBLE WORD".to_string(),
            n => format!("{n} POSSIBLE WORDS"),
        },
    }
}

fn colored_cell(cell: Option<u8>, color: Feedback) -> ColoredString {
    let text = format!(" {} ", cell.map_or(' ', char::from));
    match color {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a row as colored tiles
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.cells()
        .iter()
        .zip(row.colors())
        .map(|(&cell, &color)| colored_cell(cell, color).to_string())
        .collect()
}

/// Lay words out in columns, at most `width` characters per line
#[must_use]
pub fn word_columns(words: &[Word], width: usize) -> Vec<String> {
    let Some(cell_width) = words.iter().map(Word::len).max().map(|w| w + 2) else {
        return Vec::new();
    };
    let per_line = (width / cell_width).max(1);

    words
        .chunks(per_line)
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{:<cell_width$}", w.text()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
