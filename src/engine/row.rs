//! One guess row: letter cells plus their feedback colors

use crate::core::{Feedback, Word};
use std::fmt;

/// A fixed-length guess row
///
/// Cells start empty and colors start as [`Feedback::Absent`]. The two
/// vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<u8>>,
    colors: Vec<Feedback>,
}

impl Row {
    /// An empty row of `word_length` cells
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            cells: vec![None; word_length],
            colors: vec![Feedback::default(); word_length],
        }
    }

    /// A complete row holding `word` colored with `colors`
    ///
    /// # Panics
    /// Panics if `colors` does not have one entry per letter.
    #[must_use]
    pub fn from_guess(word: &Word, colors: &[Feedback]) -> Self {
        assert_eq!(
            word.len(),
            colors.len(),
            "row for {word} needs one color per letter"
        );
        Self {
            cells: word.letters().iter().copied().map(Some).collect(),
            colors: colors.to_vec(),
        }
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds a letter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// True when every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    #[must_use]
    pub fn colors(&self) -> &[Feedback] {
        &self.colors
    }

    #[must_use]
    pub fn color(&self, position: usize) -> Option<Feedback> {
        self.colors.get(position).copied()
    }

    /// The row's letters as a word, if complete
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let letters: Option<Vec<u8>> = self.cells.iter().copied().collect();
        letters.map(|l| Word::from_letters(&l))
    }

    /// Fill the first empty cell from the left. Returns false if the row is full.
    pub(crate) fn push_letter(&mut self, letter: u8) -> bool {
        match self.cells.iter_mut().find(|cell| cell.is_none()) {
            Some(cell) => {
                *cell = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Overwrite a cell. Returns false if `position` is out of range.
    pub(crate) fn set_letter(&mut self, position: usize, letter: u8) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) => {
                *cell = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the rightmost filled cell, returning its letter
    pub(crate) fn pop_letter(&mut self) -> Option<u8> {
        self.cells.iter_mut().rev().find_map(Option::take)
    }

    /// Returns false if `position` is out of range.
    pub(crate) fn set_color(&mut self, position: usize, color: Feedback) -> bool {
        match self.colors.get_mut(position) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Replace every cell with the letters of `word`, keeping colors
    pub(crate) fn fill(&mut self, word: &Word) {
        debug_assert_eq!(word.len(), self.cells.len());
        for (cell, &letter) in self.cells.iter_mut().zip(word.letters()) {
            *cell = Some(letter);
        }
    }

    pub(crate) fn fill_colors(&mut self, color: Feedback) {
        self.colors.fill(color);
    }
}

impl fmt::Display for Row {
    /// Letters with `_` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.map_or('_', char::from))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_feedback;

    #[test]
    fn new_row_is_empty_and_gray() {
        let row = Row::new(5);
        assert_eq!(row.len(), 5);
        assert!(row.is_empty());
        assert!(!row.is_complete());
        assert!(row.colors().iter().all(|&c| c == Feedback::Absent));
        assert_eq!(row.word(), None);
        assert_eq!(row.to_string(), "_____");
    }

    #[test]
    fn push_fills_left_to_right() {
        let mut row = Row::new(3);
        assert!(row.push_letter(b'A'));
        assert!(row.push_letter(b'B'));
        assert_eq!(row.to_string(), "AB_");
        assert!(row.push_letter(b'C'));
        assert!(!row.push_letter(b'D'));
        assert!(row.is_complete());
        assert_eq!(row.word().unwrap().text(), "ABC");
    }

    #[test]
    fn push_fills_gap_left_by_direct_edit() {
        let mut row = Row::new(3);
        assert!(row.set_letter(2, b'Z'));
        assert!(row.push_letter(b'A'));
        assert_eq!(row.to_string(), "A_Z");
        assert!(!row.set_letter(3, b'Q'));
    }

    #[test]
    fn pop_clears_rightmost_filled_cell() {
        let mut row = Row::new(4);
        row.set_letter(0, b'A');
        row.set_letter(2, b'C');
        assert_eq!(row.pop_letter(), Some(b'C'));
        assert_eq!(row.to_string(), "A___");
        assert_eq!(row.pop_letter(), Some(b'A'));
        assert_eq!(row.pop_letter(), None);
    }

    #[test]
    fn from_guess_and_fill() {
        let word = Word::new("speed").unwrap();
        let colors = parse_feedback("--G--").unwrap();
        let mut row = Row::from_guess(&word, &colors);
        assert!(row.is_complete());
        assert_eq!(row.color(2), Some(Feedback::Correct));

        row.fill(&Word::new("their").unwrap());
        assert_eq!(row.to_string(), "THEIR");
        assert_eq!(row.color(2), Some(Feedback::Correct));
    }

    #[test]
    fn set_color_out_of_range() {
        let mut row = Row::new(2);
        assert!(row.set_color(1, Feedback::Present));
        assert!(!row.set_color(2, Feedback::Present));
        assert_eq!(row.colors(), &[Feedback::Absent, Feedback::Present]);
    }
}
