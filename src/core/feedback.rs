//! Per-letter feedback colors and the scoring rules behind them
//!
//! - Absent (gray): letter not in the word, or no unclaimed copy left
//! - Present (yellow): letter in the word, wrong position
//! - Correct (green): letter in the correct position

use super::Word;

/// Feedback color attached to one cell of a guess row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Gray. Every cell starts out with this color.
    #[default]
    Absent,
    /// Yellow
    Present,
    /// Green
    Correct,
}

impl Feedback {
    /// Next color in the gray → yellow → green → gray cycle
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this color
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII character used in `G`/`Y`/`-` patterns
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Parse a feedback row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Returns `None` if any character is not a feedback character.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Feedback, parse_feedback};
///
/// let row = parse_feedback("GY-").unwrap();
/// assert_eq!(row, vec![Feedback::Correct, Feedback::Present, Feedback::Absent]);
/// assert!(parse_feedback("GXG").is_none());
/// ```
#[must_use]
pub fn parse_feedback(s: &str) -> Option<Vec<Feedback>> {
    let row: Option<Vec<Feedback>> = s.trim().chars().map(Feedback::from_char).collect();
    row.filter(|r| !r.is_empty())
}

/// Convert a feedback row to an emoji string
///
/// # Examples
/// ```
/// use wordle_assist::core::{feedback_to_emoji, parse_feedback};
///
/// let row = parse_feedback("GY-GY").unwrap();
/// assert_eq!(feedback_to_emoji(&row), "🟩🟨⬜🟩🟨");
/// ```
#[must_use]
pub fn feedback_to_emoji(row: &[Feedback]) -> String {
    row.iter().map(|f| f.emoji()).collect()
}

/// Convert a feedback row to its `G`/`Y`/`-` pattern
#[must_use]
pub fn feedback_to_pattern(row: &[Feedback]) -> String {
    row.iter().map(|f| f.symbol()).collect()
}

/// Calculate the colors `guess` would receive if `answer` were the target
///
/// This implements the standard feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: Mark all exact matches and remove them from the available pool
/// 2. Second pass, left to right: Mark present-but-misplaced from the remaining pool
///
/// # Panics
/// Panics if the words have different lengths.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Word, score, feedback_to_pattern};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
///
/// // C(gray) R(gray) A(green) N(gray) E(green)
/// assert_eq!(feedback_to_pattern(&score(&guess, &answer)), "--G-G");
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Vec<Feedback> {
    assert_eq!(
        guess.len(),
        answer.len(),
        "cannot score {guess} against {answer}: lengths differ"
    );

    let mut result = vec![Feedback::Absent; guess.len()];
    let mut answer_available = answer.letter_counts();

    for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
        if g == a {
            result[i] = Feedback::Correct;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Feedback::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&g)
            && *count > 0
        {
            result[i] = Feedback::Present;
            *count -= 1;
        }
    }

    result
}
