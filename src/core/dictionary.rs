//! The fixed set of candidate words a session narrows down

use super::{Word, WordError};
use std::sync::Arc;
use thiserror::Error;

/// Error type for dictionaries that cannot back a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary word '{word}' has {actual} letters, expected {expected}")]
    WrongLength {
        word: String,
        expected: usize,
        actual: usize,
    },
    #[error("dictionary has no words of length {0}")]
    Empty(usize),
    #[error("word length must be at least 1")]
    ZeroLength,
}

/// Sorted, duplicate-free list of words that all share one length
///
/// Cloning is cheap: the word list is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    word_length: usize,
    words: Arc<[Word]>,
}

impl Dictionary {
    /// Build a dictionary from words that must all be `word_length` letters
    ///
    /// Duplicates are removed and the result is sorted alphabetically.
    ///
    /// # Errors
    /// Returns `DictionaryError` if `word_length` is zero, any word has a
    /// different length, or no words are given.
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        word_length: usize,
    ) -> Result<Self, DictionaryError> {
        if word_length == 0 {
            return Err(DictionaryError::ZeroLength);
        }

        let mut words: Vec<Word> = words.into_iter().collect();
        if let Some(bad) = words.iter().find(|w| w.len() != word_length) {
            return Err(DictionaryError::WrongLength {
                word: bad.text().to_string(),
                expected: word_length,
                actual: bad.len(),
            });
        }

        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(DictionaryError::Empty(word_length));
        }

        Ok(Self {
            word_length,
            words: words.into(),
        })
    }

    /// Build a dictionary from raw strings, keeping only valid words of
    /// `word_length` letters
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if nothing survives.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(["slate", "CRANE", "crane", "toolong", "ab3de"], 5).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.words()[0].text(), "CRANE");
    /// ```
    pub fn from_strs<'s>(
        words: impl IntoIterator<Item = &'s str>,
        word_length: usize,
    ) -> Result<Self, DictionaryError> {
        let valid = words
            .into_iter()
            .filter_map(|s| Word::with_length(s, word_length).ok());
        Self::new(valid, word_length)
    }

    /// Number of letters in every word
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words, sorted
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Parse `text` and look it up
    ///
    /// # Errors
    /// Returns `WordError` if `text` is not a well-formed word of the right length.
    pub fn lookup(&self, text: &str) -> Result<Option<&Word>, WordError> {
        let word = Word::with_length(text, self.word_length)?;
        Ok(self
            .words
            .binary_search(&word)
            .ok()
            .map(|index| &self.words[index]))
    }
}
