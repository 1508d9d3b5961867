//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WORDS;
use crate::core::{Dictionary, DictionaryError, Word};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Name accepted by [`load_dictionary`] for the embedded list
pub const EMBEDDED: &str = "embedded";

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// malformed words are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = parse_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!(line = number + 1, text = trimmed, %err, "skipping malformed word");
                    None
                }
            }
        })
        .collect()
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
/// use wordle_assist::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a dictionary from the words that have exactly `word_length` letters
///
/// # Errors
/// Returns `DictionaryError` if no word has that length.
pub fn dictionary_with_length(
    words: impl IntoIterator<Item = Word>,
    word_length: usize,
) -> Result<Dictionary, DictionaryError> {
    Dictionary::new(
        words.into_iter().filter(|w| w.len() == word_length),
        word_length,
    )
}

/// Load the dictionary named by `source`
///
/// `source` is either [`EMBEDDED`] or a path to a word list file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no words of
/// `word_length` letters.
pub fn load_dictionary(source: &str, word_length: usize) -> Result<Dictionary> {
    let words = if source == EMBEDDED {
        words_from_slice(WORDS)
    } else {
        load_from_file(source).with_context(|| format!("failed to read word list {source}"))?
    };

    let dictionary = dictionary_with_length(words, word_length)
        .with_context(|| format!("word list {source} cannot be used"))?;
    debug!(
        source,
        word_length,
        count = dictionary.len(),
        "dictionary ready"
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "to long", "ab1", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_lines_skips_comments_and_blanks() {
        let words = parse_lines("# header\n\ncrane\n  slate  \nb@d\nplanet\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "PLANET"]);
    }

    #[test]
    fn dictionary_with_length_keeps_matching_words() {
        let words = words_from_slice(&["crane", "planet", "slate", "planes"]);

        let five = dictionary_with_length(words.clone(), 5).unwrap();
        assert_eq!(five.len(), 2);

        let six = dictionary_with_length(words.clone(), 6).unwrap();
        assert_eq!(six.len(), 2);

        assert_eq!(
            dictionary_with_length(words, 7),
            Err(DictionaryError::Empty(7))
        );
    }

    #[test]
    fn load_embedded_dictionary() {
        let dictionary = load_dictionary(EMBEDDED, 5).unwrap();
        assert_eq!(dictionary.len(), WORDS.len());
        assert!(load_dictionary(EMBEDDED, 6).is_err());
    }

    #[test]
    fn load_dictionary_from_file() {
        let path = std::env::temp_dir().join(format!(
            "wordle_assist_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# six letter words").unwrap();
            writeln!(file, "planet\nplanes\nplanet\ncrane").unwrap();
        }

        let dictionary = load_dictionary(path.to_str().unwrap(), 6).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["PLANES", "PLANET"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_dictionary_missing_file() {
        let err = load_dictionary("/definitely/not/here.txt", 5).unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
