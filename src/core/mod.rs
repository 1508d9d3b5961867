//! Core domain types
//!
//! Words, feedback colors and dictionaries. Everything here is pure and
//! independent of any front end.

mod dictionary;
mod feedback;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use feedback::{Feedback, feedback_to_emoji, feedback_to_pattern, parse_feedback, score};
pub use word::{Word, WordError};
