//! Wordle Assist
//!
//! Narrows a Wordle dictionary from the colored rows you have seen so far,
//! with correct handling of repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Dictionary, Word, parse_feedback};
//! use wordle_assist::engine::{ConstraintSet, filter};
//!
//! let dictionary = Dictionary::from_strs(["crane", "crate", "grate", "irate"], 5).unwrap();
//!
//! let guess = Word::new("crate").unwrap();
//! let colors = parse_feedback("-GGGG").unwrap();
//! let constraints = ConstraintSet::from_guess(&guess, &colors);
//!
//! let left = filter(dictionary.words(), &constraints);
//! assert_eq!(left.len(), 2);
//! ```

// Core domain types
pub mod core;

// Constraints, filtering and the session state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
