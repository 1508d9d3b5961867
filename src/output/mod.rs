//! Terminal output formatting
//!
//! Display utilities for the line-based front ends.

pub mod display;
pub mod formatters;

pub use display::{print_session, write_candidates, write_history, write_rows, write_session};
