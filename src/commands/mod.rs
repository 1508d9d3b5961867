//! Command implementations

pub mod filter;
pub mod simple;

pub use filter::{ApplyError, FeedbackRow, RowParseError, apply_rows};
pub use simple::run_simple;
