//! Narrowing engine
//!
//! - [`constraints`]: one colored row → per-letter observations
//! - [`filter`](mod@filter): observations → surviving candidates
//! - [`session`]: the row-by-row state machine front ends drive

pub mod constraints;
pub mod filter;
mod row;
pub mod session;

pub use constraints::{ConstraintSet, Observation};
pub use filter::filter;
pub use row::Row;
pub use session::{
    ConfigError, GuessSession, SessionConfig, SessionError, SessionState, SubmittedRow,
};
