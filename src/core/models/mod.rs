//! Domain models for the roster
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Student`] - one roster entry with per-round points
//! - [`ParsedLine`] / [`Parsed`] - a tokenised input line
//! - [`Command`] - a validated command ready for dispatch

mod command;
mod student;

pub use command::{Command, CommandKind, InputSource, MAX_ARGS, Parsed, ParsedLine};
pub use student::{
    MAX_ID_LEN, MAX_ROUND_POINTS, MAX_TOTAL_POINTS, ROUNDS, Student, StudentView,
};
