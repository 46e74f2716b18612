//! Roster services
//!
//! - `validator` - per-field checks
//! - `parser` - line tokenising and command validation
//! - `roster` - the sorted student collection
//! - `dispatcher` - executes commands against the roster and a store

pub mod dispatcher;
pub mod parser;
pub mod roster;
pub mod validator;

pub use dispatcher::{Dispatcher, Outcome};
pub use parser::{ParseFailure, parse_command_line, parse_line, validate_command};
pub use roster::{Roster, compare};
