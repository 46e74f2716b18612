//! Flat-text file storage for rosters
//!
//! Implements `RosterStore` using one record line per student.

pub mod record;
mod store;

pub use record::{RECORD_FIELDS, Record, format_record, parse_record};
pub use store::FileStore;
