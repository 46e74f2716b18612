//! Record-line codec
//!
//! One student per line, ten space-separated fields:
//!
//! ```text
//! <id> <last_name> <first_name> <r1> <r2> <r3> <r4> <r5> <r6> <total>
//! ```
//!
//! The total is redundant. It is range-checked on read but the student's
//! total is always recomputed from the six rounds.

use crate::core::models::{InputSource, Parsed, ROUNDS, Student};
use crate::core::services::{parse_line, validator};
use crate::error::RosterError;

/// Number of fields in a record line
pub const RECORD_FIELDS: usize = 10;

/// Index of the first round field
const FIRST_ROUND_FIELD: usize = 3;

/// A decoded record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The student, points included
    pub student: Student,
    /// Total as stored in the file
    pub stored_total: u32,
}

impl Record {
    /// Whether the stored total equals the sum of the rounds
    #[must_use]
    pub fn total_matches(&self) -> bool {
        self.stored_total == self.student.total_points()
    }
}

/// Encode a student as a record line (without terminator)
#[must_use]
pub fn format_record(student: &Student) -> String {
    student.to_string()
}

/// Decode one record line
///
/// Returns the specific validation error; callers loading a whole file
/// reinterpret any failure as corruption.
pub fn parse_record(line: &str) -> Result<Record, RosterError> {
    let Parsed::Line(parsed) = parse_line(line, InputSource::File)? else {
        return Err(RosterError::FileCorrupt);
    };
    if parsed.token_count != RECORD_FIELDS {
        return Err(RosterError::FileCorrupt);
    }

    let field = |index: usize| parsed.arg(index).ok_or(RosterError::FileCorrupt);

    let id = field(0)?;
    validator::validate_id(id)?;

    let mut points = [0u16; ROUNDS];
    for (offset, slot) in points.iter_mut().enumerate() {
        *slot = validator::validate_points(field(FIRST_ROUND_FIELD + offset)?)?;
    }
    let stored_total = validator::validate_total(field(FIRST_ROUND_FIELD + ROUNDS)?)?;

    Ok(Record {
        student: Student::new(id, field(1)?, field(2)?).with_points(points),
        stored_total,
    })
}
