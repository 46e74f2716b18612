//! Roster error types with stable numeric codes
//!
//! Every failure a command can produce is one variant of [`RosterError`].
//! Each variant maps directly to a negative code and an upper-case name, which
//! together with the `Display` message form the error line shown to the user:
//!
//! ```text
//! ERROR (-21) ERR_TOO_MANY_ARGS: Too many arguments for the given command type.
//! ```

use serde::Serialize;
use thiserror::Error;

/// Errors produced while parsing, validating or executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Catch-all for states that should be unreachable
    #[error("Ran into an unknown error.")]
    Unknown,

    /// Startup could not complete
    #[error("Critical error, exiting...")]
    Critical,

    /// The line contained no tokens at all
    #[error("Input could not be parsed for any arguments.")]
    NonViableInput,

    /// The line does not start with an upper-case letter followed by whitespace
    #[error("Could not find a valid command character.")]
    NoCommandCharacter,

    /// `U` was issued while the roster holds no students
    #[error("Attempting to update points on an empty list.")]
    UpdateOnEmptyRoster,

    /// No student carries the requested ID
    #[error("Student could not be found.")]
    StudentNotFound,

    /// A student with the same ID is already in the roster
    #[error("Student ID is already found in the list.")]
    DuplicateId,

    /// The line was empty
    #[error("Input is empty.")]
    EmptyInput,

    /// More arguments than the command accepts
    #[error("Too many arguments for the given command type.")]
    TooManyArguments,

    /// Fewer arguments than the command requires
    #[error("Too few arguments for the given command type.")]
    TooFewArguments,

    /// The line exceeded the configured maximum length
    #[error("Input line is too long.")]
    LineTooLong,

    /// Round is not an integer
    #[error("Round number is not an integer.")]
    RoundNotInteger,

    /// Round is outside 1..=6
    #[error("Round number is out of bounds.")]
    RoundOutOfBounds,

    /// Points is not an integer
    #[error("Points is not an integer.")]
    PointsNotInteger,

    /// Points is outside 0..=999
    #[error("Points is out of bounds.")]
    PointsOutOfBounds,

    /// `W` was issued while the roster holds no students
    #[error("Attempting to write an empty list to file.")]
    EmptyRosterWrite,

    /// The file could not be opened
    #[error("File could not be opened.")]
    FileOpen,

    /// The file content is not a valid roster
    #[error("File corruption.")]
    FileCorrupt,

    /// The file name contains an illegal character or ends in a period
    #[error("File name is invalid.")]
    FilenameInvalid,

    /// The file name is longer than 255 bytes
    #[error("File name is too long.")]
    FilenameTooLong,

    /// Writing to an opened file failed
    #[error("File could not be written.")]
    FileWrite,

    /// The student ID is longer than six characters
    #[error("Given student ID is too long.")]
    IdTooLong,

    /// The student ID is empty
    #[error("Given student ID is empty.")]
    IdEmpty,

    /// The student ID contains something other than ASCII letters and digits
    #[error("Given student ID contains symbols other than letters and numbers.")]
    IdNotAlphanumeric,

    /// The text is not a base-10 integer
    #[error("Conversion of str to int not possible.")]
    NotAnInteger,

    /// The integer does not fit in 32 bits
    #[error("Given number out of bounds for int type.")]
    IntegerOutOfRange,

    /// A negative integer where only non-negative ones are allowed
    #[error("Given integer is negative when only positive integers are allowed.")]
    NegativeNotAllowed,
}

impl RosterError {
    /// Numeric code of this error
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::Critical => -2,
            Self::NonViableInput => -4,
            Self::NoCommandCharacter => -6,
            Self::UpdateOnEmptyRoster => -7,
            Self::StudentNotFound => -8,
            Self::DuplicateId => -9,
            Self::EmptyInput => -20,
            Self::TooManyArguments => -21,
            Self::TooFewArguments => -22,
            Self::LineTooLong => -23,
            Self::RoundNotInteger => -30,
            Self::RoundOutOfBounds => -31,
            Self::PointsNotInteger => -40,
            Self::PointsOutOfBounds => -41,
            Self::EmptyRosterWrite => -51,
            Self::FileOpen => -52,
            Self::FileCorrupt => -53,
            Self::FilenameInvalid => -54,
            Self::FilenameTooLong => -55,
            Self::FileWrite => -56,
            Self::IdTooLong => -60,
            Self::IdEmpty => -61,
            Self::IdNotAlphanumeric => -62,
            Self::NotAnInteger => i32::MIN,
            Self::IntegerOutOfRange => i32::MIN + 1,
            Self::NegativeNotAllowed => i32::MIN + 2,
        }
    }

    /// Upper-case name shown in error lines
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "ERR_UNKNOWN",
            Self::Critical => "ERR_CRITICAL",
            Self::NonViableInput => "ERR_NON_VIABLE_INP",
            Self::NoCommandCharacter => "ERR_NO_CMND_CHAR",
            Self::UpdateOnEmptyRoster => "ERR_UPD_PTS_ON_EMPT",
            Self::StudentNotFound => "ERR_STDNT_NOT_FND",
            Self::DuplicateId => "ERR_STDNT_IN_LIST",
            Self::EmptyInput => "ERR_EMPTY_INP",
            Self::TooManyArguments => "ERR_TOO_MANY_ARGS",
            Self::TooFewArguments => "ERR_TOO_FEW_ARGS",
            Self::LineTooLong => "ERR_LINE_TOO_LONG",
            Self::RoundNotInteger => "ERR_ROUND_CNV",
            Self::RoundOutOfBounds => "ERR_RND_NUM_OOB",
            Self::PointsNotInteger => "ERR_POINTS_CNV",
            Self::PointsOutOfBounds => "ERR_PTS_OOB",
            Self::EmptyRosterWrite => "ERR_WRT_EMPT_LST",
            Self::FileOpen => "ERR_FILE_OPEN",
            Self::FileCorrupt => "ERR_FILE_CORR",
            Self::FilenameInvalid => "ERR_FILENAME_INV",
            Self::FilenameTooLong => "ERR_FILENAME_LEN",
            Self::FileWrite => "ERR_FILE_WRITE",
            Self::IdTooLong => "ERR_ID_TOO_LONG",
            Self::IdEmpty => "ERR_ID_EMPTY",
            Self::IdNotAlphanumeric => "ERR_ID_NOT_ALNUM",
            Self::NotAnInteger => "ERR_INT_CNV",
            Self::IntegerOutOfRange => "ERR_INT_OOB",
            Self::NegativeNotAllowed => "ERR_INT_NEG",
        }
    }
}

/// Serializable error data for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ErrorData {
    /// Numeric error code
    pub code: i32,
    /// Upper-case error name
    pub name: String,
    /// Human-readable message
    pub message: String,
}

impl From<RosterError> for ErrorData {
    fn from(err: RosterError) -> Self {
        Self {
            code: err.code(),
            name: err.name().to_string(),
            message: err.to_string(),
        }
    }
}
