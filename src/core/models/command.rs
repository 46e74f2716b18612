//! Command models
//!
//! A raw input line goes through two stages:
//! 1. [`ParsedLine`]: the optional command kind plus positional tokens.
//! 2. [`Command`]: a fully validated, typed command ready for dispatch.

/// Maximum number of positional argument slots kept per line
pub const MAX_ARGS: usize = 10;

/// Where a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Typed by the user; must start with a command character
    Interactive,
    /// Read from a roster file; raw record fields only
    File,
}

/// The six recognised commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `A <id> <last> <first>`
    Add,
    /// `U <id> <round> <points>`
    Update,
    /// `L`
    List,
    /// `W <file>`
    Write,
    /// `O <file>`
    Load,
    /// `Q`
    Quit,
}

impl CommandKind {
    /// Map a command character to its kind
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Add),
            'U' => Some(Self::Update),
            'L' => Some(Self::List),
            'W' => Some(Self::Write),
            'O' => Some(Self::Load),
            'Q' => Some(Self::Quit),
            _ => None,
        }
    }

    /// The command character
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => 'A',
            Self::Update => 'U',
            Self::List => 'L',
            Self::Write => 'W',
            Self::Load => 'O',
            Self::Quit => 'Q',
        }
    }

    /// Expected token count, command character included
    #[must_use]
    pub const fn expected_args(self) -> usize {
        match self {
            Self::Add | Self::Update => 4,
            Self::Write | Self::Load => 2,
            Self::List | Self::Quit => 1,
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Update => write!(f, "update"),
            Self::List => write!(f, "list"),
            Self::Write => write!(f, "write"),
            Self::Load => write!(f, "load"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// One tokenised input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Command kind, `None` for file records
    pub command: Option<CommandKind>,

    /// Up to [`MAX_ARGS`] tokens; the command character is token 0 when present
    pub arguments: Vec<String>,

    /// Number of tokens found on the line, which may exceed `arguments.len()`
    pub token_count: usize,
}

impl ParsedLine {
    /// Token at `index`, if present
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }
}

/// Result of parsing a line that did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// A recognised command or a file record
    Line(ParsedLine),
    /// Looked like a command but the character is not one of `AULWOQ`
    UnknownCommand(char),
}

/// A validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new student with zero points
    Add {
        /// Student ID
        id: String,
        /// Last name
        last_name: String,
        /// First name
        first_name: String,
    },
    /// Set the points of one round
    Update {
        /// Student ID
        id: String,
        /// Round number, 1-based
        round: u8,
        /// New points value
        points: u16,
    },
    /// Print the roster
    List,
    /// Save the roster to a file
    Write {
        /// Target file name
        filename: String,
    },
    /// Replace the roster with a file's content
    Load {
        /// Source file name
        filename: String,
    },
    /// End the session
    Quit,
}

impl Command {
    /// Kind of this command
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Add { .. } => CommandKind::Add,
            Self::Update { .. } => CommandKind::Update,
            Self::List => CommandKind::List,
            Self::Write { .. } => CommandKind::Write,
            Self::Load { .. } => CommandKind::Load,
            Self::Quit => CommandKind::Quit,
        }
    }
}
