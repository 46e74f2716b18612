//! Command dispatcher - one step per input line
//!
//! Owns the live [`Roster`] and a [`RosterStore`]. Every line is parsed and
//! validated completely before anything is mutated, so a command either takes
//! full effect or leaves the roster exactly as it was.

use log::{debug, info};

use super::parser::{self, ParseFailure};
use super::roster::Roster;
use crate::core::models::{Command, Student};
use crate::core::ports::RosterStore;
use crate::error::RosterError;

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded
    Success,
    /// `L` succeeded; the students in rank order
    Listed(Vec<Student>),
    /// `Q` succeeded; the session should end
    Quit,
    /// Upper-case letter that is not a command
    InvalidCommand(char),
    /// The command failed and nothing changed
    Failed(RosterError),
}

impl Outcome {
    /// Whether the session should stop after this outcome
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

impl From<Result<Self, RosterError>> for Outcome {
    fn from(result: Result<Self, RosterError>) -> Self {
        result.unwrap_or_else(Self::Failed)
    }
}

/// Maps commands onto the roster and its store
#[derive(Debug)]
pub struct Dispatcher<S> {
    roster: Roster,
    store: S,
}

impl<S: RosterStore> Dispatcher<S> {
    /// Create a dispatcher with an empty roster
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            roster: Roster::new(),
            store,
        }
    }

    /// The live roster
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The persistence backend
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Parse, validate and execute one raw interactive line
    pub fn handle_line(&mut self, raw: &str) -> Outcome {
        match parser::parse_command_line(raw) {
            Ok(command) => self.execute(command).into(),
            Err(ParseFailure::UnknownCommand(c)) => {
                debug!("Unknown command character {c:?}");
                Outcome::InvalidCommand(c)
            },
            Err(ParseFailure::Error(err)) => {
                debug!("Rejected input: {}", err.name());
                Outcome::Failed(err)
            },
        }
    }

    /// Execute an already validated command
    pub fn execute(&mut self, command: Command) -> Result<Outcome, RosterError> {
        debug!("Dispatching {}", command.kind());

        match command {
            Command::Add {
                id,
                last_name,
                first_name,
            } => {
                self.roster.add(&id, &last_name, &first_name)?;
                Ok(Outcome::Success)
            },
            Command::Update { id, round, points } => {
                self.roster.update(&id, round, points)?;
                Ok(Outcome::Success)
            },
            Command::List => Ok(Outcome::Listed(self.roster.list().cloned().collect())),
            Command::Write { filename } => {
                self.store.write(&filename, &self.roster)?;
                info!("Wrote {} student(s) to {filename}", self.roster.len());
                Ok(Outcome::Success)
            },
            Command::Load { filename } => {
                let loaded = self.store.load(&filename)?;
                info!("Loaded {} student(s) from {filename}", loaded.len());
                self.roster.replace_all(loaded);
                Ok(Outcome::Success)
            },
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
