//! Output formatting for human and JSON modes
//!
//! Every handled line produces exactly one outcome on the output channel,
//! rendered either as the plain-text protocol or as one JSON object per line.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::core::models::StudentView;
use crate::core::services::Outcome;
use crate::error::{ErrorData, RosterError};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// JSON shape of one outcome
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonOutcome<'a> {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        students: Option<Vec<StudentView<'a>>>,
    },
    InvalidCommand {
        command: char,
    },
    Error {
        error: ErrorData,
    },
}

impl<'a> From<&'a Outcome> for JsonOutcome<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        match outcome {
            Outcome::Success | Outcome::Quit => Self::Success { students: None },
            Outcome::Listed(students) => Self::Success {
                students: Some(students.iter().map(StudentView::from).collect()),
            },
            Outcome::InvalidCommand(c) => Self::InvalidCommand { command: *c },
            Outcome::Failed(err) => Self::Error {
                error: ErrorData::from(*err),
            },
        }
    }
}

/// Renders outcomes to a writer
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    mode: OutputMode,
    color: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(mode: OutputMode, color: bool) -> Self {
        Self { mode, color }
    }

    /// The output mode in use
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write one outcome
    pub fn render<W: Write>(&self, out: &mut W, outcome: &Outcome) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.render_human(out, outcome),
            OutputMode::Json => Self::render_json(out, outcome),
        }
    }

    fn render_human<W: Write>(&self, out: &mut W, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Success | Outcome::Quit => self.success(out),
            Outcome::Listed(students) => {
                for student in students {
                    writeln!(out, "{student}")?;
                }
                self.success(out)
            },
            Outcome::InvalidCommand(c) => writeln!(out, "Invalid command {c}"),
            Outcome::Failed(err) => self.error(out, *err),
        }
    }

    fn success<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", "SUCCESS".green())
        } else {
            writeln!(out, "SUCCESS")
        }
    }

    fn error<W: Write>(&self, out: &mut W, err: RosterError) -> io::Result<()> {
        if self.color {
            writeln!(out, "{} ({}) {}: {err}", "ERROR".red(), err.code(), err.name())
        } else {
            writeln!(out, "{}", error_line(err))
        }
    }

    fn render_json<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
        serde_json::to_writer(&mut *out, &JsonOutcome::from(outcome))?;
        writeln!(out)
    }
}

/// Plain-text error line, as printed in human mode without color
#[must_use]
pub fn error_line(err: RosterError) -> String {
    format!("ERROR ({}) {}: {err}", err.code(), err.name())
}
