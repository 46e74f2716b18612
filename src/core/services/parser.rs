//! Line parsing
//!
//! Turns a raw input line into a [`Parsed`] value and, for interactive input,
//! a validated [`Command`].
//!
//! Interactive lines must start with an upper-case letter followed by
//! whitespace (or the end of the line). A letter outside `AULWOQ` is not a
//! parse failure: it comes back as [`Parsed::UnknownCommand`] so the caller
//! can report it.

use crate::core::models::{Command, CommandKind, InputSource, MAX_ARGS, Parsed, ParsedLine};
use crate::core::services::validator;
use crate::error::RosterError;

/// Outcome of looking for a command character
enum CommandChar {
    Known(CommandKind),
    Unknown(char),
}

/// Strip one trailing `\n`, `\r\n` or lone `\r`
#[must_use]
pub fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parse one line of input
///
/// Empty lines fail with `EmptyInput` when interactive and `FileCorrupt` when
/// read from a file, since a blank record can never be valid roster data.
pub fn parse_line(raw: &str, source: InputSource) -> Result<Parsed, RosterError> {
    let line = strip_terminator(raw);
    if line.is_empty() {
        return Err(match source {
            InputSource::Interactive => RosterError::EmptyInput,
            InputSource::File => RosterError::FileCorrupt,
        });
    }

    let command = match source {
        InputSource::Interactive => match parse_command(line)? {
            CommandChar::Known(kind) => Some(kind),
            CommandChar::Unknown(c) => return Ok(Parsed::UnknownCommand(c)),
        },
        InputSource::File => None,
    };

    let mut tokens = line.split_ascii_whitespace();
    let arguments: Vec<String> = tokens.by_ref().take(MAX_ARGS).map(String::from).collect();
    if arguments.is_empty() {
        return Err(RosterError::NonViableInput);
    }
    let token_count = arguments.len() + tokens.count();

    Ok(Parsed::Line(ParsedLine {
        command,
        arguments,
        token_count,
    }))
}

fn parse_command(line: &str) -> Result<CommandChar, RosterError> {
    let mut chars = line.chars();
    let first = chars.next().ok_or(RosterError::NoCommandCharacter)?;
    let separated = chars.next().is_none_or(|c| c.is_ascii_whitespace());

    if !first.is_ascii_uppercase() || !separated {
        return Err(RosterError::NoCommandCharacter);
    }

    Ok(CommandKind::from_char(first).map_or(CommandChar::Unknown(first), CommandChar::Known))
}

/// Turn an interactive [`ParsedLine`] into a validated [`Command`]
///
/// Argument counts are checked before any field, so `U a b` reports too few
/// arguments rather than a bad ID.
pub fn validate_command(parsed: &ParsedLine) -> Result<Command, RosterError> {
    let kind = parsed.command.ok_or(RosterError::Unknown)?;
    check_arg_count(kind, parsed.token_count)?;

    let arg = |index: usize| parsed.arg(index).ok_or(RosterError::TooFewArguments);

    match kind {
        CommandKind::Add => {
            let id = arg(1)?;
            validator::validate_id(id)?;
            Ok(Command::Add {
                id: id.to_string(),
                last_name: arg(2)?.to_string(),
                first_name: arg(3)?.to_string(),
            })
        },
        CommandKind::Update => {
            let id = arg(1)?;
            validator::validate_id(id)?;
            let round = validator::validate_round(arg(2)?)?;
            let points = validator::validate_points(arg(3)?)?;
            Ok(Command::Update {
                id: id.to_string(),
                round,
                points,
            })
        },
        CommandKind::List => Ok(Command::List),
        CommandKind::Write => {
            let filename = arg(1)?;
            validator::validate_filename(filename)?;
            Ok(Command::Write {
                filename: filename.to_string(),
            })
        },
        CommandKind::Load => {
            let filename = arg(1)?;
            validator::validate_filename(filename)?;
            Ok(Command::Load {
                filename: filename.to_string(),
            })
        },
        CommandKind::Quit => Ok(Command::Quit),
    }
}

const fn check_arg_count(kind: CommandKind, found: usize) -> Result<(), RosterError> {
    let expected = kind.expected_args();
    if found > expected {
        Err(RosterError::TooManyArguments)
    } else if found < expected {
        Err(RosterError::TooFewArguments)
    } else {
        Ok(())
    }
}

/// Parse and validate one interactive line in a single step
pub fn parse_command_line(raw: &str) -> Result<Command, ParseFailure> {
    match parse_line(raw, InputSource::Interactive).map_err(ParseFailure::Error)? {
        Parsed::UnknownCommand(c) => Err(ParseFailure::UnknownCommand(c)),
        Parsed::Line(line) => validate_command(&line).map_err(ParseFailure::Error),
    }
}

/// Why an interactive line did not yield a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Upper-case letter that is not a known command
    UnknownCommand(char),
    /// Hard parse or validation error
    Error(RosterError),
}
