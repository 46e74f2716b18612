//! Interactive session loop
//!
//! Reads one line at a time, hands it to the [`Dispatcher`] and renders the
//! outcome, until `Q` or the end of input.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::debug;

use crate::config::InputConfig;
use crate::core::ports::RosterStore;
use crate::core::services::{Dispatcher, Outcome};
use crate::error::RosterError;
use crate::input::{LineReader, ReadLine};
use crate::output::Renderer;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user issued `Q`
    Quit,
    /// Input ran out
    EndOfInput,
}

/// A read-dispatch-render loop over any input/output pair
#[derive(Debug)]
pub struct Shell<S> {
    dispatcher: Dispatcher<S>,
    renderer: Renderer,
    input: InputConfig,
}

impl<S: RosterStore> Shell<S> {
    /// Create a session around a store
    #[must_use]
    pub fn new(store: S, renderer: Renderer, input: InputConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(store),
            renderer,
            input,
        }
    }

    /// The dispatcher, and through it the live roster
    pub const fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    /// Handle one already-read line
    pub fn handle(&mut self, line: ReadLine) -> Outcome {
        match line {
            ReadLine::Line(text) => self.dispatcher.handle_line(&text),
            ReadLine::Overlong => Outcome::Failed(RosterError::LineTooLong),
            ReadLine::InvalidUtf8 => Outcome::Failed(RosterError::NoCommandCharacter),
        }
    }

    /// Run until `Q` or end of input
    ///
    /// Fails with a [`RosterError::Critical`] context if reading input or
    /// writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<SessionEnd> {
        let reader = LineReader::new(input, self.input.max_line_length, self.input.overlong_lines);

        for line in reader {
            let line = critical(line, "Failed to read input")?;
            let outcome = self.handle(line);

            critical(self.renderer.render(out, &outcome), "Failed to write output")?;
            critical(out.flush(), "Failed to flush output")?;

            if outcome.is_quit() {
                debug!("Quit requested");
                return Ok(SessionEnd::Quit);
            }
        }

        debug!("End of input");
        Ok(SessionEnd::EndOfInput)
    }
}

/// Mark a failure on the session input or output as
/// [`RosterError::Critical`]
fn critical<T>(result: io::Result<T>, what: &'static str) -> anyhow::Result<T> {
    result.context(what).context(RosterError::Critical)
}
