//! Bounded line reading
//!
//! Both the interactive session and the file adapter read input one line at a
//! time with a maximum length. What happens to longer lines is decided by a
//! [`LinePolicy`].

use std::io::{self, BufRead, Read};

use serde::Deserialize;

/// Default maximum line length in bytes, terminator included
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// What to do with a line longer than the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinePolicy {
    /// Report the line as overlong and skip it
    #[default]
    Reject,
    /// Keep the first part of the line and drop the rest
    Truncate,
}

impl std::str::FromStr for LinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "truncate" => Ok(Self::Truncate),
            _ => Err(format!("Unknown line policy: {s}. Use 'reject' or 'truncate'")),
        }
    }
}

/// One line as read from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadLine {
    /// Line content without the `\n` terminator
    Line(String),
    /// Longer than the limit under [`LinePolicy::Reject`]
    Overlong,
    /// Not valid UTF-8
    InvalidUtf8,
}

/// Reads lines of at most `max_len` bytes (terminator included)
///
/// Both `\n` and `\r\n` terminate a line and neither counts against the limit
/// beyond the one byte reserved for the terminator.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    max_len: usize,
    policy: LinePolicy,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a reader
    pub const fn new(inner: R, max_len: usize, policy: LinePolicy) -> Self {
        Self {
            inner,
            max_len,
            policy,
            buf: Vec::new(),
        }
    }

    /// Read the next line, `None` at end of input
    ///
    /// At most `max_len + 1` bytes are buffered per line; the rest of a longer
    /// line is skipped without being stored.
    pub fn next_line(&mut self) -> io::Result<Option<ReadLine>> {
        self.buf.clear();
        let limit = self.max_len.saturating_sub(1);
        // Content limit plus room for a `\r\n` terminator
        let cap = self.max_len.saturating_add(1);

        let read = (&mut self.inner)
            .take(u64::try_from(cap).unwrap_or(u64::MAX))
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        } else if read == cap {
            // Cap reached mid-line: drop the remainder up to the next newline
            self.inner.skip_until(b'\n')?;
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        let mut truncated = false;
        if self.buf.len() > limit {
            match self.policy {
                LinePolicy::Reject => return Ok(Some(ReadLine::Overlong)),
                LinePolicy::Truncate => {
                    self.buf.truncate(limit);
                    truncated = true;
                },
            }
        }

        let bytes = std::mem::take(&mut self.buf);
        let line = match String::from_utf8(bytes) {
            Ok(text) => ReadLine::Line(text),
            Err(err) if truncated && err.utf8_error().error_len().is_none() => {
                // The cut landed inside a multi-byte character
                let valid = err.utf8_error().valid_up_to();
                let mut bytes = err.into_bytes();
                bytes.truncate(valid);
                String::from_utf8(bytes).map_or(ReadLine::InvalidUtf8, ReadLine::Line)
            },
            Err(_) => ReadLine::InvalidUtf8,
        };
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<ReadLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
