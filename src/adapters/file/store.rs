//! File-backed roster store
//!
//! Rosters are flat text files of record lines (see [`super::record`]).
//! Loading builds a scratch roster and only hands it back once the whole file
//! has been read without a single error.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::record::{format_record, parse_record};
use crate::core::ports::RosterStore;
use crate::core::services::Roster;
use crate::error::RosterError;
use crate::input::{DEFAULT_MAX_LINE_LENGTH, LinePolicy, LineReader, ReadLine};

/// Stores rosters as text files under a base directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    max_line_length: usize,
    line_policy: LinePolicy,
    strict_totals: bool,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileStore {
    /// Create a store resolving file names against `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            line_policy: LinePolicy::Reject,
            strict_totals: false,
        }
    }

    /// Set the maximum record line length and what to do with longer lines
    #[must_use]
    pub const fn with_line_limit(mut self, max_line_length: usize, policy: LinePolicy) -> Self {
        self.max_line_length = max_line_length;
        self.line_policy = policy;
        self
    }

    /// Treat a stored total that differs from the recomputed one as corruption
    #[must_use]
    pub const fn with_strict_totals(mut self, strict: bool) -> Self {
        self.strict_totals = strict;
        self
    }

    /// Directory file names are resolved against
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Full path for a file name
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    fn read_roster(&self, file: File, path: &Path) -> Result<Roster, RosterError> {
        let reader = LineReader::new(BufReader::new(file), self.max_line_length, self.line_policy);
        let mut scratch = Roster::new();

        for (index, item) in reader.enumerate() {
            let line_no = index + 1;
            let text = match item {
                Ok(ReadLine::Line(text)) => text,
                Ok(ReadLine::Overlong) => return Err(corrupt(path, line_no, "line too long")),
                Ok(ReadLine::InvalidUtf8) => return Err(corrupt(path, line_no, "invalid UTF-8")),
                Err(err) => return Err(corrupt(path, line_no, &err.to_string())),
            };

            let record = parse_record(&text).map_err(|e| corrupt(path, line_no, e.name()))?;

            if !record.total_matches() {
                if self.strict_totals {
                    return Err(corrupt(path, line_no, "stored total does not match rounds"));
                }
                warn!(
                    "{}:{line_no}: stored total {} differs from computed {}, using computed",
                    path.display(),
                    record.stored_total,
                    record.student.total_points()
                );
            }

            scratch
                .insert(record.student)
                .map_err(|_| corrupt(path, line_no, "duplicate student ID"))?;
        }

        Ok(scratch)
    }
}

fn corrupt(path: &Path, line_no: usize, cause: &str) -> RosterError {
    debug!("{}:{line_no}: {cause}", path.display());
    RosterError::FileCorrupt
}

impl RosterStore for FileStore {
    fn write(&self, name: &str, roster: &Roster) -> Result<(), RosterError> {
        if roster.is_empty() {
            return Err(RosterError::EmptyRosterWrite);
        }

        let path = self.path_for(name);
        let file = File::create(&path).map_err(|e| {
            debug!("Cannot open {} for writing: {e}", path.display());
            RosterError::FileOpen
        })?;

        let mut writer = BufWriter::new(file);
        for student in roster.list() {
            writeln!(writer, "{}", format_record(student)).map_err(|e| {
                debug!("Write to {} failed: {e}", path.display());
                RosterError::FileWrite
            })?;
        }
        writer.flush().map_err(|e| {
            debug!("Flush of {} failed: {e}", path.display());
            RosterError::FileWrite
        })
    }

    fn load(&self, name: &str) -> Result<Roster, RosterError> {
        let path = self.path_for(name);
        let file = File::open(&path).map_err(|e| {
            debug!("Cannot open {} for reading: {e}", path.display());
            RosterError::FileOpen
        })?;

        self.read_roster(file, &path)
    }
}
