//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing roster components.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use roster::Roster;
use roster::RosterError;
use roster::adapters::file::FileStore;
use roster::core::ports::RosterStore;
use tempfile::TempDir;

/// A scratch directory for roster files
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("failed to read file")
    }

    /// A file store rooted in this directory
    pub fn store(&self) -> FileStore {
        FileStore::new(self.path())
    }
}

/// In-memory implementation of `RosterStore`
#[derive(Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<String, Roster>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(name: &str, roster: Roster) -> Self {
        let store = Self::new();
        store.files.borrow_mut().insert(name.to_string(), roster);
        store
    }

    pub fn saved(&self, name: &str) -> Option<Roster> {
        self.files.borrow().get(name).cloned()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("files", &self.files.borrow().len())
            .finish()
    }
}

impl RosterStore for MemoryStore {
    fn write(&self, name: &str, roster: &Roster) -> Result<(), RosterError> {
        if roster.is_empty() {
            return Err(RosterError::EmptyRosterWrite);
        }
        self.files.borrow_mut().insert(name.to_string(), roster.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Roster, RosterError> {
        self.files.borrow().get(name).cloned().ok_or(RosterError::FileOpen)
    }
}

/// Build a roster from `(id, last, first, points)` tuples
pub fn roster_of(students: &[(&str, &str, &str, [u16; 6])]) -> Roster {
    let mut roster = Roster::new();
    for (id, last, first, points) in students {
        roster.add(id, last, first).unwrap();
        for (i, p) in points.iter().enumerate() {
            if *p > 0 {
                roster.update(id, u8::try_from(i + 1).unwrap(), *p).unwrap();
            }
        }
    }
    roster
}

/// IDs in rank order
pub fn ids(roster: &Roster) -> Vec<String> {
    roster.list().map(|s| s.id.clone()).collect()
}
