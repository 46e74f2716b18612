//! Configuration management
//!
//! Settings are read from `~/.roster/config.toml` (or a file given with
//! `--config`). Every key is optional:
//!
//! ```toml
//! [input]
//! max_line_length = 1024
//! overlong_lines = "reject"   # or "truncate"
//!
//! [storage]
//! data_dir = "."
//! strict_totals = false
//!
//! [output]
//! json = false
//! color = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::Deserialize;

use crate::adapters::file::FileStore;
use crate::input::{DEFAULT_MAX_LINE_LENGTH, LinePolicy};
use crate::output::{OutputMode, Renderer};
use crate::paths;

/// Smallest usable line limit: one content byte plus the terminator
const MIN_LINE_LENGTH: usize = 2;

/// Roster configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Input line handling
    #[serde(default)]
    pub input: InputConfig,
    /// Roster file storage
    #[serde(default)]
    pub storage: StorageConfig,
    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input line handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    /// Maximum line length in bytes, terminator included
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// What to do with longer lines
    #[serde(default)]
    pub overlong_lines: LinePolicy,
}

const fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            overlong_lines: LinePolicy::default(),
        }
    }
}

/// Roster file storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory file names are resolved against (default: current directory)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Reject files whose stored totals disagree with their rounds
    #[serde(default)]
    pub strict_totals: bool,
}

/// Output rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Emit one JSON object per outcome
    #[serde(default)]
    pub json: bool,
    /// Color `SUCCESS` and `ERROR`
    #[serde(default)]
    pub color: bool,
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the default config file, falling back to defaults
    ///
    /// A missing file is normal; an unreadable or invalid one is logged and
    /// ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("Ignoring config {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load an explicitly chosen config file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.input.max_line_length < MIN_LINE_LENGTH {
            anyhow::bail!(
                "input.max_line_length must be at least {MIN_LINE_LENGTH}, got {}",
                config.input.max_line_length
            );
        }
        Ok(config)
    }

    /// Directory roster files are resolved against
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(paths::DEFAULT_DATA_DIR))
    }

    /// Build the file store described by this config
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.data_dir())
            .with_line_limit(self.input.max_line_length, self.input.overlong_lines)
            .with_strict_totals(self.storage.strict_totals)
    }

    /// Build the outcome renderer described by this config
    #[must_use]
    pub const fn renderer(&self) -> Renderer {
        let mode = if self.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Renderer::new(mode, self.output.color)
    }
}
