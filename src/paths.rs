//! Centralized path definitions
//!
//! ```text
//! ~/.roster/
//! └── config.toml               # User preferences
//! ```
//!
//! Roster files themselves are resolved against the configured data
//! directory, which defaults to the current working directory.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".roster";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default directory roster files are read from and written to
pub const DEFAULT_DATA_DIR: &str = ".";

/// Get the global roster directory.
///
/// Returns `~/.roster/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.roster/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
