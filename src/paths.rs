//! Centralized path definitions for bankocr
//!
//! ## Configuration Layout
//!
//! ```text
//! ./bankocr.toml                  # Project config, next to the scans
//! ~/.config/bankocr/config.toml   # User config (XDG standard)
//! ```
//!
//! The project file wins over the user file; an explicit `--config` path wins
//! over both.

use std::path::PathBuf;

/// Project configuration filename, looked up in the working directory
pub const PROJECT_CONFIG: &str = "bankocr.toml";

/// Application directory name under the user config dir
const APP_DIR: &str = "bankocr";

/// User configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Path to `bankocr.toml` in the current directory
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the global config directory (`~/.config/bankocr/`)
///
/// Falls back to `./.bankocr` when the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".bankocr"), |dir| dir.join(APP_DIR))
}

/// Get the global config file path
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
