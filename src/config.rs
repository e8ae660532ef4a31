//! Configuration management
//!
//! Settings are read from TOML:
//!
//! ```toml
//! [scan]
//! strict_width = true
//!
//! [output]
//! format = "json"
//! ```
//!
//! See [`crate::paths`] for where config files are looked up. Command-line
//! flags override anything loaded here.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::services::SegmentOptions;
use crate::error::{OcrError, Result};
use crate::output::OutputMode;
use crate::paths;

/// bankocr configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scan settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Treat text past column 27 as part of the last digit
    #[serde(default)]
    pub strict_width: bool,
}

/// Output settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Result format
    #[serde(default)]
    pub format: OutputMode,
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| OcrError::Config(e.to_string()))
    }

    /// Load config from a specific file
    ///
    /// The file must exist and parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| OcrError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content).map_err(|e| match e {
            OcrError::Config(msg) => OcrError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Load config
    ///
    /// An explicit path must load. Otherwise the project file, then the user
    /// file, are tried; one that fails to parse is skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("load(): using {}", path.display());
            return Self::from_file(path);
        }

        for path in [paths::project_config(), paths::global_config()] {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!("load(): using {}", path.display());
                    return Ok(config);
                },
                Err(e) => warn!("Ignoring config: {e}"),
            }
        }

        Ok(Self::default())
    }

    /// Segmentation options for this config
    #[must_use]
    pub const fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            strict_width: self.scan.strict_width,
        }
    }
}
