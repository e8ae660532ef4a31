//! Output formatting for human and JSON modes
//!
//! Human mode reproduces the classic result layout, one line per account:
//!
//! ```text
//! 457508000
//! 664371495 ERR
//! 86110??36 ILL
//! ```
//!
//! Valid accounts keep the trailing space. JSON mode writes one object per
//! line instead.

use serde::{Deserialize, Serialize};

use crate::core::models::Account;
use crate::error::Result;

/// Output mode for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON lines (machine-readable)
    Json,
}

/// Render one account as a single line, without the newline
pub fn format_account(account: &Account, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Human => Ok(account.to_string()),
        OutputMode::Json => Ok(serde_json::to_string(account)?),
    }
}
