//! Account model
//!
//! An [`Account`] pairs a scanned account number with its checksum and
//! classification. Classification is delegated to
//! [`validate`](crate::core::services::validate), so an account and a bare
//! call to `validate` on the same string always agree.

use serde::Serialize;

use super::Status;
use crate::core::services::validator::validate;
use crate::error::OcrError;

/// A scanned account number and its validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// The account number as read, possibly containing `?`
    #[serde(rename = "account_number")]
    number: String,
    /// Classification of the number
    status: Status,
    /// Checksum, present only for nine-digit numbers
    checksum: Option<u32>,
}

impl Account {
    /// Create an account and classify it
    #[must_use]
    pub fn new(number: impl Into<String>) -> Self {
        let number = number.into();
        let validation = validate(&number);
        Self {
            number,
            status: validation.status,
            checksum: validation.checksum,
        }
    }

    /// The account number as read
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The classification of this account
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The checksum, if the number is nine digits
    #[must_use]
    pub const fn checksum(&self) -> Option<u32> {
        self.checksum
    }

    /// True unless the account is valid
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.status.is_error()
    }
}

impl TryFrom<Option<String>> for Account {
    type Error = OcrError;

    fn try_from(number: Option<String>) -> Result<Self, Self::Error> {
        number.map(Self::new).ok_or(OcrError::MissingAccountNumber)
    }
}

/// Formats as `<number> <label>`, the result line layout
impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.status.label())
    }
}
