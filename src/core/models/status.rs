//! Account classification
//!
//! Every account number read from a scan ends up in exactly one of these.

use serde::Serialize;

/// Outcome of validating an account number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nine digits with a checksum of zero
    Valid,
    /// Nine digits, but the checksum is not zero
    Erroneous,
    /// Contains an unreadable digit or is not nine digits long
    Illegible,
}

impl Status {
    /// Label written after the account number in results
    ///
    /// Valid accounts carry an empty label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "",
            Self::Erroneous => "ERR",
            Self::Illegible => "ILL",
        }
    }

    /// Whether this status is an error flag
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::Valid)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Erroneous => write!(f, "erroneous"),
            Self::Illegible => write!(f, "illegible"),
        }
    }
}
