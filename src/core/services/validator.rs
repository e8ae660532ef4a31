//! Account validator - checksum and classification
//!
//! The checksum weights the rightmost digit by 1 and the leftmost by 9:
//!
//! ```text
//! account number:  3  4  5  8  8  2  8  6  5
//! position names:  d9 d8 d7 d6 d5 d4 d3 d2 d1
//!
//! checksum = (d1 + 2*d2 + 3*d3 + ... + 9*d9) mod 11
//! ```
//!
//! A number is checksummed only if it is exactly nine ASCII digits. Anything
//! else (an illegible `?`, wrong length, stray characters) is illegible.
//!
//! # Examples
//!
//! ```
//! use bankocr::core::models::Status;
//! use bankocr::core::services::{checksum_for, validate};
//!
//! assert_eq!(checksum_for("345882865"), Some(0));
//! assert_eq!(validate("345882865").status, Status::Valid);
//! assert_eq!(validate("34588286?").status, Status::Illegible);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Status;

/// Nine ASCII digits, nothing else
pub const ACCOUNT_NUMBER_PATTERN: &str = "^[0-9]{9}$";

/// Modulus of the account checksum
pub const CHECKSUM_MODULUS: u32 = 11;

static ACCOUNT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ACCOUNT_NUMBER_PATTERN).expect("account number pattern is a valid regex")
});

/// Classification of an account number together with its checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    /// Valid, erroneous or illegible
    pub status: Status,
    /// Checksum in `0..11`, `None` when the number is not nine digits
    pub checksum: Option<u32>,
}

/// Whether `number` has the shape of an account number
#[must_use]
pub fn is_well_formed(number: &str) -> bool {
    ACCOUNT_NUMBER.is_match(number)
}

/// Checksum of a nine-digit account number
///
/// Returns `None` if `number` is not exactly nine digits.
#[must_use]
pub fn checksum_for(number: &str) -> Option<u32> {
    if !is_well_formed(number) {
        return None;
    }

    let total: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .zip(1..)
        .map(|(digit, position)| digit * position)
        .sum();

    Some(total % CHECKSUM_MODULUS)
}

/// Validate an account number
///
/// This is the only classification routine; [`Account::new`] calls it too.
///
/// [`Account::new`]: crate::core::models::Account::new
#[must_use]
pub fn validate(number: &str) -> Validation {
    let checksum = checksum_for(number);
    let status = match checksum {
        None => Status::Illegible,
        Some(0) => Status::Valid,
        Some(_) => Status::Erroneous,
    };
    Validation { status, checksum }
}
