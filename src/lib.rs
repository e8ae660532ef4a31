//! bankocr - reads OCR-scanned bank account numbers and validates them
//!
//! Each account number arrives as three lines of `_`, `|` and space
//! characters. This library cuts those lines into digit glyphs, recognizes
//! them, checksums the resulting number, and classifies it as valid,
//! erroneous, or illegible.
//!
//! ```
//! use bankocr::adapters::OcrReader;
//! use bankocr::core::models::{Account, Status};
//!
//! let mut reader = OcrReader::from_text(
//!     "    _  _     _  _  _  _  _ \n  | _| _||_||_ |_   ||_||_|\n  ||_  _|  | _||_|  ||_| _|\n\n",
//! );
//! let number = reader.next_account_number().unwrap().unwrap();
//! assert_eq!(number, "123456789");
//! assert_eq!(Account::new(number).status(), Status::Valid);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{OcrError, Result};
