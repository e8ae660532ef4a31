//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - [`reader`] - Scan files and strings as a `RecordSource`
//! - [`writer`] - Result files and stdout as an `AccountSink`

pub mod reader;
pub mod writer;

pub use reader::OcrReader;
pub use writer::AccountWriter;
