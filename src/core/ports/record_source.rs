//! Record source port
//!
//! Defines where scanned records come from.

use crate::core::models::Record;
use crate::error::Result;

/// A stream of scanned records, read in order
///
/// Once a source has returned `Ok(None)` it is exhausted and must keep
/// returning `Ok(None)` on every later call.
pub trait RecordSource {
    /// Read the next complete record, consuming its separator line
    fn next_record(&mut self) -> Result<Option<Record>>;
}
