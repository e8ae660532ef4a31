//! Scan service - runs records through the recognition pipeline
//!
//! record -> glyphs -> account number -> classified [`Account`]
//!
//! I/O happens only through the [`RecordSource`] and [`AccountSink`] ports.

use log::{debug, info};

use super::recognizer::recognize_all;
use super::segmenter::{SegmentOptions, segment_record};
use crate::core::models::{Account, Record, Status};
use crate::core::ports::{AccountSink, RecordSource};
use crate::error::Result;

/// Counts of each classification over a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Records processed
    pub total: usize,
    /// Accounts with a zero checksum
    pub valid: usize,
    /// Accounts with a non-zero checksum
    pub erroneous: usize,
    /// Accounts with an unreadable digit
    pub illegible: usize,
}

impl ScanSummary {
    /// Count one account
    pub const fn record(&mut self, status: Status) {
        self.total += 1;
        match status {
            Status::Valid => self.valid += 1,
            Status::Erroneous => self.erroneous += 1,
            Status::Illegible => self.illegible += 1,
        }
    }
}

impl std::fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} account(s): {} valid, {} erroneous, {} illegible",
            self.total, self.valid, self.erroneous, self.illegible
        )
    }
}

/// Read the account number in a record
///
/// Returns `None` for a record with no glyph content.
#[must_use]
pub fn read_account_number(record: &Record, options: SegmentOptions) -> Option<String> {
    segment_record(record, options).map(|glyphs| recognize_all(&glyphs))
}

/// Read and classify every record from `source`, writing each account to `sink`
///
/// Accounts are written in input order. Records without glyph content are
/// skipped; the scan ends when the source is exhausted.
pub fn scan<S, K>(source: &mut S, sink: &mut K, options: SegmentOptions) -> Result<ScanSummary>
where
    S: RecordSource + ?Sized,
    K: AccountSink + ?Sized,
{
    let mut summary = ScanSummary::default();

    while let Some(record) = source.next_record()? {
        let Some(number) = read_account_number(&record, options) else {
            debug!("scan(): skipped record without glyphs");
            continue;
        };
        let account = Account::new(number);
        debug!("scan(): account={account:?}");
        summary.record(account.status());
        sink.write(&account)?;
    }

    sink.finish()?;
    info!("Scanned {summary}");
    Ok(summary)
}
