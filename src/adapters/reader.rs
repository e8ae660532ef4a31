//! OCR reader - reads records from a file or string
//!
//! Implements `RecordSource` over any [`BufRead`]. A record is three lines
//! followed by one separator line, which is read and discarded.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

use log::debug;

use crate::core::models::{ROWS_PER_RECORD, Record};
use crate::core::ports::RecordSource;
use crate::core::services::{SegmentOptions, read_account_number};
use crate::error::{OcrError, Result};

/// Reads scanned records line by line
///
/// The reader latches once it runs out of complete records: after the first
/// `None` every later call returns `None` as well.
#[derive(Debug)]
pub struct OcrReader<R> {
    input: R,
    options: SegmentOptions,
    exhausted: bool,
}

impl OcrReader<BufReader<File>> {
    /// Open a scan file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => OcrError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => OcrError::Io(e),
        })?;
        debug!("open(): reading records from {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl OcrReader<Cursor<String>> {
    /// Read records from an in-memory string
    ///
    /// Lines end with `\n` or `\r\n`.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Cursor::new(text.into()))
    }
}

impl<R: BufRead> OcrReader<R> {
    /// Wrap a buffered input
    pub fn new(input: R) -> Self {
        Self {
            input,
            options: SegmentOptions::default(),
            exhausted: false,
        }
    }

    /// Set segmentation options used by [`Self::next_account_number`]
    #[must_use]
    pub const fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether more records may be available
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        !self.exhausted
    }

    /// Read the next record's account number
    ///
    /// The number may contain `?` for unreadable digits. Returns `None` once
    /// there are no more records.
    pub fn next_account_number(&mut self) -> Result<Option<String>> {
        let Some(record) = self.next_record()? else {
            return Ok(None);
        };
        Ok(read_account_number(&record, self.options))
    }

    /// Read the next complete record
    ///
    /// Blocks whose three lines are all blank are skipped. A record cut short
    /// by end of input ends the stream, as does any read error.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if self.exhausted {
            return Ok(None);
        }

        let record = self.read_block();
        if !matches!(record, Ok(Some(_))) {
            self.exhausted = true;
        }
        record
    }

    /// Read three lines plus separator, skipping blank blocks
    fn read_block(&mut self) -> Result<Option<Record>> {
        loop {
            let mut rows = Vec::with_capacity(ROWS_PER_RECORD);
            for i in 0..ROWS_PER_RECORD {
                match self.read_line()? {
                    Some(line) => {
                        debug!("... i={i}, line='{line}'");
                        rows.push(line);
                    },
                    None => break,
                }
            }

            let Ok([top, middle, bottom]) = <[String; ROWS_PER_RECORD]>::try_from(rows) else {
                debug!("read_block(): end of input before a complete record");
                return Ok(None);
            };

            if let Some(separator) = self.read_line()? {
                if !separator.trim().is_empty() {
                    debug!("read_block(): discarded non-blank separator '{separator}'");
                }
            }

            let record = Record::new(top, middle, bottom);
            if record.is_blank() {
                debug!("read_block(): skipped blank block");
                continue;
            }
            return Ok(Some(record));
        }
    }

    /// Read one line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> RecordSource for OcrReader<R> {
    fn next_record(&mut self) -> Result<Option<Record>> {
        self.read_record()
    }
}

impl<R: BufRead> Iterator for OcrReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
