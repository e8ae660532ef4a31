//! Account writer - writes classified accounts to a file or stdout
//!
//! Implements `AccountSink` over any [`Write`].

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use log::debug;

use crate::core::models::Account;
use crate::core::ports::AccountSink;
use crate::error::Result;
use crate::output::{OutputMode, format_account};

/// Writes one line per account
#[derive(Debug)]
pub struct AccountWriter<W> {
    out: W,
    mode: OutputMode,
}

impl AccountWriter<Stdout> {
    /// Write to standard output
    #[must_use]
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl AccountWriter<BufWriter<File>> {
    /// Create (or truncate) a results file
    pub fn create(path: impl AsRef<Path>, mode: OutputMode) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(BufWriter::new(file), mode))
    }
}

impl<W: Write> AccountWriter<W> {
    /// Wrap an output stream
    pub const fn new(out: W, mode: OutputMode) -> Self {
        Self { out, mode }
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AccountSink for AccountWriter<W> {
    fn write(&mut self, account: &Account) -> Result<()> {
        debug!("write(): account={account:?}");
        writeln!(self.out, "{}", format_account(account, self.mode)?)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
