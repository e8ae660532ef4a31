//! Account sink port
//!
//! Defines where classified accounts are written.

use crate::core::models::Account;
use crate::error::Result;

/// Destination for classified accounts, written in input order
pub trait AccountSink {
    /// Write one account
    fn write(&mut self, account: &Account) -> Result<()>;

    /// Flush anything buffered once all accounts are written
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Collects accounts in memory
impl AccountSink for Vec<Account> {
    fn write(&mut self, account: &Account) -> Result<()> {
        self.push(account.clone());
        Ok(())
    }
}
