//! Check command - validate account numbers given on the command line

use bankocr::adapters::AccountWriter;
use bankocr::core::models::Account;
use bankocr::core::ports::AccountSink;
use bankocr::output::OutputMode;

/// Validate each number and print it in the result format
pub fn check(numbers: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let mut writer = AccountWriter::stdout(mode);
    for number in numbers {
        writer.write(&Account::new(number.as_str()))?;
    }
    writer.finish()?;
    Ok(())
}
