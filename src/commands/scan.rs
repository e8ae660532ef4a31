//! Scan command - read account numbers from a scan file

use std::path::Path;

use anyhow::Context;
use log::info;

use bankocr::adapters::{AccountWriter, OcrReader};
use bankocr::core::ports::AccountSink;
use bankocr::core::services::{self, SegmentOptions};
use bankocr::output::OutputMode;

/// Read every record in `input` and write the classified accounts
pub fn scan(
    input: &Path,
    output: Option<&Path>,
    options: SegmentOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    info!("Starting OCR run ...");
    info!("Reading account OCR data from {}", input.display());

    let mut reader = OcrReader::open(input).context("OCR run aborted")?;

    let mut writer: Box<dyn AccountSink> = match output {
        Some(path) => {
            info!("Writing account details to {}", path.display());
            Box::new(
                AccountWriter::create(path, mode)
                    .with_context(|| format!("OCR run aborted writing '{}'", path.display()))?,
            )
        },
        None => {
            info!("Writing account details to STDOUT");
            Box::new(AccountWriter::stdout(mode))
        },
    };

    services::scan(&mut reader, writer.as_mut(), options).context("OCR run aborted")?;

    info!("OCR run completed successfully");
    Ok(())
}
