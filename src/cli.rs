//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use bankocr::config::Config;
use bankocr::output::OutputMode;

/// bankocr - Read and validate OCR-scanned account numbers
#[derive(Parser, Debug)]
#[command(
    name = "bankocr",
    version,
    about = "Read and validate OCR-scanned account numbers",
    long_about = "Convert OCR scans of bank account numbers into digits.\n\n\
                  Each account is printed as three lines of '_', '|' and spaces,\n\
                  followed by a blank line. Every number is checksummed and flagged\n\
                  ERR (bad checksum) or ILL (unreadable digit)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this file instead of bankocr.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// bankocr subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read account numbers from a scan file
    Scan {
        /// File of OCR-scanned account numbers
        input: PathBuf,

        /// Write results here instead of stdout
        output: Option<PathBuf>,

        /// Flag text past column 27 as an unreadable digit
        #[arg(long)]
        strict_width: bool,
    },

    /// Validate account numbers given as text
    Check {
        /// Account numbers to validate
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load(cli.config.as_deref())?;

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        config.output.format
    };

    match cli.command {
        Some(Command::Scan {
            input,
            output,
            strict_width,
        }) => {
            let mut options = config.segment_options();
            options.strict_width |= strict_width;
            commands::scan(&input, output.as_deref(), options, output_mode)
        },
        Some(Command::Check { numbers }) => commands::check(&numbers, output_mode),
        Some(Command::Version) => {
            print_version(output_mode);
            Ok(())
        },
        None => {
            print_version(output_mode);
            if output_mode == OutputMode::Human {
                println!("\nRun 'bankocr --help' for usage");
                println!("Run 'bankocr scan <input file> [output file]' to read a scan");
            }
            Ok(())
        },
    }
}

fn print_version(mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": env!("CARGO_PKG_VERSION")
            })
        );
    } else {
        println!("bankocr v{}", env!("CARGO_PKG_VERSION"));
    }
}
