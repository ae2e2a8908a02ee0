//! CLI for the arcgrep ARC URL filter.

mod commands;

use anyhow::Result;
use arcgrep_core::config;
use clap::Parser;
use std::path::PathBuf;

use commands::run_scan_job;

/// Filter ARC web-archive records by URL pattern.
///
/// Scans the given containers, tests every record's URL against the pattern
/// (the whole URL must match, not a substring) and writes matching records
/// to the output file as `sourceFile url mimeType<TAB>captureDate` lines.
#[derive(Debug, Parser)]
#[command(name = "arcgrep")]
#[command(about = "Filter ARC web-archive records by URL pattern", long_about = None)]
pub struct Cli {
    /// ARC container file or directory to scan. May be given multiple times.
    #[arg(long = "input", short = 'i', value_name = "PATH", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Destination file for matched records. Existing contents are cleared.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: PathBuf,

    /// Regular expression tested against each record's whole URL.
    #[arg(long, short = 'p', value_name = "REGEXP")]
    pub pattern: String,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run_scan_job(&cli.inputs, &cli.output, &cli.pattern, &cfg)
    }
}

#[cfg(test)]
mod tests;
