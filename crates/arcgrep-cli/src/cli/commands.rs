//! Scan command: run the filter over the requested containers.

use anyhow::Result;
use arcgrep_core::config::ArcgrepConfig;
use arcgrep_core::scan;
use std::path::{Path, PathBuf};

pub fn run_scan_job(
    inputs: &[PathBuf],
    output: &Path,
    pattern: &str,
    cfg: &ArcgrepConfig,
) -> Result<()> {
    tracing::info!("tool: arcgrep");
    for input in inputs {
        tracing::info!(" - input: {}", input.display());
    }
    tracing::info!(" - output: {}", output.display());

    let report = scan::run_scan(inputs, output, pattern, cfg)?;

    tracing::info!(
        "read {} records, wrote {} matches to {}",
        report.total_scanned,
        report.matched,
        output.display()
    );
    Ok(())
}
