//! Scan driver: wires containers through the filter into the output file.

use std::path::{Path, PathBuf};

use crate::arc;
use crate::config::ArcgrepConfig;
use crate::error::{ArcReadError, ScanError};
use crate::filter::RecordFilter;
use crate::output::OutputWriter;

/// Final numbers for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Records observed across all containers, match or not.
    pub total_scanned: u64,
    /// Records written to the output file.
    pub matched: u64,
}

/// Scan `inputs` and write records whose URL full-matches `pattern` to
/// `output`, clearing any prior contents there.
///
/// The pattern is compiled before any container is opened; a bad pattern
/// aborts the run with zero records scanned. Output order follows input
/// argument order, and container order within each file is preserved.
/// Running twice over the same inputs and pattern yields byte-identical
/// output.
pub fn run_scan(
    inputs: &[PathBuf],
    output: &Path,
    pattern: &str,
    cfg: &ArcgrepConfig,
) -> Result<ScanReport, ScanError> {
    let filter = RecordFilter::new(pattern)?;
    let files = expand_inputs(inputs)?;
    let mut writer = OutputWriter::create(output, cfg.write_buffer_bytes)?;

    let mut matched = 0u64;
    for file in &files {
        tracing::debug!("scanning container {}", file.display());
        let reader = arc::open(file, cfg.read_buffer_bytes)?;
        for record in reader {
            let record = record?;
            if let Some(out) = filter.process(&record) {
                matched += 1;
                writer.write_record(&out)?;
            }
        }
    }
    writer.finish()?;

    Ok(ScanReport {
        total_scanned: filter.total_scanned(),
        matched,
    })
}

fn is_arc_name(name: &str) -> bool {
    name.ends_with(".arc") || name.ends_with(".arc.gz")
}

/// Resolve input arguments to container files. A directory expands to its
/// `*.arc` / `*.arc.gz` children in sorted name order so runs are
/// deterministic; a file path is taken as-is.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut children: Vec<PathBuf> = std::fs::read_dir(input)
                .map_err(|source| ArcReadError::Io {
                    file: input.display().to_string(),
                    source,
                })?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(is_arc_name)
                })
                .collect();
            if children.is_empty() {
                return Err(ScanError::NoInput {
                    path: input.clone(),
                });
            }
            children.sort();
            files.extend(children);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(ScanError::NoInput {
                path: input.clone(),
            });
        }
    }
    Ok(files)
}
