//! Error taxonomy for a scan run. All of these are fatal for the run; no
//! retry is attempted here (retries, if any, belong to whatever invokes us).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level failure of a scan run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The URL pattern did not compile. Detected before any record is read.
    #[error("invalid URL pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A container could not be read or parsed. Propagated, never skipped:
    /// silently dropping a container would corrupt the scan count.
    #[error(transparent)]
    Read(#[from] ArcReadError),

    /// Writing a matched record (or the final flush) failed.
    #[error("failed writing output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input path does not exist or yielded no ARC containers.
    #[error("no ARC containers found at {}", path.display())]
    NoInput { path: PathBuf },
}

/// Failure reading one ARC container.
#[derive(Debug, Error)]
pub enum ArcReadError {
    #[error("i/o error reading {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },

    /// A record header line did not have the expected ARC v1/v2 shape.
    #[error("malformed ARC header in {file} at record {record_index}: {reason}")]
    MalformedHeader {
        file: String,
        record_index: u64,
        reason: String,
    },

    /// The container ended before a record body was complete.
    #[error("truncated record body in {file} at record {record_index}: expected {expected} bytes")]
    TruncatedBody {
        file: String,
        record_index: u64,
        expected: u64,
    },
}
