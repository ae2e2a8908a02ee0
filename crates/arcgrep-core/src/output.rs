//! Line-oriented output sink for matched records.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::record::OutputRecord;

/// Buffered writer for the result file. Creating it clears any pre-existing
/// contents at the destination; a re-run always starts from an empty file.
#[derive(Debug)]
pub struct OutputWriter {
    inner: BufWriter<File>,
    path: PathBuf,
}

impl OutputWriter {
    pub fn create(path: &Path, write_buffer_bytes: usize) -> Result<Self, ScanError> {
        let file = File::create(path).map_err(|source| ScanError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            inner: BufWriter::with_capacity(write_buffer_bytes, file),
            path: path.to_path_buf(),
        })
    }

    fn write_err(&self, source: io::Error) -> ScanError {
        ScanError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }

    /// Append one `key\tvalue` line.
    pub fn write_record(&mut self, record: &OutputRecord) -> Result<(), ScanError> {
        writeln!(self.inner, "{}\t{}", record.key, record.value)
            .map_err(|source| self.write_err(source))
    }

    /// Flush buffered lines. Consumes the writer; nothing may be written
    /// after the run is finalized.
    pub fn finish(mut self) -> Result<(), ScanError> {
        self.inner.flush().map_err(|source| self.write_err(source))
    }
}
