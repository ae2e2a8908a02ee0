//! ARC container reader: yields one [`ArchiveRecord`] per stored resource.
//!
//! Handles plain `.arc` files and gzip-compressed `.arc.gz` files (each
//! record is its own gzip member; `MultiGzDecoder` treats the concatenation
//! as one stream). Record bodies are skipped, never interpreted. Read errors
//! and malformed headers stop iteration with an error rather than being
//! skipped, so the caller's scan count stays honest.

mod header;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::ArcReadError;
use crate::record::ArchiveRecord;

/// Prefix of the container's self-describing version block, which is not a
/// captured resource and is not yielded (or counted) as a record.
const FILEDESC_PREFIX: &str = "filedesc://";

/// Streaming reader over one ARC container.
pub struct ArcReader<R: BufRead> {
    input: R,
    source_file: String,
    /// Index of the next record header, for error context. The version
    /// block counts as record 0.
    record_index: u64,
    done: bool,
}

/// Open a container on disk, decoding gzip when the path ends in `.gz`.
pub fn open(
    path: &Path,
    read_buffer_bytes: usize,
) -> Result<ArcReader<Box<dyn BufRead>>, ArcReadError> {
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path).map_err(|source| ArcReadError::Io {
        file: source_file.clone(),
        source,
    })?;

    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    let input: Box<dyn BufRead> = if is_gzip {
        Box::new(BufReader::with_capacity(
            read_buffer_bytes,
            MultiGzDecoder::new(BufReader::new(file)),
        ))
    } else {
        Box::new(BufReader::with_capacity(read_buffer_bytes, file))
    };

    Ok(ArcReader::new(input, source_file))
}

impl<R: BufRead> ArcReader<R> {
    /// Reader over an already-open stream. `source_file` is the container
    /// name recorded in every yielded record.
    pub fn new(input: R, source_file: impl Into<String>) -> Self {
        Self {
            input,
            source_file: source_file.into(),
            record_index: 0,
            done: false,
        }
    }

    fn io_err(&self, source: io::Error) -> ArcReadError {
        ArcReadError::Io {
            file: self.source_file.clone(),
            source,
        }
    }

    /// Read the next header line, skipping blank separator lines.
    /// Returns `Ok(None)` at clean end of container.
    fn read_header_line(&mut self) -> Result<Option<String>, ArcReadError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = self
                .input
                .read_until(b'\n', &mut buf)
                .map_err(|e| self.io_err(e))?;
            if n == 0 {
                return Ok(None);
            }
            while buf.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
                buf.pop();
            }
            if buf.is_empty() {
                continue;
            }
            let line = String::from_utf8(buf).map_err(|_| ArcReadError::MalformedHeader {
                file: self.source_file.clone(),
                record_index: self.record_index,
                reason: "header line is not valid UTF-8".to_string(),
            })?;
            return Ok(Some(line));
        }
    }

    /// Skip exactly `len` body bytes.
    fn skip_body(&mut self, len: u64) -> Result<(), ArcReadError> {
        let copied = io::copy(&mut self.input.by_ref().take(len), &mut io::sink())
            .map_err(|e| self.io_err(e))?;
        if copied < len {
            return Err(ArcReadError::TruncatedBody {
                file: self.source_file.clone(),
                record_index: self.record_index,
                expected: len,
            });
        }
        Ok(())
    }

    fn next_record(&mut self) -> Result<Option<ArchiveRecord>, ArcReadError> {
        loop {
            let Some(line) = self.read_header_line()? else {
                return Ok(None);
            };

            let header =
                header::parse_header_line(&line).map_err(|reason| ArcReadError::MalformedHeader {
                    file: self.source_file.clone(),
                    record_index: self.record_index,
                    reason,
                })?;
            self.skip_body(header.body_len)?;
            self.record_index += 1;

            if header.url.starts_with(FILEDESC_PREFIX) {
                continue;
            }

            return Ok(Some(ArchiveRecord {
                source_file: self.source_file.clone(),
                url: header.url,
                capture_date: header.capture_date,
                mime_type: header.mime_type,
            }));
        }
    }
}

impl<R: BufRead> Iterator for ArcReader<R> {
    type Item = Result<ArchiveRecord, ArcReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                // Stop after the first error; resuming mid-container would
                // desynchronize header framing.
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
