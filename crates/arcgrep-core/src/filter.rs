//! URL filter: full-string regex match over archive records.

use std::sync::atomic::{AtomicU64, Ordering};

use regex::Regex;

use crate::error::ScanError;
use crate::record::{ArchiveRecord, OutputRecord};

/// Filters archive records by URL and counts every record it sees.
///
/// The pattern is compiled once, anchored at both ends, so `example\.com/.*`
/// does NOT match `http://example.com/page` the way a substring search would.
/// `process` takes `&self` and the counter is atomic, so one filter can be
/// shared across threads scanning disjoint input shards.
#[derive(Debug)]
pub struct RecordFilter {
    re: Regex,
    scanned: AtomicU64,
}

impl RecordFilter {
    /// Compile and validate the pattern. Fails before any scanning starts;
    /// a run must never begin with an uncompilable pattern.
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        // Non-capturing group keeps alternations like `a|b` inside the anchors.
        let anchored = format!("^(?:{})$", pattern);
        let re = Regex::new(&anchored).map_err(|source| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            re,
            scanned: AtomicU64::new(0),
        })
    }

    /// Test one record. Always counts it; returns the projection only when
    /// the whole URL matches. An empty URL is an ordinary non-match.
    pub fn process(&self, record: &ArchiveRecord) -> Option<OutputRecord> {
        self.scanned.fetch_add(1, Ordering::Relaxed);
        if self.re.is_match(&record.url) {
            Some(OutputRecord::from_record(record))
        } else {
            None
        }
    }

    /// Total records observed so far, match or not.
    pub fn total_scanned(&self) -> u64 {
        self.scanned.load(Ordering::Relaxed)
    }
}
