//! Record types: what the ARC reader yields and what the filter emits.

/// One captured web resource from an ARC container. Owned by the reader,
/// borrowed by the filter for the duration of one `process` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    /// File name of the container this record came from (no directory part).
    pub source_file: String,
    /// Capture URL. May be empty if the container carried an empty field.
    pub url: String,
    /// Archive-native 14-digit timestamp (e.g. `20200101120000`). Never reparsed.
    pub capture_date: String,
    /// MIME type as recorded at capture time.
    pub mime_type: String,
}

/// Projection of a matched record: a composite key and the capture date as
/// value, written as one `key\tvalue` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// `source_file url mime_type`, space-joined.
    pub key: String,
    /// Capture date, unchanged.
    pub value: String,
}

impl OutputRecord {
    pub fn from_record(record: &ArchiveRecord) -> Self {
        Self {
            key: format!(
                "{} {} {}",
                record.source_file, record.url, record.mime_type
            ),
            value: record.capture_date.clone(),
        }
    }

    /// Output line, without trailing newline.
    pub fn to_line(&self) -> String {
        format!("{}\t{}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArchiveRecord {
        ArchiveRecord {
            source_file: "crawl-001.arc.gz".to_string(),
            url: "http://a.com/x".to_string(),
            capture_date: "20200101120000".to_string(),
            mime_type: "text/html".to_string(),
        }
    }

    #[test]
    fn output_record_key_field_order() {
        let out = OutputRecord::from_record(&sample());
        assert_eq!(out.key, "crawl-001.arc.gz http://a.com/x text/html");
        assert_eq!(out.value, "20200101120000");
    }

    #[test]
    fn output_line_is_tab_separated() {
        let out = OutputRecord::from_record(&sample());
        assert_eq!(
            out.to_line(),
            "crawl-001.arc.gz http://a.com/x text/html\t20200101120000"
        );
    }
}
