//! ARC record header line parsing.
//!
//! An ARC header is one space-separated line. Version 1 has five fields:
//! `URL IP-address Archive-date Content-type Archive-length`. Version 2 has
//! ten, with the same first four and the length still last. Only the URL,
//! date, MIME type and length are of interest here.

/// Parsed header of one ARC record.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RecordHeader {
    pub url: String,
    pub capture_date: String,
    pub mime_type: String,
    /// Length of the record body in bytes.
    pub body_len: u64,
}

const V1_FIELDS: usize = 5;
const V2_FIELDS: usize = 10;

/// Parse one header line. Returns a reason string on failure; the caller
/// attaches file and record context.
pub(crate) fn parse_header_line(line: &str) -> Result<RecordHeader, String> {
    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != V1_FIELDS && fields.len() != V2_FIELDS {
        return Err(format!(
            "expected {V1_FIELDS} or {V2_FIELDS} fields, found {}",
            fields.len()
        ));
    }

    let length_field = fields[fields.len() - 1];
    let body_len: u64 = length_field
        .parse()
        .map_err(|_| format!("bad archive-length field {length_field:?}"))?;

    Ok(RecordHeader {
        url: fields[0].to_string(),
        capture_date: fields[2].to_string(),
        mime_type: fields[3].to_string(),
        body_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v1_header() {
        let header =
            parse_header_line("http://a.com/x 1.2.3.4 20200101120000 text/html 42").unwrap();
        assert_eq!(header.url, "http://a.com/x");
        assert_eq!(header.capture_date, "20200101120000");
        assert_eq!(header.mime_type, "text/html");
        assert_eq!(header.body_len, 42);
    }

    #[test]
    fn parses_v2_header() {
        let header = parse_header_line(
            "http://b.org/y 5.6.7.8 20200102000000 image/png 200 checksum - 0 crawl.arc 1234",
        )
        .unwrap();
        assert_eq!(header.url, "http://b.org/y");
        assert_eq!(header.capture_date, "20200102000000");
        assert_eq!(header.mime_type, "image/png");
        assert_eq!(header.body_len, 1234);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_header_line("http://a.com/x 1.2.3.4 20200101120000").unwrap_err();
        assert!(err.contains("fields"), "unexpected reason: {err}");
    }

    #[test]
    fn rejects_non_numeric_length() {
        let err =
            parse_header_line("http://a.com/x 1.2.3.4 20200101120000 text/html nope").unwrap_err();
        assert!(err.contains("archive-length"), "unexpected reason: {err}");
    }
}
