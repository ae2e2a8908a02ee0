//! Builds real ARC container files (plain and gzip) for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

/// One captured resource to place in a fixture container.
pub struct FixtureRecord {
    pub url: &'static str,
    pub capture_date: &'static str,
    pub mime_type: &'static str,
    pub body: &'static str,
}

/// Serialize a version block plus one record per entry, ARC v1 framing.
pub fn arc_bytes(container_name: &str, records: &[FixtureRecord]) -> Vec<u8> {
    let version_body =
        "1 0 InternetArchive\nURL IP-address Archive-date Content-type Archive-length\n";
    let mut out = Vec::new();
    write!(
        out,
        "filedesc://{container_name} 0.0.0.0 20200101000000 text/plain {}\n{version_body}\n",
        version_body.len()
    )
    .unwrap();
    for r in records {
        write!(
            out,
            "{} 1.2.3.4 {} {} {}\n{}\n",
            r.url,
            r.capture_date,
            r.mime_type,
            r.body.len(),
            r.body
        )
        .unwrap();
    }
    out
}

/// Write a plain `.arc` container into `dir`.
pub fn write_arc(dir: &Path, name: &str, records: &[FixtureRecord]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, arc_bytes(name, records)).unwrap();
    path
}

/// Write a gzip-compressed `.arc.gz` container into `dir`.
pub fn write_arc_gz(dir: &Path, name: &str, records: &[FixtureRecord]) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&arc_bytes(name, records)).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();
    path
}
