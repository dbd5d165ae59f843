use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::record::Record;

/// Read a manifest file: one sample identifier per line.
///
/// The file handle is dropped before returning on every path, including
/// read errors part way through.
///
/// # Errors
///
/// Returns the underlying `std::io::Error` if the file cannot be opened or read.
pub fn parse_manifest_file(path: &Path) -> std::io::Result<Vec<Record>> {
    let reader = BufReader::new(File::open(path)?);
    parse_manifest_reader(reader)
}

/// Read manifest lines from any buffered reader
///
/// # Errors
///
/// Returns the first read error encountered.
pub fn parse_manifest_reader<R: BufRead>(reader: R) -> std::io::Result<Vec<Record>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        if let Some(record) = parse_line(&line?) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse manifest text already held in memory
#[must_use]
pub fn parse_manifest_text(text: &str) -> Vec<Record> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() {
        None
    } else {
        Some(Record::new(line))
    }
}
