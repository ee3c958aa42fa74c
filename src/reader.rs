use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::delimiter::Delimiter;
use crate::record::{Record, FIELD_COUNT};

/// Read a file of person records with a known delimiter.
///
/// Lines are read and parsed sequentially, in file order. Every line is
/// assumed to hold a well formed record; there is no per line validation, so
/// a short line simply yields a record with empty trailing fields.
pub fn read_records(path: &Path, delimiter: Delimiter) -> Result<Vec<Record>, anyhow::Error> {
    let file = File::open(path).with_context(|| format!("path: {}", path.to_string_lossy()))?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("path: {}", path.to_string_lossy()))?;
        records.push(Record::parse(&line, delimiter));
    }
    log::info!("Read {} records from {}", records.len(), path.to_string_lossy());
    Ok(records)
}

/// Read a file of person records, detecting the delimiter from its first
/// line.
///
/// Detection runs once; the detected delimiter is reused for every remaining
/// line of the file. An empty file fails detection the same way a line with
/// an unsupported separator does.
pub fn read_records_detect(path: &Path) -> Result<(Delimiter, Vec<Record>), anyhow::Error> {
    let file = File::open(path).with_context(|| format!("path: {}", path.to_string_lossy()))?;
    let mut lines = BufReader::new(file).lines();
    let first = match lines.next() {
        Some(line) => line.with_context(|| format!("path: {}", path.to_string_lossy()))?,
        None => String::new(),
    };
    let delimiter = Delimiter::detect(&first, FIELD_COUNT)?;
    log::info!("Detected {:?} delimiter for {}", delimiter, path.to_string_lossy());

    let mut records = vec![Record::parse(&first, delimiter)];
    for line in lines {
        let line = line.with_context(|| format!("path: {}", path.to_string_lossy()))?;
        records.push(Record::parse(&line, delimiter));
    }
    log::info!("Read {} records from {}", records.len(), path.to_string_lossy());
    Ok((delimiter, records))
}
