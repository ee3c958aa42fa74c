use crate::delimiter::Delimiter;
use crate::error::UnsupportedDelimiter;
use crate::order::Order;
use crate::property::Property;
use crate::record::{Record, FIELD_COUNT};
use crate::sort;

/// In-memory record store.
///
/// An explicitly owned container standing in for a database behind a demo
/// request handler. It is not synchronized and is intended for demonstration
/// and testing only; callers hold it and pass it where it is needed rather
/// than sharing it as global state.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> RecordStore {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Replace the store contents.
    pub fn init(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Append a single record.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Parse a batch of raw lines and append the resulting records.
    ///
    /// The delimiter is detected from the first line of the batch and reused
    /// for every line in it. Returns the parsed batch. A batch whose first
    /// line matches no supported delimiter fails as a whole and nothing is
    /// appended.
    pub fn append_lines(&mut self, lines: &[String]) -> Result<Vec<Record>, UnsupportedDelimiter> {
        let first = lines.first().map(String::as_str).unwrap_or("");
        let delimiter = Delimiter::detect(first, FIELD_COUNT)?;
        let batch: Vec<Record> = lines
            .iter()
            .map(|line| Record::parse(line, delimiter))
            .collect();
        log::info!("Appending {} records to store", batch.len());
        self.records.extend(batch.iter().cloned());
        Ok(batch)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sorted view of the store contents. The stored order is unchanged.
    pub fn sorted_by(&self, property: Property, order: Order) -> Vec<Record> {
        sort::sort_by_property(&self.records, property, order)
    }
}
