//! This crate parses text lines that describe people and sorts the resulting
//! records by a chosen property.
//!
//! Each line holds five fields - last name, first name, email, favorite color
//! and date of birth - separated by one of three supported delimiters: space,
//! comma or pipe. The delimiter does not have to be known in advance; it is
//! detected from the first line of a batch and reused for the remaining
//! lines. Parsed records can then be ordered by any single property in either
//! direction, or by one of the named composite sorts used by the report
//! command.
//!
//! # Examples
//! ```
//! use person_record_sort::delimiter::Delimiter;
//! use person_record_sort::order::Order;
//! use person_record_sort::property::Property;
//! use person_record_sort::record::{Record, FIELD_COUNT};
//! use person_record_sort::sort::sort_by_property;
//!
//! fn sorted_by_email(lines: &[String]) -> Result<Vec<Record>, anyhow::Error> {
//!     // detect once, on the first line, and reuse for the whole batch
//!     let delimiter = Delimiter::detect(&lines[0], FIELD_COUNT)?;
//!     let records: Vec<Record> = lines
//!         .iter()
//!         .map(|line| Record::parse(line, delimiter))
//!         .collect();
//!     Ok(sort_by_property(&records, Property::Email, Order::Asc))
//! }
//! ```

pub mod delimiter;
pub mod error;
pub mod order;
pub mod property;
pub mod reader;
pub mod record;
pub mod sort;
pub mod store;
