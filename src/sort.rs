use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::order::Order;
use crate::property::Property;
use crate::record::Record;

/// Textual form of the date of birth field.
const BIRTH_DATE_FORMAT: &str = "%m/%d/%Y";

/// Ascending comparison primitive: the natural string order.
///
/// Equal values report `Equal`; every sort in this module is stable, so equal
/// keys keep their input order.
pub fn ascending(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Descending mirror of [ascending]: `Greater` when `b` sorts after `a`.
pub fn descending(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Sort records by a single property.
///
/// The chosen field is compared as a raw string for every property, including
/// the date of birth, which orders its `MM/DD/YYYY` text lexicographically
/// rather than chronologically. Use [sort_by_birth_date_asc] for calendar
/// ordering. The input is left untouched; a newly ordered copy is returned.
///
/// # Examples
/// ```
/// use person_record_sort::delimiter::Delimiter;
/// use person_record_sort::order::Order;
/// use person_record_sort::property::Property;
/// use person_record_sort::record::Record;
/// use person_record_sort::sort::sort_by_property;
///
/// let records = vec![
///     Record::parse("Jones Eric ejones@example.com blue 02/01/1991", Delimiter::Space),
///     Record::parse("Lewis Damian dlewis@example.com red 02/02/1992", Delimiter::Space),
/// ];
/// let sorted = sort_by_property(&records, Property::Email, Order::Asc);
/// assert_eq!(sorted[0].last_name, "Lewis");
/// ```
pub fn sort_by_property(records: &[Record], property: Property, order: Order) -> Vec<Record> {
    let compare: fn(&str, &str) -> Ordering = match order {
        Order::Asc => ascending,
        Order::Desc => descending,
    };
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a.property(property), b.property(property)));
    sorted
}

/// Sort by email descending; records with equal emails order by last name
/// ascending. This is the only multi key sort in the system.
pub fn sort_by_email_desc_then_last_name_asc(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        if a.email == b.email {
            ascending(&a.last_name, &b.last_name)
        } else {
            descending(&a.email, &b.email)
        }
    });
    sorted
}

/// Sort by date of birth, oldest first.
///
/// Unlike [sort_by_property] this parses the field into a calendar date
/// before comparing, so `12/01/1990` orders before `02/01/1991`. Input is
/// assumed well formed; a field that fails to parse orders before all valid
/// dates.
pub fn sort_by_birth_date_asc(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let left = parse_birth_date(&a.date_of_birth);
        let right = parse_birth_date(&b.date_of_birth);
        left.cmp(&right)
    });
    sorted
}

/// Sort by last name, descending, string comparison.
pub fn sort_by_last_name_desc(records: &[Record]) -> Vec<Record> {
    sort_by_property(records, Property::LastName, Order::Desc)
}

fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, BIRTH_DATE_FORMAT).ok()
}
