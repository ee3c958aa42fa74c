use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiter;
use crate::property::Property;

/// Number of fields in a person record line.
pub const FIELD_COUNT: usize = 5;

/// A parsed person entry.
///
/// All five fields are plain strings. The date of birth keeps its textual
/// `MM/DD/YYYY` form; it is parsed into a calendar date only by the dedicated
/// birth date sort, never at parse time. No field is validated - an email is
/// not checked for an '@' and a date string is not checked to be a real date.
///
/// Field names serialize in camelCase: `lastName`, `firstName`, `email`,
/// `favoriteColor`, `dateOfBirth`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub favorite_color: String,
    pub date_of_birth: String,
}

impl Record {
    /// Parse a single line with a known delimiter.
    ///
    /// The line is split on the delimiter character and segments are assigned
    /// positionally: 0 - last name, 1 - first name, 2 - email, 3 - favorite
    /// color, 4 - date of birth. Input is assumed well formed: missing
    /// trailing segments become empty fields and segments past the fifth are
    /// silently discarded. No trimming or validation is performed.
    ///
    /// # Examples
    /// ```
    /// use person_record_sort::delimiter::Delimiter;
    /// use person_record_sort::record::Record;
    /// let record = Record::parse("Jones|Eric|ejones@example.com|blue|02/01/1991", Delimiter::Pipe);
    /// assert_eq!(record.last_name, "Jones");
    /// assert_eq!(record.date_of_birth, "02/01/1991");
    /// ```
    pub fn parse(line: &str, delimiter: Delimiter) -> Record {
        let mut parts = line.split(delimiter.as_char()).map(str::to_string);
        Record {
            last_name: parts.next().unwrap_or_default(),
            first_name: parts.next().unwrap_or_default(),
            email: parts.next().unwrap_or_default(),
            favorite_color: parts.next().unwrap_or_default(),
            date_of_birth: parts.next().unwrap_or_default(),
        }
    }

    /// Raw string value of the chosen property.
    pub fn property(&self, property: Property) -> &str {
        match property {
            Property::LastName => &self.last_name,
            Property::FirstName => &self.first_name,
            Property::Email => &self.email,
            Property::FavoriteColor => &self.favorite_color,
            Property::DateOfBirth => &self.date_of_birth,
        }
    }
}
