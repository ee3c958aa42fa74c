use thiserror::Error;

/// The only failure the parsing core produces.
///
/// Raised when none of the supported delimiters splits a line into the
/// expected number of fields. The batch that triggered detection fails as a
/// whole; there is no partial parse.
#[derive(Error, Debug)]
#[error("unsupported delimiter: none of space, comma or pipe splits {line:?} into {expected} fields")]
pub struct UnsupportedDelimiter {
    /// The line detection was attempted on.
    pub line: String,
    /// The field count detection was asked to match.
    pub expected: usize,
}
