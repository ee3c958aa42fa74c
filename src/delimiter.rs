use crate::error::UnsupportedDelimiter;

/// Field separator for a person record line.
///
/// # Examples
/// ```
/// use person_record_sort::delimiter::Delimiter;
/// let delimiter = Delimiter::detect("Jones,Eric,ejones@example.com,blue,02/01/1991", 5)?;
/// assert_eq!(delimiter, Delimiter::Comma);
/// # Ok::<(), person_record_sort::error::UnsupportedDelimiter>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delimiter {
    /// ' '
    Space,
    /// ','
    Comma,
    /// '|'
    Pipe,
}

/// Detection candidates in priority order. Space is tried first, then comma,
/// then pipe.
pub(crate) const CANDIDATES: [Delimiter; 3] = [Delimiter::Space, Delimiter::Comma, Delimiter::Pipe];

impl Delimiter {
    /// The literal character this delimiter splits on.
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Space => ' ',
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
        }
    }

    /// Detect which delimiter splits `line` into exactly `expected_fields`
    /// segments.
    ///
    /// Candidates are tried in the fixed order space, comma, pipe and the
    /// first match wins. A line that happens to split into the expected count
    /// by more than one candidate therefore resolves to the earliest in that
    /// order. Detection is meant to run once per batch, on its first line,
    /// with the result reused for every remaining line.
    ///
    /// Returns [UnsupportedDelimiter] when no candidate produces the expected
    /// segment count, either because the line uses a separator outside the
    /// supported set or because its field count is wrong for all three.
    pub fn detect(line: &str, expected_fields: usize) -> Result<Delimiter, UnsupportedDelimiter> {
        for candidate in CANDIDATES {
            if line.split(candidate.as_char()).count() == expected_fields {
                log::debug!("Detected {:?} delimiter for line: {}", candidate, line);
                return Ok(candidate);
            }
        }
        Err(UnsupportedDelimiter {
            line: line.to_string(),
            expected: expected_fields,
        })
    }
}
