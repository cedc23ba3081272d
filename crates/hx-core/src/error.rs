//! Error types for the reading engine.

/// Alias for `Result<T, HxError>`.
pub type HxResult<T> = Result<T, HxError>;

/// Errors that can occur while building a table or resolving a reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HxError {
    /// A binary line pattern has no entry in the hexagram table.
    #[error("no hexagram matches line pattern {key}")]
    TableResolution {
        /// The unmatched pattern, bottom line first.
        key: String,
    },

    /// A hexagram number outside 1-64.
    #[error("hexagram number out of range: {0}")]
    NumberOutOfRange(u8),

    /// Two table entries share a number.
    #[error("duplicate hexagram number: {0}")]
    DuplicateNumber(u8),

    /// Two table entries share a line pattern.
    #[error("duplicate line pattern {key} (hexagrams {first} and {second})")]
    DuplicatePattern {
        /// The repeated pattern, bottom line first.
        key: String,
        /// Number of the entry that claimed the pattern first.
        first: u8,
        /// Number of the entry that repeated it.
        second: u8,
    },

    /// A line value outside 6-9.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLine(u8),

    /// A sequence that should hold six lines holds a different count.
    #[error("expected 6 lines, got {0}")]
    WrongLineCount(usize),

    /// A binary line value other than 0 or 1.
    #[error("invalid binary line: {0} (expected 0 or 1)")]
    InvalidBit(u8),

    /// A table lookup that does not lead back to where it started.
    #[error("pattern {key} resolves to hexagram {number}, whose lines are {found}")]
    RoundTrip {
        /// The pattern looked up, bottom line first.
        key: String,
        /// The number it resolved to.
        number: u8,
        /// The lines stored under that number, or `"missing"`.
        found: String,
    },

    /// A deserialized reading whose parts disagree with each other.
    #[error("inconsistent reading: {0}")]
    InconsistentReading(String),

    /// Malformed JSON input.
    #[error("invalid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for HxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
