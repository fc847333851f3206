//! Error types for compatibility evaluation.
//!
//! Parsing fails fast: the first malformed line aborts the whole evaluation.

use thiserror::Error;

/// Result type for compatibility operations.
pub type Result<T> = std::result::Result<T, CompatError>;

/// Errors that can occur while reading judgments and runs or configuring a scorer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompatError {
    /// A line did not split into the number of fields its format requires.
    #[error("{source_name}:{line}: expected {expected} fields, found {found}")]
    FieldCount {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A grade or score field was not a real number.
    #[error("{source_name}:{line}: invalid {field} '{value}'")]
    InvalidNumber {
        source_name: String,
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Persistence outside the accepted range.
    #[error("Value of p = {0} out of range [0.01,0.99]")]
    PersistenceOutOfRange(f64),

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CompatError {
    fn from(e: std::io::Error) -> Self {
        CompatError::Io(e.to_string())
    }
}

impl CompatError {
    pub fn field_count(
        source_name: impl Into<String>,
        line: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        CompatError::FieldCount {
            source_name: source_name.into(),
            line,
            expected,
            found,
        }
    }

    pub fn invalid_number(
        source_name: impl Into<String>,
        line: usize,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        CompatError::InvalidNumber {
            source_name: source_name.into(),
            line,
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_value() {
        let err = CompatError::PersistenceOutOfRange(1.5);
        assert_eq!(err.to_string(), "Value of p = 1.5 out of range [0.01,0.99]");
    }

    #[test]
    fn field_count_message_names_source_and_line() {
        let err = CompatError::field_count("qrels.txt", 3, 4, 2);
        assert_eq!(err.to_string(), "qrels.txt:3: expected 4 fields, found 2");
    }
}
