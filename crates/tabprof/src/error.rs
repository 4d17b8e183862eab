//! Error types for the tabprof library.

use thiserror::Error;

/// Main error type for profiling operations.
///
/// There are exactly two failure kinds: the input could not be turned into a
/// rectangular dataset, or the engine produced a result it cannot stand
/// behind (for example a floating-point overflow). Statistics that cannot be
/// computed for legitimate reasons are not errors; they are `None`.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The raw bytes do not describe a well-formed table.
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] MalformedInputError),

    /// A computation produced a non-finite or otherwise impossible value.
    #[error("Internal computation error: {0}")]
    InternalComputation(String),
}

impl ProfileError {
    /// Returns true if the error was caused by the caller's input.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ProfileError::MalformedInput(_))
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        ProfileError::InternalComputation(message.into())
    }
}

impl From<csv::Error> for ProfileError {
    fn from(err: csv::Error) -> Self {
        ProfileError::MalformedInput(MalformedInputError::Csv(err))
    }
}

/// Reasons the input could not be parsed into a dataset.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    /// The byte stream was empty.
    #[error("input is empty")]
    Empty,

    /// The bytes are not valid UTF-8.
    #[error("input is not valid UTF-8 (invalid byte at offset {offset})")]
    Encoding { offset: usize },

    /// No header row could be read.
    #[error("missing header row")]
    MissingHeader,

    /// A data row has a different number of fields than the header.
    #[error("ragged row at line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Two columns share the same name.
    #[error("duplicate column name '{name}' at position {position}")]
    DuplicateColumn { name: String, position: usize },

    /// A column does not have the same number of cells as the others.
    #[error("column '{column}' has {found} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Error from the CSV tokenizer.
    #[error("CSV error: {0}")]
    Csv(csv::Error),
}

/// Result type alias for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_classification() {
        let err: ProfileError = MalformedInputError::MissingHeader.into();
        assert!(err.is_malformed_input());

        let err = ProfileError::internal("overflow");
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_error_messages() {
        let err: ProfileError = MalformedInputError::RaggedRow {
            line: 3,
            expected: 2,
            found: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Malformed input: ragged row at line 3: expected 2 fields, found 3"
        );
    }
}
