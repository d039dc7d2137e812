//! Error types for bigraph-convert
//!
//! Every failure is fatal: the converter is a one-shot batch tool and never
//! retries. Variants are grouped by [`ErrorKind`] so callers can report the
//! category without matching every case.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text does not follow the graph notation
    MalformedInput,
    /// Value does not fit the 16-bit binary layout
    Encoding,
    /// I/O errors
    Io,
    /// Configuration errors
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedInput => "malformed_input",
            ErrorKind::Encoding => "encoding",
            ErrorKind::Io => "io",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input has no header line
    #[error("Malformed input: empty graph file")]
    EmptyInput,

    /// `)` seen with no open field
    #[error("Malformed input: unbalanced ')' at column {column}")]
    UnbalancedParen { column: usize },

    /// Header line ended inside a field
    #[error("Malformed input: unterminated field '{partial}'")]
    UnterminatedField { partial: String },

    /// Field body is not `<index>, <label>`
    #[error("Malformed input: field '{field}' is not of the form '<index>, <label>'")]
    MalformedField { field: String },

    /// Field index is not an integer
    #[error("Malformed input: invalid vertex index '{text}'")]
    InvalidIndex { text: String },

    /// Same index appears twice in the header
    #[error("Malformed input: duplicate vertex index {index}")]
    DuplicateIndex { index: usize },

    /// Header indices are not dense over 0..count
    #[error("Malformed input: vertex index {index} out of range for {count} labelled vertices")]
    IndexOutOfRange { index: usize, count: usize },

    /// Line 1 is not `roots vertices sites`
    #[error("Malformed input: expected 'roots vertices sites' on line 2, found '{line}'")]
    InvalidCountLine { line: String },

    /// Declared vertex count disagrees with the header
    #[error("Malformed input: header labels {labelled} vertices but line 2 declares {declared}")]
    VertexCountMismatch { declared: usize, labelled: usize },

    /// File ends before the matrix does
    #[error("Malformed input: expected {expected} adjacency rows, found {found}")]
    MissingMatrixRows { expected: usize, found: usize },

    /// Matrix row shorter than the vertex count
    #[error("Malformed input: adjacency row {row} has {found} columns, expected {expected}")]
    ShortMatrixRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Graph parts disagree in size
    #[error("Malformed input: {0}")]
    InconsistentGraph(String),

    /// Value overflows a 16-bit word
    #[error("Encoding error: {field} value {value} does not fit in a 16-bit word")]
    WordOverflow { field: &'static str, value: usize },

    /// Label missing from the shared dictionary
    #[error("Encoding error: label '{0}' is not in the label dictionary")]
    UnknownLabel(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ConvertError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Io(_) => ErrorKind::Io,
            ConvertError::WordOverflow { .. } | ConvertError::UnknownLabel(_) => {
                ErrorKind::Encoding
            }
            ConvertError::Config(_) => ErrorKind::Config,
            _ => ErrorKind::MalformedInput,
        }
    }

    /// Create an inconsistent-graph error
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        ConvertError::InconsistentGraph(msg.into())
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        assert_eq!(
            ConvertError::DuplicateIndex { index: 3 }.kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            ConvertError::WordOverflow {
                field: "vertex count",
                value: 70000
            }
            .kind(),
            ErrorKind::Encoding
        );
        assert_eq!(
            ConvertError::UnknownLabel("Foo".into()).kind(),
            ErrorKind::Encoding
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ConvertError::from(io).kind(), ErrorKind::Io);
        assert_eq!(
            ConvertError::from(ConfigError::MissingVersion).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_error_display() {
        let err = ConvertError::WordOverflow {
            field: "label id",
            value: 65536,
        };
        assert_eq!(
            err.to_string(),
            "Encoding error: label id value 65536 does not fit in a 16-bit word"
        );

        let err = ConvertError::MissingMatrixRows {
            expected: 4,
            found: 2,
        };
        assert!(err.to_string().contains("expected 4 adjacency rows, found 2"));
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(ErrorKind::MalformedInput.to_string(), "malformed_input");
        assert_eq!(ErrorKind::Encoding.as_str(), "encoding");
    }
}
