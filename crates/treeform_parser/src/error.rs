//! Parse error types.

use thiserror::Error;

use crate::Format;

/// Errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input cannot be interpreted under the format's rules.
    ///
    /// Displays as the format's fixed message, e.g. `Invalid JSON format`.
    #[error("{}", .format.error_message())]
    InvalidFormat {
        /// The format that rejected the input.
        format: Format,
    },

    /// No parser is registered under the requested id.
    #[error("Parser not found: {0}")]
    ParserNotFound(String),
}

impl ParseError {
    /// Creates an invalid format error.
    pub fn invalid(format: Format) -> Self {
        Self::InvalidFormat { format }
    }

    /// Creates a parser not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::ParserNotFound(id.into())
    }

    /// Returns the rejecting format, if this is a format error.
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::InvalidFormat { format } => Some(*format),
            Self::ParserNotFound(_) => None,
        }
    }
}
