//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Translation itself never fails; errors come from reading and parsing
/// the schema or from malformed configuration.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parse error.
    #[error("schema parse error: {0}")]
    Parse(#[from] pydgen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed scalar override, e.g. a `NAME=TARGET` pair without `=`.
    #[error("invalid scalar override '{entry}': {reason}")]
    InvalidScalar {
        /// Offending override text.
        entry: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Unknown enum style name.
    #[error("unknown enum style '{name}', expected 'str-enum' or 'str-mixin'")]
    UnknownEnumStyle {
        /// Style name given.
        name: String,
    },
}

impl CodegenError {
    /// Creates an invalid scalar override error.
    pub fn invalid_scalar(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidScalar {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}
