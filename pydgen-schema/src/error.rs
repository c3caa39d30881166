//! Error types for SDL parsing.

use std::fmt;
use thiserror::Error;

/// Line and column (both 1-based) of a location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number.
    pub line: usize,
    /// Column number, counted in characters.
    pub column: usize,
}

impl Position {
    /// Computes the position of a byte offset inside `source`.
    #[must_use]
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error type for SDL parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A character sequence that is not a GraphQL token.
    #[error("unexpected character '{text}' at {position}")]
    UnexpectedCharacter {
        /// Offending source text.
        text: String,
        /// Location in the source.
        position: Position,
    },

    /// A token that does not fit the grammar at this point.
    #[error("expected {expected}, found '{found}' at {position}")]
    UnexpectedToken {
        /// Description of what the parser expected.
        expected: String,
        /// Source text of the token found instead.
        found: String,
        /// Location in the source.
        position: Position,
    },

    /// Input ended in the middle of a definition.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what the parser expected.
        expected: String,
    },

    /// An executable definition (operation or fragment) in a schema document.
    #[error(
        "unsupported definition '{keyword}' at {position}: only type-system definitions are allowed"
    )]
    UnsupportedDefinition {
        /// Keyword or token that opened the definition.
        keyword: String,
        /// Location in the source.
        position: Position,
    },

    /// List types or literal values nested beyond the parser's limit.
    #[error("nesting deeper than {limit} levels at {position}")]
    NestingTooDeep {
        /// Maximum accepted depth.
        limit: usize,
        /// Location of the bracket that exceeded it.
        position: Position,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an unexpected token error.
    pub fn unexpected(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: Position,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            position,
        }
    }

    /// Creates an unexpected end of input error.
    pub fn eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// Returns the source position of the error, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnsupportedDefinition { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::UnexpectedEof { .. } | Self::Io(_) => None,
        }
    }
}
