//! Positioned errors shared by the lexer and the parser
//!
//! Both stages report exactly one [`Error`] and stop. The value carries the
//! span and the source text so an outside formatter can render an annotated
//! snippet; this module only supplies the data and a one-line summary.

use super::position::Position;
use std::fmt;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer met a character that starts no token
    IllegalCharacter,
    /// A well-formed token appeared where the grammar does not allow it
    InvalidSyntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::IllegalCharacter => write!(f, "Illegal Character"),
            ErrorKind::InvalidSyntax => write!(f, "Invalid Syntax"),
        }
    }
}

/// A lexical or syntax error anchored at `[start, end)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {details}\n{start}")]
pub struct Error {
    pub kind: ErrorKind,
    pub start: Position,
    pub end: Position,
    pub details: String,
}

impl Error {
    pub fn new(
        kind: ErrorKind,
        start: Position,
        end: Position,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            details: details.into(),
        }
    }

    pub fn illegal_character(
        details: impl Into<String>,
        start: Position,
        end: Position,
    ) -> Self {
        Self::new(ErrorKind::IllegalCharacter, start, end, details)
    }

    pub fn invalid_syntax(
        details: impl Into<String>,
        start: Position,
        end: Position,
    ) -> Self {
        Self::new(ErrorKind::InvalidSyntax, start, end, details)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn end(&self) -> &Position {
        &self.end
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Full text of the source the error points into.
    pub fn source_text(&self) -> &str {
        self.start.text()
    }
}

/// Result type used by every lexer and parser stage
pub type ParseResult<T> = Result<T, Error>;
