use alloc::{collections::TryReserveError, string::String};

use thiserror::Error;

use crate::token::{Position, TokenKind};

/// A failed parse: what went wrong and where.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    kind: ErrorKind,
    /// Byte offset of the offending token.
    pub offset: usize,
    /// 1-based line of the offending token.
    pub line: usize,
    /// 1-based column (in bytes) of the offending token.
    pub column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: impl Into<ErrorKind>, at: Position) -> Self {
        Self {
            kind: kind.into(),
            offset: at.offset,
            line: at.line,
            column: at.column,
        }
    }

    /// The category of the failure.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The syntax error, if this failure was one.
    #[must_use]
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match &self.kind {
            ErrorKind::Syntax(e) => Some(e),
            ErrorKind::Allocation(_) => None,
        }
    }

    /// Where the failure was detected.
    #[must_use]
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }
}

/// Failure categories of [`ParseError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unexpected token or malformed literal.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// A string copy or array growth could not reserve memory.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Grammar violations found by the tree builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A token of the wrong kind at a grammar decision point.
    #[error("expected {expected}, got {found} '{text}'")]
    UnexpectedToken {
        /// What the grammar needed here.
        expected: &'static str,
        /// The kind of token found instead.
        found: TokenKind,
        /// The token's literal text, lossily decoded.
        text: String,
    },
    /// The input ended where more was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// What the grammar needed here.
        expected: &'static str,
    },
    /// A number literal that does not convert to `f64`.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// A string literal that is not valid UTF-8.
    #[error("invalid UTF-8 in string literal")]
    InvalidUtf8,
    /// A closing `}` or `]` directly after a comma.
    #[error("trailing comma before {0}")]
    TrailingComma(TokenKind),
    /// Tokens after the root value.
    #[error("trailing content {found} '{text}' after the root value")]
    TrailingContent {
        /// The kind of the first extra token.
        found: TokenKind,
        /// Its literal text.
        text: String,
    },
    /// More nested containers than the configured limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

/// Failure to find a key in a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The value is an object but has no such key.
    #[error("key '{0}' not found")]
    KeyNotFound(String),
    /// The value is not an object; carries its type name.
    #[error("cannot look up a key in {0}")]
    NotAnObject(&'static str),
}

/// Failure to load and parse a file.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("can't open file {}: {source}", .path.display())]
    Io {
        /// The path as given by the caller.
        path: std::path::PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file was read but is not a valid document.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
