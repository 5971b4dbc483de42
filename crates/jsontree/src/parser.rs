//! The recursive-descent tree builder.
//!
//! [`Parser`] pulls tokens from a [`Tokenizer`] and builds a [`Value`] tree,
//! one function per grammar rule. Composite values are assembled locally and
//! only returned once complete; when a nested rule fails, the `?` chain
//! unwinds and everything built so far is dropped on the way out.
//!
//! # Examples
//!
//! ```rust
//! use jsontree::{Value, parse};
//!
//! let root = parse(br#"{"key": [null, true, 3.5]}"#).unwrap();
//! let items = root.get("key").and_then(Value::as_array).unwrap();
//! assert_eq!(items[2], Value::Number(3.5));
//! ```
use alloc::string::String;
use core::str;

use bstr::ByteSlice;
use tracing::{debug, trace};

use crate::{
    error::{ErrorKind, ParseError, SyntaxError},
    options::ParserOptions,
    token::{Position, Token, TokenKind},
    tokenizer::Tokenizer,
    value::{Array, Map, Value},
};

/// Builds a [`Value`] tree from a borrowed source buffer.
///
/// A parser serves a single parse. After an error its position is wherever the
/// failing rule stopped and it should be discarded.
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    tokens: Tokenizer<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'src [u8], options: ParserOptions) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            options,
            depth: 0,
        }
    }

    /// Parses one document: a single root value, followed by end of input
    /// unless [`ParserOptions::allow_trailing_content`] is set.
    ///
    /// # Errors
    ///
    /// Returns the first syntax or allocation error encountered.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;

        if !self.options.allow_trailing_content {
            let next = self.tokens.peek_token();
            if !next.is_eof() {
                return Err(self.error_at(
                    next.offset,
                    SyntaxError::TrailingContent {
                        found: next.kind,
                        text: lossy(&next),
                    },
                ));
            }
        }

        Ok(value)
    }

    /// Parses the next value in the token stream.
    ///
    /// End of input here is an error: a document never silently yields an
    /// absent value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the next tokens do not form a value.
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = self.tokens.next_token();
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(&token),
            TokenKind::LeftBracket => self.parse_array(&token),
            TokenKind::String => self.owned_text(&token).map(Value::String),
            TokenKind::Number => self.parse_number(&token),
            TokenKind::Boolean => Ok(Value::Boolean(token.text == "true")),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::RightBrace
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Eof
            | TokenKind::Invalid => Err(self.unexpected(&token, "a value")),
        }
    }

    /// Parses the members of an object whose `{` has been consumed.
    fn parse_object(&mut self, open: &Token<'src>) -> Result<Value, ParseError> {
        self.enter(open)?;
        let mut map = Map::new();

        while self.tokens.peek_token().kind != TokenKind::RightBrace {
            let key_token = self.tokens.next_token();
            if key_token.kind != TokenKind::String {
                return Err(self.unexpected(&key_token, "string key"));
            }
            let key = self.owned_text(&key_token)?;

            let colon = self.tokens.next_token();
            if colon.kind != TokenKind::Colon {
                return Err(self.unexpected(&colon, "':'"));
            }

            let value = self.parse_value()?;

            // Last write wins; the replaced value is dropped here.
            if let Some(replaced) = map.insert(key, value) {
                debug!(
                    offset = key_token.offset,
                    replaced = replaced.type_name(),
                    "duplicate key, keeping the last value"
                );
            }

            if !self.separator(TokenKind::RightBrace, "',' or '}'")? {
                break;
            }
        }

        self.tokens.next_token();
        self.leave(open);
        Ok(Value::Object(map))
    }

    /// Parses the elements of an array whose `[` has been consumed.
    fn parse_array(&mut self, open: &Token<'src>) -> Result<Value, ParseError> {
        self.enter(open)?;
        let mut items = Array::new();
        items
            .try_reserve_exact(1)
            .map_err(|e| self.error_at(open.offset, e))?;

        while self.tokens.peek_token().kind != TokenKind::RightBracket {
            let value = self.parse_value()?;
            if items.len() == items.capacity() {
                // Double, as the backing sequence grows geometrically.
                items
                    .try_reserve_exact(items.len())
                    .map_err(|e| self.error_at(open.offset, e))?;
            }
            items.push(value);

            if !self.separator(TokenKind::RightBracket, "',' or ']'")? {
                break;
            }
        }

        self.tokens.next_token();
        self.leave(open);
        Ok(Value::Array(items))
    }

    /// Decides what follows a member or element.
    ///
    /// Returns `Ok(false)` when the closing token is next (left unconsumed),
    /// `Ok(true)` after consuming a comma that is followed by more content.
    fn separator(&mut self, close: TokenKind, expected: &'static str) -> Result<bool, ParseError> {
        let next = self.tokens.peek_token();
        if next.kind == close {
            return Ok(false);
        }
        if next.kind != TokenKind::Comma {
            return Err(self.unexpected(&next, expected));
        }

        self.tokens.next_token();
        let after = self.tokens.peek_token();
        if after.kind == close {
            return Err(self.error_at(after.offset, SyntaxError::TrailingComma(close)));
        }
        Ok(true)
    }

    fn parse_number(&self, token: &Token<'src>) -> Result<Value, ParseError> {
        str::from_utf8(token.text)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .map(Value::Number)
            .ok_or_else(|| self.error_at(token.offset, SyntaxError::InvalidNumber(lossy(token))))
    }

    /// Copies a string literal into an owned, UTF-8 checked `String`.
    fn owned_text(&self, token: &Token<'src>) -> Result<String, ParseError> {
        let text = str::from_utf8(token.text)
            .map_err(|_| self.error_at(token.offset, SyntaxError::InvalidUtf8))?;
        let mut owned = String::new();
        owned
            .try_reserve_exact(text.len())
            .map_err(|e| self.error_at(token.offset, e))?;
        owned.push_str(text);
        Ok(owned)
    }

    fn enter(&mut self, open: &Token<'src>) -> Result<(), ParseError> {
        self.depth += 1;
        if let Some(limit) = self.options.max_nesting_depth {
            if self.depth > limit {
                return Err(self.error_at(open.offset, SyntaxError::NestingTooDeep { limit }));
            }
        }
        trace!(depth = self.depth, kind = open.kind.name(), offset = open.offset, "open");
        Ok(())
    }

    fn leave(&mut self, open: &Token<'src>) {
        trace!(depth = self.depth, kind = open.kind.name(), "close");
        self.depth -= 1;
    }

    fn unexpected(&self, token: &Token<'src>, expected: &'static str) -> ParseError {
        let err = if token.is_eof() {
            SyntaxError::UnexpectedEndOfInput { expected }
        } else {
            SyntaxError::UnexpectedToken {
                expected,
                found: token.kind,
                text: lossy(token),
            }
        };
        self.error_at(token.offset, err)
    }

    fn error_at(&self, offset: usize, kind: impl Into<ErrorKind>) -> ParseError {
        ParseError::new(kind, Position::locate(self.tokens.source(), offset))
    }
}

fn lossy(token: &Token<'_>) -> String {
    token.text.to_str_lossy().into_owned()
}

/// Parses a complete document with default options.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found; no partial
/// tree is returned.
pub fn parse(source: &[u8]) -> Result<Value, ParseError> {
    parse_with_options(source, ParserOptions::default())
}

/// Parses a complete document.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found; no partial
/// tree is returned.
pub fn parse_with_options(source: &[u8], options: ParserOptions) -> Result<Value, ParseError> {
    let result = Parser::new(source, options).parse();
    match &result {
        Ok(root) => debug!(bytes = source.len(), root = root.type_name(), "parsed document"),
        Err(err) => debug!(bytes = source.len(), error = %err, "parse failed"),
    }
    result
}
