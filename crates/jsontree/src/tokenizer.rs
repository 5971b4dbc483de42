//! Tokenizer: turns scanner state into [`Token`]s on demand.
//!
//! Tokens are produced lazily, one per call to
//! [`next_token`](Tokenizer::next_token). [`peek_token`](Tokenizer::peek_token)
//! gives one token of lookahead by tokenizing from a copy of the scanner, so
//! peeking never moves the real stream.
use alloc::vec::Vec;
use core::iter::FusedIterator;

use tracing::trace;

use crate::{
    scanner::{self, Scanner},
    token::{Token, TokenKind},
};

const EOF_TEXT: &[u8] = b"EOF";

/// Lexer over a borrowed source buffer.
#[derive(Debug, Clone)]
pub struct Tokenizer<'src> {
    scanner: Scanner<'src>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned before the first token of `source`.
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// The buffer being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src [u8] {
        self.scanner.source()
    }

    /// Offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Consumes and returns the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token<'src> {
        let token = self.lex();
        trace!(
            kind = token.kind.name(),
            offset = token.offset,
            len = token.text.len(),
            "token"
        );
        token
    }

    /// Returns the token [`next_token`](Self::next_token) would return,
    /// without consuming it.
    #[must_use]
    pub fn peek_token(&self) -> Token<'src> {
        let mut snapshot = Tokenizer {
            scanner: self.scanner,
        };
        snapshot.lex()
    }

    fn lex(&mut self) -> Token<'src> {
        let s = &mut self.scanner;
        s.advance_while(scanner::is_whitespace);

        let offset = s.position();
        let Some(b) = s.current() else {
            return Token::new(TokenKind::Eof, EOF_TEXT, offset);
        };

        if let Some((kind, text)) = TokenKind::punctuator(b) {
            s.advance();
            return Token::new(kind, text, offset);
        }

        match b {
            b'"' => self.scan_string(),
            b if scanner::is_number_start(b) => self.scan_number(),
            b if b.is_ascii_alphabetic() => self.scan_keyword(),
            _ => {
                // Step over the byte so repeated reads make progress.
                s.advance();
                Token::new(TokenKind::Invalid, b"", offset)
            }
        }
    }

    /// Scans a string literal. The cursor is on the opening quote.
    ///
    /// The literal text is everything between the quotes, undecoded. A
    /// backslash keeps the byte after it inside the literal, so `\"` does not
    /// terminate the string. Running out of input before the closing quote
    /// yields an `Invalid` token holding the partial text.
    fn scan_string(&mut self) -> Token<'src> {
        let s = &mut self.scanner;
        let offset = s.position();
        let start = offset + 1;
        s.advance();

        loop {
            match s.current() {
                None => return Token::new(TokenKind::Invalid, s.slice_from(start), offset),
                Some(b'"') => break,
                Some(b'\\') => {
                    s.advance();
                    s.advance();
                }
                Some(_) => s.advance(),
            }
        }

        let text = s.slice_from(start);
        // Closing quote.
        s.advance();
        Token::new(TokenKind::String, text, offset)
    }

    fn scan_number(&mut self) -> Token<'src> {
        let s = &mut self.scanner;
        let start = s.position();
        s.advance_while(scanner::is_number_continue);
        Token::new(TokenKind::Number, s.slice_from(start), start)
    }

    fn scan_keyword(&mut self) -> Token<'src> {
        let s = &mut self.scanner;
        let start = s.position();
        s.advance_while(|b| b.is_ascii_alphabetic());
        let text = s.slice_from(start);
        let kind = match text {
            b"true" | b"false" => TokenKind::Boolean,
            b"null" => TokenKind::Null,
            _ => TokenKind::Invalid,
        };
        Token::new(kind, text, start)
    }
}

/// Yields tokens up to, not including, EOF.
impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenizes the whole of `source`, stopping before EOF.
///
/// ```rust
/// use jsontree::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize(br#"{"a": [1]}"#).iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::LeftBrace,
///         TokenKind::String,
///         TokenKind::Colon,
///         TokenKind::LeftBracket,
///         TokenKind::Number,
///         TokenKind::RightBracket,
///         TokenKind::RightBrace,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(source: &[u8]) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}
