//! Lexical tokens and source positions.
use core::fmt;

use bstr::{BStr, ByteSlice};

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// A double-quoted string; the text excludes the quotes.
    String,
    /// A run of digits, `.` and `-`.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// End of input. Sticky: every read past the end yields it again.
    Eof,
    /// Anything the tokenizer cannot classify.
    Invalid,
}

impl TokenKind {
    /// Upper-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "CURLY_LBRACE",
            TokenKind::RightBrace => "CURLY_RBRACE",
            TokenKind::LeftBracket => "SQUARE_LBRACE",
            TokenKind::RightBracket => "SQUARE_RBRACE",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Eof => "EOF",
            TokenKind::Invalid => "INVALID",
        }
    }

    /// Maps a single-byte punctuator to its kind and static text.
    pub(crate) fn punctuator(b: u8) -> Option<(Self, &'static [u8])> {
        let pair: (Self, &'static [u8]) = match b {
            b'{' => (TokenKind::LeftBrace, b"{"),
            b'}' => (TokenKind::RightBrace, b"}"),
            b'[' => (TokenKind::LeftBracket, b"["),
            b']' => (TokenKind::RightBracket, b"]"),
            b',' => (TokenKind::Comma, b","),
            b':' => (TokenKind::Colon, b":"),
            _ => return None,
        };
        Some(pair)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical unit: kind, literal text and the byte offset it starts at.
///
/// `text` borrows from the source buffer (or from a static literal for
/// punctuation and EOF), so a token cannot outlive the input it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Lexical category.
    pub kind: TokenKind,
    /// Literal text. Strings exclude their quotes and are not unescaped.
    pub text: &'src BStr,
    /// Byte offset of the first byte of the token in the source.
    pub offset: usize,
}

impl<'src> Token<'src> {
    pub(crate) fn new(kind: TokenKind, text: &'src [u8], offset: usize) -> Self {
        Self {
            kind,
            text: BStr::new(text),
            offset,
        }
    }

    /// Returns `true` if this is the end-of-input token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' at {}", self.kind, self.text, self.offset)
    }
}

/// A location in the source, 1-based line and column (columns count bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Computes line and column for `offset` by counting line feeds.
    ///
    /// Offsets past the end are clamped to the end of the source.
    #[must_use]
    pub fn locate(source: &[u8], offset: usize) -> Self {
        let clamped = offset.min(source.len());
        let before = &source[..clamped];
        let line = before.split(|&b| b == b'\n').count();
        let line_start = before.rfind_byte(b'\n').map_or(0, |nl| nl + 1);
        Self {
            offset,
            line,
            column: clamped - line_start + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn kind_names_match_diagnostics() {
        assert_eq!(TokenKind::LeftBracket.to_string(), "SQUARE_LBRACE");
        assert_eq!(TokenKind::RightBrace.to_string(), "CURLY_RBRACE");
        assert_eq!(TokenKind::Eof.name(), "EOF");
    }

    #[test]
    fn punctuators() {
        assert_eq!(
            TokenKind::punctuator(b':'),
            Some((TokenKind::Colon, &b":"[..]))
        );
        assert_eq!(TokenKind::punctuator(b'"'), None);
    }

    #[test]
    fn token_display() {
        let t = Token::new(TokenKind::String, b"abc", 4);
        assert_eq!(t.to_string(), "STRING 'abc' at 4");
    }

    #[test]
    fn locate_first_line() {
        let p = Position::locate(b"{\"a\": 1}", 5);
        assert_eq!((p.line, p.column), (1, 6));
    }

    #[test]
    fn locate_after_newlines() {
        let src = b"{\n  \"a\":\n  }";
        let p = Position::locate(src, 11);
        assert_eq!((p.line, p.column), (3, 3));
        assert_eq!(p.to_string(), "3:3");
    }

    #[test]
    fn locate_right_after_line_feed() {
        let p = Position::locate(b"a\n\nb", 3);
        assert_eq!((p.line, p.column), (3, 1));
        let p = Position::locate(b"", 0);
        assert_eq!((p.line, p.column), (1, 1));
    }

    #[test]
    fn locate_clamps_past_end() {
        let p = Position::locate(b"ab", 10);
        assert_eq!(p.offset, 10);
        assert_eq!((p.line, p.column), (1, 3));
    }
}
