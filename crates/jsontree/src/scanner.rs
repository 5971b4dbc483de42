//! Scanner: a byte cursor over the source buffer.
//!
//! The scanner owns no data. It addresses the caller's buffer through two
//! offsets: `position`, where [`current`](Scanner::current) was read from, and
//! `lookahead_position`, the next byte [`advance`](Scanner::advance) will read.
//!
//! Invariants
//! - After construction the scanner is primed: `current` already holds the
//!   first byte (or the end-of-input sentinel for an empty buffer).
//! - `lookahead_position == position + 1` at all times.
//! - Once the end is reached, `current` stays `None` and further calls to
//!   `advance` keep it there.
//!
//! The type is `Copy` so the tokenizer can snapshot it for lookahead.

/// Cursor over a borrowed byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner<'src> {
    source: &'src [u8],
    position: usize,
    lookahead_position: usize,
    current: Option<u8>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned on the first byte of `source`.
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        let mut scanner = Self {
            source,
            position: 0,
            lookahead_position: 0,
            current: None,
        };
        scanner.advance();
        scanner
    }

    /// Moves the cursor forward by one byte.
    ///
    /// Reads the byte at the lookahead offset into `current` (or the
    /// end-of-input sentinel when out of bounds), then moves both offsets.
    pub fn advance(&mut self) {
        self.current = self.source.get(self.lookahead_position).copied();
        // Parked one past the end: offsets stop moving.
        if self.lookahead_position <= self.source.len() {
            self.position = self.lookahead_position;
            self.lookahead_position += 1;
        }
    }

    /// Advances while `pred` holds for the current byte.
    pub fn advance_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current {
            if !pred(b) {
                break;
            }
            self.advance();
        }
    }

    /// The byte under the cursor, `None` at end of input.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Offset of the byte under the cursor.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Offset the next call to [`advance`](Self::advance) reads from.
    #[inline]
    #[must_use]
    pub fn lookahead_position(&self) -> usize {
        self.lookahead_position
    }

    /// The whole buffer being scanned.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Returns `true` once the cursor has moved past the last byte.
    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Borrows `source[start..self.position()]`, clamped to the buffer.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        let end = self.position.min(self.source.len());
        let start = start.min(end);
        &self.source[start..end]
    }
}

/// JSON insignificant whitespace: space, tab, line feed, carriage return.
#[inline]
#[must_use]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that may start a number literal.
#[inline]
#[must_use]
pub fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-'
}

/// Bytes consumed greedily once a number literal has started.
///
/// No placement rules are checked here; `1-2.3` scans as one literal and is
/// rejected later by numeric conversion.
#[inline]
#[must_use]
pub fn is_number_continue(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_first_byte() {
        let s = Scanner::new(b"ab");
        assert_eq!(s.current(), Some(b'a'));
        assert_eq!(s.position(), 0);
        assert_eq!(s.lookahead_position(), 1);
    }

    #[test]
    fn empty_source_starts_at_end() {
        let s = Scanner::new(b"");
        assert!(s.is_at_end());
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn advance_walks_then_sticks_at_end() {
        let mut s = Scanner::new(b"xy");
        s.advance();
        assert_eq!(s.current(), Some(b'y'));
        assert_eq!(s.position(), 1);
        s.advance();
        assert_eq!(s.current(), None);
        assert!(s.is_at_end());
        assert_eq!(s.position(), 2);
        for _ in 0..5 {
            s.advance();
        }
        assert_eq!(s.current(), None);
        assert_eq!(s.slice_from(0), b"xy");
    }

    #[test]
    fn advance_while_stops_on_predicate() {
        let mut s = Scanner::new(b"123.5-x");
        s.advance_while(is_number_continue);
        assert_eq!(s.current(), Some(b'x'));
        assert_eq!(s.slice_from(0), b"123.5-");
    }

    #[test]
    fn copies_are_independent() {
        let mut a = Scanner::new(b"abc");
        let snapshot = a;
        a.advance();
        assert_eq!(snapshot.current(), Some(b'a'));
        assert_eq!(a.current(), Some(b'b'));
    }

    #[test]
    fn classification() {
        for b in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_whitespace(b));
        }
        assert!(!is_whitespace(0x0c));
        assert!(is_number_start(b'-'));
        assert!(is_number_start(b'7'));
        assert!(!is_number_start(b'.'));
        assert!(is_number_continue(b'.'));
        assert!(!is_number_continue(b'e'));
    }
}
