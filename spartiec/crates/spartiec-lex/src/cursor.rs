//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and counts lines for the tokens it produces.

/// A cursor for traversing source code character by character.
///
/// The position is a byte offset. The line advances only through
/// [`Cursor::advance`], so the line counter moves exactly once per newline
/// the scanner consumes. Columns are not tracked; error reporting recovers
/// them from the byte offset.
///
/// # Example
///
/// ```
/// use spartiec_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// assert!(cursor.next_is('r'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns true if the character after the current one is `expected`.
    ///
    /// This is the scanner's one-character lookahead; it never moves the
    /// cursor.
    ///
    /// ```
    /// use spartiec_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert!(cursor.next_is('='));
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[inline]
    pub fn next_is(&self, expected: char) -> bool {
        self.next_position()
            .is_some_and(|pos| self.char_at(pos) == expected)
    }

    fn next_position(&self) -> Option<usize> {
        if self.is_at_end() {
            return None;
        }
        let next = self.position + self.current_char().len_utf8();
        (next < self.source.len()).then_some(next)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Counts the newline if it steps over one. Does nothing if already at
    /// end.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let c = self.current_char();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut consumed = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            consumed += 1;
        }
        consumed
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
