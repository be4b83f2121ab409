//! Span module - Source location tracking.
//!
//! This module provides [`Span`], a byte range in a source text together
//! with the 1-based line and column where it starts, and a couple of helpers
//! for getting back to the text a span points at.
//!
//! # Examples
//!
//! ```
//! use spartiec_util::span::Span;
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.text("var abc = 1;").unwrap(), "abc");
//! ```

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers (for human-readable output)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span covering the character at `offset` in `source`.
    ///
    /// Line and column are computed from the text, so the caller only needs
    /// to know the byte offset.
    ///
    /// ```
    /// use spartiec_util::span::Span;
    ///
    /// let span = Span::at_offset("a\nbc", 3).unwrap();
    /// assert_eq!((span.line, span.column), (2, 2));
    /// assert_eq!(span.len(), 1);
    /// ```
    pub fn at_offset(source: &str, offset: usize) -> SpanResult<Self> {
        let (line, column) = line_column(source, offset)?;
        let width = source[offset..].chars().next().map_or(0, char::len_utf8);
        Ok(Self::new(offset, offset + width, line, column))
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the source text covered by this span.
    pub fn text<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        self.validate(source)?;
        Ok(&source[self.start..self.end])
    }

    fn validate(&self, source: &str) -> SpanResult<()> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        for offset in [self.start, self.end] {
            if !source.is_char_boundary(offset) {
                return Err(SpanError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }
}

/// Computes the 1-based line and column of a byte offset.
///
/// Columns count characters, not bytes. An offset equal to the source length
/// is valid and refers to the end of input.
pub fn line_column(source: &str, offset: usize) -> SpanResult<(u32, u32)> {
    if offset > source.len() {
        return Err(SpanError::SpanOutOfBounds {
            source_len: source.len(),
            span_start: offset,
            span_end: offset,
        });
    }
    if !source.is_char_boundary(offset) {
        return Err(SpanError::NotCharBoundary(offset));
    }

    let before = &source[..offset];
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() as u32 + 1;
    Ok((line, column))
}

/// Returns the text of a 1-based line, without its line terminator.
///
/// A trailing carriage return is stripped as well.
pub fn line_text(source: &str, line: u32) -> SpanResult<&str> {
    let max_lines = source.split('\n').count();
    if line == 0 || line as usize > max_lines {
        return Err(SpanError::InvalidLineNumber { line, max_lines });
    }
    let text = source
        .split('\n')
        .nth(line as usize - 1)
        .unwrap_or_default();
    Ok(text.strip_suffix('\r').unwrap_or(text))
}
