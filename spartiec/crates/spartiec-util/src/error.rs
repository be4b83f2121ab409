//! Core error types for spartiec-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span and source lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Span out of bounds for the source
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the source in bytes
        source_len: usize,
        /// Start byte offset of the span
        span_start: usize,
        /// End byte offset of the span
        span_end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: u32,
        /// Number of lines in the source
        max_lines: usize,
    },

    /// Offset does not fall on a character boundary
    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
