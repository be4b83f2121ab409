//! spartiec-util - Shared foundation types for the Spartie toolchain
//!
//! This crate holds the pieces every phase of the toolchain needs but that do
//! not belong to any single phase:
//!
//! - [`span`] - byte ranges with 1-based line/column information, plus helpers
//!   for recovering a line of source text for display.
//! - [`diagnostic`] - error reporting: severity [`Level`]s, [`Diagnostic`]s with
//!   codes, notes, help text and [`SourceSnippet`]s, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`].
//! - [`error`] - failures of the utilities themselves.
//!
//! # Example
//!
//! ```
//! use spartiec_util::{DiagnosticBuilder, Handler, Span};
//! use spartiec_util::diagnostic::E_LEXER_UNEXPECTED_CHAR;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#' at 4")
//!     .code(E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SpanError, SpanResult};
pub use span::Span;
