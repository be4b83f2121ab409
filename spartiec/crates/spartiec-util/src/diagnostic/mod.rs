//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! diagnostics: errors with their notes and help messages.
//!
//! # Examples
//!
//! ```
//! use spartiec_util::diagnostic::{DiagnosticBuilder, Handler, SourceSnippet};
//! use spartiec_util::diagnostic::E_LEXER_UNEXPECTED_CHAR;
//! use spartiec_util::Span;
//!
//! let source = "var # = 1;";
//! let span = Span::at_offset(source, 4).unwrap();
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '#' at 4")
//!     .code(E_LEXER_UNEXPECTED_CHAR)
//!     .span(span)
//!     .snippet(SourceSnippet::from_source(source, span).unwrap())
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{E_LEXER_INVALID_NUMBER, E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use spartiec_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Note), "note");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops processing
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic as multi-line text.
    ///
    /// `origin` names where the source came from (usually a file path) and
    /// is printed in the location line when given.
    ///
    /// ```
    /// use spartiec_util::diagnostic::{Diagnostic, E_LEXER_INVALID_NUMBER};
    /// use spartiec_util::Span;
    ///
    /// let diag = Diagnostic::error("invalid number", Span::new(0, 5, 2, 1))
    ///     .with_code(E_LEXER_INVALID_NUMBER);
    /// assert_eq!(
    ///     diag.render(Some("main.sp")),
    ///     "error[E1003]: invalid number\n --> main.sp:2:1"
    /// );
    /// ```
    pub fn render(&self, origin: Option<&str>) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };

        if self.span != Span::DUMMY {
            match origin {
                Some(origin) => out.push_str(&format!(
                    "\n --> {}:{}:{}",
                    origin, self.span.line, self.span.column
                )),
                None => out.push_str(&format!(
                    "\n --> line {}, column {}",
                    self.span.line, self.span.column
                )),
            }
        }

        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = {}: {}", Level::Note, note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = {}: {}", Level::Help, help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and renders them together once a
/// phase is done.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every collected diagnostic, separated by blank lines
    pub fn render_all(&self, origin: Option<&str>) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.render(origin))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
