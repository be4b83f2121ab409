//! Lexical errors.
//!
//! Scanning stops at the first malformed lexeme. The error records the line
//! and byte offset where the offending lexeme starts so a caller can render
//! it with [`LexError::to_diagnostic`].

use spartiec_util::diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, E_LEXER_INVALID_NUMBER,
    E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING,
};
use spartiec_util::span::line_column;
use spartiec_util::Span;
use thiserror::Error;

/// Error produced when the source is not lexically well formed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// No recognizer accepts the character at the cursor.
    #[error("line {line}: Unexpected character '{character}' at {offset}")]
    UnexpectedCharacter {
        /// The rejected character
        character: char,
        /// Byte offset of the character
        offset: usize,
        /// Line of the character
        line: u32,
    },

    /// A string literal reached a newline or the end of input before its
    /// closing quote.
    #[error("line {line}: unterminated string")]
    UnterminatedString {
        /// Byte offset of the opening quote
        offset: usize,
        /// Line of the opening quote
        line: u32,
    },

    /// A number literal contains a second decimal point.
    #[error("line {line}: invalid number '{lexeme}' (multiple decimal points)")]
    MalformedNumber {
        /// Text scanned up to and including the second point
        lexeme: String,
        /// Byte offset where the literal starts
        offset: usize,
        /// Line where the literal starts
        line: u32,
    },
}

/// Result type alias for scanning.
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// 1-based line the offending lexeme starts on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedString { line, .. }
            | LexError::MalformedNumber { line, .. } => *line,
        }
    }

    /// Byte offset of the offending lexeme.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { offset, .. }
            | LexError::UnterminatedString { offset, .. }
            | LexError::MalformedNumber { offset, .. } => *offset,
        }
    }

    /// Diagnostic code for this error class.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => E_LEXER_UNTERMINATED_STRING,
            LexError::MalformedNumber { .. } => E_LEXER_INVALID_NUMBER,
        }
    }

    /// Message without the line prefix.
    pub fn message(&self) -> String {
        match self {
            LexError::UnexpectedCharacter {
                character, offset, ..
            } => format!("Unexpected character '{}' at {}", character.escape_debug(), offset),
            LexError::UnterminatedString { .. } => "unterminated string".to_string(),
            LexError::MalformedNumber { lexeme, .. } => {
                format!("invalid number '{}' (multiple decimal points)", lexeme)
            },
        }
    }

    /// Span of the offending lexeme within `source`.
    ///
    /// For unterminated strings the span runs from the opening quote to the
    /// end of its line.
    pub fn span(&self, source: &str) -> Span {
        let offset = self.offset().min(source.len());
        let (_, column) = line_column(source, offset).unwrap_or((self.line(), 1));
        let end = match self {
            LexError::UnexpectedCharacter { character, .. } => offset + character.len_utf8(),
            LexError::UnterminatedString { .. } => source
                .get(offset..)
                .and_then(|rest| rest.find('\n'))
                .map_or(source.len(), |i| offset + i),
            LexError::MalformedNumber { lexeme, .. } => offset + lexeme.len(),
        };
        Span::new(offset, end.min(source.len()), self.line(), column)
    }

    /// Converts the error into a diagnostic with a code, span and snippet.
    ///
    /// ```
    /// use spartiec_lex::scan;
    ///
    /// let source = "var x = 3.1.4;";
    /// let err = scan(source).unwrap_err();
    /// let diag = err.to_diagnostic(source);
    /// assert_eq!(diag.code.unwrap().as_str(), "E1003");
    /// assert_eq!(diag.snippets[0].line, source);
    /// ```
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = self.span(source);
        let mut builder = DiagnosticBuilder::error(self.message())
            .code(self.code())
            .span(span);

        if let Ok(snippet) = SourceSnippet::from_source(source, span) {
            builder = builder.snippet(snippet.with_label(self.label()));
        }

        builder = match self {
            LexError::UnexpectedCharacter { .. } => builder,
            LexError::UnterminatedString { .. } => builder
                .note("string literals must close on the line they start")
                .help("add a closing '\"'"),
            LexError::MalformedNumber { .. } => {
                builder.help("a number may contain at most one decimal point")
            },
        };
        builder.build()
    }

    fn label(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "no token starts here",
            LexError::UnterminatedString { .. } => "string starts here",
            LexError::MalformedNumber { .. } => "more than one decimal point",
        }
    }
}
