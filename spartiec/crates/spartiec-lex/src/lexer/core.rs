//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, separator skipping and the
//! ordered recognizer dispatch.

use tracing::{debug, trace};

use crate::classify::is_same_line_separator;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::tables::LexemeTables;
use crate::token::{Token, TokenKind};

/// A recognizer inspects the character under the cursor. It either declines
/// without moving the cursor (`Ok(None)`), consumes one token, or fails.
type Recognizer<'a> = fn(&mut Scanner<'a>) -> LexResult<Option<Token>>;

/// Scanner for Spartie source text.
///
/// A scanner owns a cursor over one source string and borrows a pair of
/// lookup tables. It yields significant tokens in source order; line
/// comments are consumed but never yielded.
///
/// # Example
///
/// ```
/// use spartiec_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("print x;").scan().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Print, TokenKind::Identifier, TokenKind::Semicolon]
/// );
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Single-character and keyword tables.
    pub(crate) tables: &'a LexemeTables,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Set once the end of input or an error has been yielded.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Recognizers in priority order. The first one that accepts wins.
    const RECOGNIZERS: [Recognizer<'a>; 6] = [
        Self::single_character,
        Self::comparison,
        Self::divide_or_comment,
        Self::string,
        Self::number,
        Self::identifier_or_keyword,
    ];

    /// Creates a scanner over `source` using the standard Spartie tables.
    pub fn new(source: &'a str) -> Self {
        Self::with_tables(source, LexemeTables::standard())
    }

    /// Creates a scanner over `source` that consults `tables`.
    pub fn with_tables(source: &'a str, tables: &'a LexemeTables) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables,
            token_start: 0,
            token_start_line: 1,
            finished: false,
        }
    }

    /// Scans the whole source.
    ///
    /// Returns every significant token in source order, or the first lexical
    /// error. No partial sequence is returned alongside an error.
    pub fn scan(mut self) -> LexResult<Vec<Token>> {
        debug!(bytes = self.cursor.source().len(), "scan started");
        let mut tokens = Vec::new();

        for token in &mut self {
            match token {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    debug!(error = %err, "scan failed");
                    return Err(err);
                },
            }
        }

        debug!(
            tokens = tokens.len(),
            lines = self.line(),
            "scan finished"
        );
        Ok(tokens)
    }

    /// Returns the next token, including ignorable ones.
    ///
    /// Skips separators first. Returns `Ok(None)` at the end of input.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        self.skip_separators();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        for recognize in Self::RECOGNIZERS {
            if let Some(token) = recognize(self)? {
                return Ok(Some(token));
            }
        }

        Err(LexError::UnexpectedCharacter {
            character: self.cursor.current_char(),
            offset: self.token_start,
            line: self.token_start_line,
        })
    }

    /// Skips spaces, carriage returns and newlines.
    ///
    /// Each newline bumps the line counter. Does nothing if the cursor is not
    /// on a separator.
    pub fn skip_separators(&mut self) {
        loop {
            self.cursor.advance_while(is_same_line_separator);
            if self.cursor.advance_while(|c| c == '\n') == 0 {
                break;
            }
        }
    }

    /// Builds a token of `kind` whose lexeme runs from the token start to the
    /// cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = LexResult<Token>;

    /// Yields significant tokens. After an error or the end of input the
    /// iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.next_token() {
                Ok(Some(token)) if token.is_ignored() => continue,
                Ok(Some(token)) => {
                    trace!(
                        kind = %token.kind(),
                        lexeme = token.lexeme(),
                        line = token.line(),
                        "token"
                    );
                    return Some(Ok(token));
                },
                Ok(None) => self.finished = true,
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                },
            }
        }
        None
    }
}
