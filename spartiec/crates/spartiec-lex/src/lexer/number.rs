//! Numeric literal recognition.
//!
//! A number is a run of decimal digits containing at most one `.`, which may
//! lead or trail. The lexeme is kept verbatim; converting it to a value is
//! left to later stages.

use super::Scanner;
use crate::classify::{is_digit, is_number_start};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Recognizes a numeric literal starting with a digit or `.`.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Decimal: `3.14`, `.5`, `5.`
    ///
    /// # Errors
    ///
    /// [`LexError::MalformedNumber`] on a second `.`; its lexeme runs from
    /// the start of the literal through that second point.
    pub(crate) fn number(&mut self) -> LexResult<Option<Token>> {
        if !is_number_start(self.cursor.current_char()) {
            return Ok(None);
        }

        let mut seen_point = false;
        loop {
            let c = self.cursor.current_char();
            if c == '.' {
                if seen_point {
                    self.cursor.advance();
                    return Err(LexError::MalformedNumber {
                        lexeme: self.cursor.slice_from(self.token_start).to_string(),
                        offset: self.token_start,
                        line: self.token_start_line,
                    });
                }
                seen_point = true;
            } else if !is_digit(c) {
                break;
            }
            self.cursor.advance();
        }

        Ok(Some(self.make_token(TokenKind::Number)))
    }
}
