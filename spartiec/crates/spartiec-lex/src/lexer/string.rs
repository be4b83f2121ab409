//! String literal recognition.
//!
//! Strings are delimited by `"` and must close on the line they open. There
//! are no escape sequences; a backslash is an ordinary character.

use super::Scanner;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Recognizes a string literal.
    ///
    /// The token's lexeme is the text between the quotes.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedString`] if a newline or the end of input
    /// comes before the closing quote. The error points at the opening quote.
    pub(crate) fn string(&mut self) -> LexResult<Option<Token>> {
        if self.cursor.current_char() != '"' {
            return Ok(None);
        }

        self.cursor.advance();
        let content_start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"' && c != '\n');

        if self.cursor.current_char() != '"' {
            return Err(LexError::UnterminatedString {
                offset: self.token_start,
                line: self.token_start_line,
            });
        }

        let content = self.cursor.slice_from(content_start);
        self.cursor.advance();
        Ok(Some(Token::new(
            TokenKind::String,
            content,
            self.token_start_line,
        )))
    }
}
