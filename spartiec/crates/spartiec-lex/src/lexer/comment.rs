//! Division and line comment recognition.

use super::Scanner;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Recognizes `/` as division, or `//` as a line comment.
    ///
    /// A comment runs through its terminating newline, which is consumed
    /// with it and counted, or to the end of input. It yields an ignorable
    /// token.
    pub(crate) fn divide_or_comment(&mut self) -> LexResult<Option<Token>> {
        if self.cursor.current_char() != '/' {
            return Ok(None);
        }

        if self.cursor.next_is('/') {
            self.cursor.advance_while(|c| c != '\n');
            self.cursor.advance();
            return Ok(Some(Token::ignore(self.token_start_line)));
        }

        self.cursor.advance();
        Ok(Some(self.make_token(TokenKind::Divide)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide() {
        let mut scanner = Scanner::new("/2");
        let token = scanner.divide_or_comment().unwrap();
        assert_eq!(token, Some(Token::new(TokenKind::Divide, "/", 1)));
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_line_comment_consumes_newline() {
        let mut scanner = Scanner::new("// hello / world\nx");
        let token = scanner.divide_or_comment().unwrap();
        assert_eq!(token, Some(Token::ignore(1)));
        assert_eq!(scanner.line(), 2);
        assert_eq!(scanner.cursor.current_char(), 'x');
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let mut scanner = Scanner::new("// trailing");
        assert!(scanner.divide_or_comment().unwrap().unwrap().is_ignored());
        assert!(scanner.cursor.is_at_end());
        assert_eq!(scanner.line(), 1);
    }

    #[test]
    fn test_empty_comment() {
        let mut scanner = Scanner::new("//\n\n");
        assert!(scanner.divide_or_comment().unwrap().unwrap().is_ignored());
        assert_eq!(scanner.line(), 2);
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn test_declines_other_characters() {
        let mut scanner = Scanner::new("*/");
        assert_eq!(scanner.divide_or_comment().unwrap(), None);
        assert_eq!(scanner.position(), 0);
    }
}
