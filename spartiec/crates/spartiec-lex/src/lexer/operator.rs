//! Operator and punctuation recognition.
//!
//! Single-character symbols come from the lookup table. The relational and
//! equality operators need one character of lookahead and are matched here
//! by hand.

use super::Scanner;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Recognizes a symbol from the single-character table.
    ///
    /// Declines on `=` and `!` when the next character is `=`, so that `==`
    /// and `!=` reach [`Scanner::comparison`].
    pub(crate) fn single_character(&mut self) -> LexResult<Option<Token>> {
        let c = self.cursor.current_char();
        if matches!(c, '=' | '!') && self.cursor.next_is('=') {
            return Ok(None);
        }

        let Some(kind) = self.tables.single_character(c) else {
            return Ok(None);
        };
        self.cursor.advance();
        Ok(Some(self.make_token(kind)))
    }

    /// Recognizes relational and equality operators.
    ///
    /// Handles: `<`, `<=`, `>`, `>=`, `==`, `!=`
    pub(crate) fn comparison(&mut self) -> LexResult<Option<Token>> {
        let followed_by_equals = self.cursor.next_is('=');
        let kind = match (self.cursor.current_char(), followed_by_equals) {
            ('<', true) => TokenKind::LessEqual,
            ('<', false) => TokenKind::LessThan,
            ('>', true) => TokenKind::GreaterEqual,
            ('>', false) => TokenKind::GreaterThan,
            ('=', true) => TokenKind::Equivalent,
            ('!', true) => TokenKind::NotEqual,
            _ => return Ok(None),
        };

        self.cursor.advance();
        if followed_by_equals {
            self.cursor.advance();
        }
        Ok(Some(self.make_token(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(source: &str) -> Option<Token> {
        Scanner::new(source).single_character().unwrap()
    }

    fn comparison(source: &str) -> Option<Token> {
        Scanner::new(source).comparison().unwrap()
    }

    #[test]
    fn test_single_characters() {
        let cases = [
            (";", TokenKind::Semicolon),
            (",", TokenKind::Comma),
            ("=", TokenKind::Assign),
            ("{", TokenKind::LeftBrace),
            ("}", TokenKind::RightBrace),
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
            ("*", TokenKind::Multiply),
            ("+", TokenKind::Add),
            ("-", TokenKind::Subtract),
            ("!", TokenKind::Not),
            ("&", TokenKind::And),
            ("|", TokenKind::Or),
        ];
        for (source, kind) in cases {
            assert_eq!(single(source), Some(Token::new(kind, source, 1)));
        }
    }

    #[test]
    fn test_single_character_advances_one() {
        let mut scanner = Scanner::new("&&");
        scanner.single_character().unwrap();
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_single_character_defers_equality() {
        assert_eq!(single("=="), None);
        assert_eq!(single("!="), None);
        assert_eq!(single("= ="), Some(Token::new(TokenKind::Assign, "=", 1)));
        assert_eq!(single("!x"), Some(Token::new(TokenKind::Not, "!", 1)));
    }

    #[test]
    fn test_single_character_declines_others() {
        for source in ["/", "<", ">", "a", "1", "\"", "."] {
            assert_eq!(single(source), None, "{source:?}");
        }
    }

    #[test]
    fn test_comparison_operators() {
        let cases = [
            ("<", TokenKind::LessThan, "<"),
            ("<=", TokenKind::LessEqual, "<="),
            (">", TokenKind::GreaterThan, ">"),
            (">=", TokenKind::GreaterEqual, ">="),
            ("==", TokenKind::Equivalent, "=="),
            ("!=", TokenKind::NotEqual, "!="),
            ("< =", TokenKind::LessThan, "<"),
            ("<<", TokenKind::LessThan, "<"),
        ];
        for (source, kind, lexeme) in cases {
            assert_eq!(comparison(source), Some(Token::new(kind, lexeme, 1)));
        }
    }

    #[test]
    fn test_comparison_declines_lone_equals_and_bang() {
        assert_eq!(comparison("="), None);
        assert_eq!(comparison("!"), None);
        assert_eq!(comparison("=<"), None);
        assert_eq!(comparison("+"), None);
    }

    #[test]
    fn test_comparison_cursor_position() {
        let mut scanner = Scanner::new(">=1");
        scanner.comparison().unwrap();
        assert_eq!(scanner.position(), 2);
    }
}
