//! spartiec-lex - Lexical Analyzer for the Spartie scripting language
//!
//! This crate turns Spartie source text into an ordered sequence of tokens
//! for a downstream parser. Scanning is maximal-munch with one character of
//! lookahead, tracks line numbers, and stops at the first lexical error.
//!
//! # Example Usage
//!
//! ```
//! use spartiec_lex::{scan, Scanner, TokenKind};
//!
//! let source = "var answer = 42; // the usual\nprint answer;";
//! let tokens = scan(source).unwrap();
//!
//! assert_eq!(tokens.len(), 8);
//! assert_eq!(tokens[0].kind(), TokenKind::Var);
//! assert_eq!(tokens[3].lexeme(), "42");
//! assert_eq!(tokens[5].line(), 2);
//!
//! // Or pull tokens one at a time
//! let mut scanner = Scanner::new(source);
//! assert_eq!(scanner.next().unwrap().unwrap().kind(), TokenKind::Var);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Scanner and recognizers
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - Character classes
//! - [`tables`] - Single-character and keyword tables
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `for`, `while`, `fun`, `return`, `var`, `print`, plus the
//! literal words `true`, `false`, `null`. Matching is case-sensitive.
//!
//! ## Identifiers
//!
//! Runs of ASCII letters. Pattern: `[a-zA-Z]+`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `.5`, `5.` (at most one decimal point)
//! - **String**: `"hello"` (single line, no escapes)
//!
//! ## Operators and punctuation
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Relational**: `<`, `<=`, `>`, `>=`, `==`, `!=`
//! - **Logical**: `&`, `|`, `!`
//! - **Other**: `=`, `;`, `,`, `(`, `)`, `{`, `}`
//!
//! ## Ignored input
//!
//! Spaces, carriage returns, newlines and `//` line comments.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Scanner;
pub use tables::LexemeTables;
pub use token::{Token, TokenKind};

/// Scans `source` with the standard Spartie tables.
///
/// Shorthand for `Scanner::new(source).scan()`.
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).unwrap().iter().map(Token::kind).collect()
    }

    #[test]
    fn test_separator_only_input() {
        for source in ["", " ", "\n\n", " \r\n \r\n  ", "\r"] {
            assert_eq!(scan(source), Ok(vec![]), "{source:?}");
        }
    }

    #[test]
    fn test_rescanning_is_deterministic() {
        let source = "fun add(a, b) { return a + b; }\nprint add(1, 2.5);";
        assert_eq!(scan(source), scan(source));
    }

    #[test]
    fn test_line_numbers() {
        let tokens = scan("a\nb\nc").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "a", 1),
                Token::new(TokenKind::Identifier, "b", 2),
                Token::new(TokenKind::Identifier, "c", 3),
            ]
        );
    }

    #[test]
    fn test_less_equal_maximal_munch() {
        assert_eq!(
            scan("<=").unwrap(),
            vec![Token::new(TokenKind::LessEqual, "<=", 1)]
        );
        assert_eq!(kinds("< ="), [TokenKind::LessThan, TokenKind::Assign]);
    }

    #[test]
    fn test_equality_operators() {
        assert_eq!(kinds("=="), [TokenKind::Equivalent]);
        assert_eq!(kinds("!="), [TokenKind::NotEqual]);
        assert_eq!(kinds("!=="), [TokenKind::NotEqual, TokenKind::Assign]);
        assert_eq!(kinds("= = !"), [TokenKind::Assign, TokenKind::Assign, TokenKind::Not]);
    }

    #[test]
    fn test_comment_is_dropped() {
        let tokens = scan("1 // comment\n2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, "1", 1),
                Token::new(TokenKind::Number, "2", 2),
            ]
        );
    }

    #[test]
    fn test_comment_newline_advances_line() {
        let tokens = scan("// one\n// two\nx // three\ny").unwrap();
        assert_eq!(tokens[0].line(), 3);
        assert_eq!(tokens[1].line(), 4);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            scan("\"abc"),
            Err(LexError::UnterminatedString { offset: 0, line: 1 })
        );
    }

    #[test]
    fn test_string_cannot_span_lines() {
        let err = scan("print \"one\ntwo\";").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { offset: 6, line: 1 });
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            scan("3.14").unwrap(),
            vec![Token::new(TokenKind::Number, "3.14", 1)]
        );
        assert!(matches!(
            scan("3.1.4"),
            Err(LexError::MalformedNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(scan("if").unwrap(), vec![Token::new(TokenKind::If, "if", 1)]);
        assert_eq!(
            scan("iffy").unwrap(),
            vec![Token::new(TokenKind::Identifier, "iffy", 1)]
        );
    }

    #[test]
    fn test_error_discards_tokens() {
        // Tokens scanned before the error are not returned.
        assert!(scan("var x = 1; #").is_err());
    }

    #[test]
    fn test_small_program() {
        let source = r#"
            // greet someone
            fun greet(name) {
                if (name != null) {
                    print "hello";
                } else {
                    return false;
                }
            }
            var i = 0;
            while (i <= 10) { i = i + 1; }
        "#;
        let tokens = scan(source).unwrap();
        let kinds: Vec<_> = tokens.iter().map(Token::kind).collect();

        assert_eq!(tokens[0], Token::new(TokenKind::Fun, "fun", 3));
        assert!(kinds.contains(&TokenKind::NotEqual));
        assert!(kinds.contains(&TokenKind::Null));
        assert!(kinds.contains(&TokenKind::LessEqual));
        assert!(tokens.contains(&Token::new(TokenKind::String, "hello", 5)));
        assert!(!kinds.contains(&TokenKind::Ignore));
        assert_eq!(tokens.last().map(Token::line), Some(11));
    }
}
