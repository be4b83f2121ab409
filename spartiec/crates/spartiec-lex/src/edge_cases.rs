//! Edge case tests for spartiec-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        scan(source).unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenKind::Identifier, "x", 1)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("var {} = 1;", name));
        assert_eq!(t[1], Token::new(TokenKind::Identifier, name, 1));
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(
            kinds("If if NULL null"),
            [
                TokenKind::Identifier,
                TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Null
            ]
        );
    }

    #[test]
    fn test_edge_identifier_split_by_digit() {
        assert_eq!(
            lex_all("abc123"),
            vec![
                Token::new(TokenKind::Identifier, "abc", 1),
                Token::new(TokenKind::Number, "123", 1),
            ]
        );
    }

    #[test]
    fn test_edge_underscore_rejected() {
        assert_eq!(
            scan("my_var"),
            Err(LexError::UnexpectedCharacter {
                character: '_',
                offset: 2,
                line: 1,
            })
        );
    }

    #[test]
    fn test_edge_all_operators() {
        assert_eq!(
            kinds("+ - * / ! & | = < > <= >= == !="),
            [
                TokenKind::Add,
                TokenKind::Subtract,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Not,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Assign,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Equivalent,
                TokenKind::NotEqual,
            ]
        );
    }

    #[test]
    fn test_edge_all_delimiters() {
        assert_eq!(
            kinds("( ) { } , ;"),
            [
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        assert_eq!(
            kinds("a<=b==c!=d"),
            [
                TokenKind::Identifier,
                TokenKind::LessEqual,
                TokenKind::Identifier,
                TokenKind::Equivalent,
                TokenKind::Identifier,
                TokenKind::NotEqual,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_triple_equals() {
        assert_eq!(kinds("==="), [TokenKind::Equivalent, TokenKind::Assign]);
    }

    #[test]
    fn test_edge_double_operators_are_two_tokens() {
        assert_eq!(kinds("&&"), [TokenKind::And, TokenKind::And]);
        assert_eq!(kinds("||"), [TokenKind::Or, TokenKind::Or]);
        assert_eq!(kinds("--"), [TokenKind::Subtract, TokenKind::Subtract]);
    }

    #[test]
    fn test_edge_divide_then_comment() {
        let t = lex_all("a / b // c\nd");
        assert_eq!(t.len(), 4);
        assert_eq!(t[1].kind(), TokenKind::Divide);
        assert_eq!(t[3], Token::new(TokenKind::Identifier, "d", 2));
    }

    #[test]
    fn test_edge_comment_only() {
        assert!(lex_all("// nothing here").is_empty());
        assert!(lex_all("//").is_empty());
    }

    #[test]
    fn test_edge_comment_hides_bad_characters() {
        assert_eq!(kinds("// # @ \"open 1.2.3\nx"), [TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_carriage_return_line_endings() {
        let t = lex_all("a\r\nb\r\n\r\nc");
        let lines: Vec<_> = t.iter().map(Token::line).collect();
        assert_eq!(lines, [1, 2, 4]);
    }

    #[test]
    fn test_edge_tab_is_not_a_separator() {
        assert_eq!(
            scan("a\tb"),
            Err(LexError::UnexpectedCharacter {
                character: '\t',
                offset: 1,
                line: 1,
            })
        );
    }

    #[test]
    fn test_edge_non_ascii_rejected() {
        let err = scan("var é").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter {
                character: 'é',
                offset: 4,
                line: 1
            }
        ));
    }

    #[test]
    fn test_edge_empty_string() {
        assert_eq!(lex_all("\"\""), vec![Token::new(TokenKind::String, "", 1)]);
    }

    #[test]
    fn test_edge_string_then_tokens() {
        assert_eq!(
            kinds("print \"a\";"),
            [TokenKind::Print, TokenKind::String, TokenKind::Semicolon]
        );
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let t = lex_all("\"a\"\"b\"");
        assert_eq!(t[0].lexeme(), "a");
        assert_eq!(t[1].lexeme(), "b");
    }

    #[test]
    fn test_edge_unterminated_string_on_later_line() {
        assert_eq!(
            scan("x\ny\n  \"abc"),
            Err(LexError::UnterminatedString { offset: 6, line: 3 })
        );
    }

    #[test]
    fn test_edge_number_forms() {
        let t = lex_all(".5 5. 0 007 .");
        let lexemes: Vec<_> = t.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, [".5", "5.", "0", "007", "."]);
        assert!(t.iter().all(|x| x.kind() == TokenKind::Number));
    }

    #[test]
    fn test_edge_number_followed_by_identifier() {
        assert_eq!(kinds("1.5e"), [TokenKind::Number, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_malformed_number_position() {
        assert_eq!(
            scan("x = 1;\ny = 1.2.3;"),
            Err(LexError::MalformedNumber {
                lexeme: "1.2.".to_string(),
                offset: 11,
                line: 2,
            })
        );
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        assert_eq!(kinds("-1"), [TokenKind::Subtract, TokenKind::Number]);
    }

    #[test]
    fn test_edge_literal_words() {
        assert_eq!(
            lex_all("true false null"),
            vec![
                Token::new(TokenKind::True, "true", 1),
                Token::new(TokenKind::False, "false", 1),
                Token::new(TokenKind::Null, "null", 1),
            ]
        );
    }

    #[test]
    fn test_edge_many_blank_lines() {
        let source = format!("{}x", "\n".repeat(500));
        assert_eq!(lex_all(&source)[0].line(), 501);
    }

    #[test]
    fn test_edge_first_error_wins() {
        assert!(matches!(
            scan("# \"abc"),
            Err(LexError::UnexpectedCharacter { character: '#', .. })
        ));
    }
}
