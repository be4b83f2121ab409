//! Token definitions for the Spartie lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme it was recognized from
//! and the 1-based line it started on. Tokens are immutable once built: the
//! fields are private and only exposed through accessors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a lexical token.
///
/// The set is closed. [`TokenKind::Ignore`] marks spans the scanner consumed
/// but does not hand to the caller (line comments); it never appears in a
/// finished token sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    // Punctuation and single-character operators
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `=`
    Assign,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `*`
    Multiply,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `!`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
    /// `/`
    Divide,

    // Relational and equality operators
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equivalent,
    /// `!=`
    NotEqual,

    // Literals
    /// Numeric literal, lexeme kept verbatim
    Number,
    /// String literal, lexeme is the text between the quotes
    String,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Any non-reserved word
    Identifier,

    // Keywords
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `fun`
    Fun,
    /// `return`
    Return,
    /// `var`
    Var,
    /// `print`
    Print,

    /// Consumed but insignificant input (line comments)
    Ignore,
}

impl TokenKind {
    /// Canonical upper-case name of the kind, e.g. `LESS_EQUAL`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Add => "ADD",
            TokenKind::Subtract => "SUBTRACT",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Equivalent => "EQUIVALENT",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Fun => "FUN",
            TokenKind::Return => "RETURN",
            TokenKind::Var => "VAR",
            TokenKind::Print => "PRINT",
            TokenKind::Ignore => "IGNORE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme together with the line it started on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// Creates an ignorable token; its lexeme is empty.
    pub fn ignore(line: u32) -> Self {
        Self::new(TokenKind::Ignore, String::new(), line)
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text the token was recognized from.
    ///
    /// For strings this excludes the quotes.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based line the token starts on.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true if the scanner drops this token from its output.
    pub fn is_ignored(&self) -> bool {
        self.kind == TokenKind::Ignore
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.kind)?;
        if !self.lexeme.is_empty() {
            write!(f, " {}", self.lexeme)?;
        }
        Ok(())
    }
}
