//! Lexeme lookup tables.
//!
//! Two immutable maps drive the table-based recognizers: single-character
//! punctuation and operators, and reserved words. The standard tables are
//! built once per process on first use and shared by reference with every
//! scanner.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Single-character symbols recognized without lookahead.
///
/// `/`, `<` and `>` are absent on purpose: each needs a look at the next
/// character and has its own recognizer.
const SINGLE_CHARACTERS: [(char, TokenKind); 13] = [
    (';', TokenKind::Semicolon),
    (',', TokenKind::Comma),
    ('=', TokenKind::Assign),
    ('{', TokenKind::LeftBrace),
    ('}', TokenKind::RightBrace),
    ('(', TokenKind::LeftParen),
    (')', TokenKind::RightParen),
    ('*', TokenKind::Multiply),
    ('+', TokenKind::Add),
    ('-', TokenKind::Subtract),
    ('!', TokenKind::Not),
    ('&', TokenKind::And),
    ('|', TokenKind::Or),
];

/// Reserved words.
const KEYWORDS: [(&str, TokenKind); 11] = [
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("fun", TokenKind::Fun),
    ("return", TokenKind::Return),
    ("var", TokenKind::Var),
    ("print", TokenKind::Print),
    ("null", TokenKind::Null),
];

lazy_static! {
    static ref STANDARD: LexemeTables = LexemeTables::new(
        SINGLE_CHARACTERS.iter().copied(),
        KEYWORDS.iter().copied(),
    );
}

/// The pair of lookup tables a scanner consults.
#[derive(Clone, Debug, Default)]
pub struct LexemeTables {
    single_characters: FxHashMap<char, TokenKind>,
    keywords: FxHashMap<&'static str, TokenKind>,
}

impl LexemeTables {
    /// Builds a table pair from explicit entries.
    pub fn new(
        single_characters: impl IntoIterator<Item = (char, TokenKind)>,
        keywords: impl IntoIterator<Item = (&'static str, TokenKind)>,
    ) -> Self {
        Self {
            single_characters: single_characters.into_iter().collect(),
            keywords: keywords.into_iter().collect(),
        }
    }

    /// The process-wide Spartie tables.
    ///
    /// ```
    /// use spartiec_lex::{LexemeTables, TokenKind};
    ///
    /// let tables = LexemeTables::standard();
    /// assert_eq!(tables.single_character(';'), Some(TokenKind::Semicolon));
    /// assert_eq!(tables.keyword("while"), Some(TokenKind::While));
    /// assert_eq!(tables.keyword("When"), None);
    /// ```
    pub fn standard() -> &'static LexemeTables {
        &STANDARD
    }

    /// Looks up a single-character symbol.
    #[inline]
    pub fn single_character(&self, c: char) -> Option<TokenKind> {
        self.single_characters.get(&c).copied()
    }

    /// Looks up a reserved word. Matching is case-sensitive.
    #[inline]
    pub fn keyword(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word).copied()
    }
}
