//! Identifier and reserved word recognition.

use super::Scanner;
use crate::classify::is_alpha;
use crate::error::LexResult;
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Recognizes an identifier or reserved word.
    ///
    /// Identifiers are runs of ASCII letters; digits and underscores end
    /// them. After reading the run, checks the keyword table.
    pub(crate) fn identifier_or_keyword(&mut self) -> LexResult<Option<Token>> {
        if self.cursor.advance_while(is_alpha) == 0 {
            return Ok(None);
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = self.tables.keyword(text).unwrap_or(TokenKind::Identifier);
        Ok(Some(self.make_token(kind)))
    }
}
