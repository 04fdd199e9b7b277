//! Identifiers and raw identifiers.
//!
//! Keyword spellings are not special here; see [`KeywordTable`](crate::KeywordTable).

use cj_ir::TokenKind;

use super::{Cursor, Lexeme};
use crate::classify::IdentClassifier;
use crate::lex_error::LexError;

impl<C: IdentClassifier> Cursor<'_, C> {
    /// Id-start followed by id-continue characters.
    pub(super) fn identifier(&mut self, start: u32) -> Lexeme {
        self.bump();
        self.eat_ident_continue();
        Lexeme::with_text(TokenKind::Ident, self.slice_from(start))
    }

    /// `` `name` ``. The text keeps the backticks.
    pub(super) fn raw_identifier(&mut self, start: u32) -> Lexeme {
        self.advance_bytes(1); // '`'
        self.eat_ident_continue();
        if !self.eat('`') {
            self.report(&LexError::MissingClosingBacktick, start);
        }
        Lexeme::with_text(TokenKind::RawIdent, self.slice_from(start))
    }

    fn eat_ident_continue(&mut self) {
        while let Some(c) = self.current() {
            if !self.classifier.is_id_continue(c) {
                break;
            }
            self.bump();
        }
    }
}
