//! Line and block comments.

use cj_ir::TokenKind;

use super::{Cursor, Lexeme};
use crate::classify::IdentClassifier;
use crate::lex_error::LexError;

impl<C: IdentClassifier> Cursor<'_, C> {
    /// `//` up to, not including, the next `\n` or `\r\n`.
    pub(super) fn line_comment(&mut self) -> Lexeme {
        let rest = self.rest().as_bytes();
        let end = match memchr::memchr(b'\n', rest) {
            Some(newline) if newline > 0 && rest[newline - 1] == b'\r' => newline - 1,
            Some(newline) => newline,
            None => rest.len(),
        };
        self.advance_bytes(end);
        Lexeme::bare(TokenKind::LineComment)
    }

    /// `/* ... */` with nesting. An unterminated comment runs to end of
    /// input and is reported, but still yields a comment token.
    pub(super) fn block_comment(&mut self, start: u32) -> Lexeme {
        self.advance_bytes(2); // "/*"
        let mut depth = 1u32;
        loop {
            let rest = self.rest().as_bytes();
            let Some(i) = memchr::memchr2(b'*', b'/', rest) else {
                self.advance_bytes(rest.len());
                self.report(&LexError::UnterminatedBlockComment, start);
                break;
            };
            match (rest[i], rest.get(i + 1)) {
                (b'*', Some(b'/')) => {
                    self.advance_bytes(i + 2);
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                (b'/', Some(b'*')) => {
                    self.advance_bytes(i + 2);
                    depth += 1;
                }
                _ => self.advance_bytes(i + 1),
            }
        }
        Lexeme::bare(TokenKind::BlockComment)
    }
}
