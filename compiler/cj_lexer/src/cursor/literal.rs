//! String, byte and rune literals.
//!
//! All quoted forms share one body scanner that decodes escapes and stops at
//! the closing delimiter. After a fatal escape the scan still runs on to the
//! closing delimiter, so one bad escape costs one token, not the rest of the
//! line. Only the first fatal problem of a literal is reported.

use cj_ir::TokenKind;

use super::{Cursor, Fatal, Lexeme, ScanResult};
use crate::classify::IdentClassifier;
use crate::escape::{decode_escape, Escape, EscapeError};
use crate::lex_error::LexError;

const TRIPLE_QUOTE: &str = r#"""""#;

/// Closing delimiter of a quoted body.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Delimiter {
    /// A single quote character; the body may not contain a line break.
    Quote(char),
    /// `"""`; the body may span lines.
    TripleQuote,
}

impl<C: IdentClassifier> Cursor<'_, C> {
    /// `"..."` or `'...'`.
    pub(super) fn line_string(&mut self, start: u32) -> ScanResult {
        let quote = self.opening_quote();
        let value = self.quoted_body(Delimiter::Quote(quote), "string", start)?;
        Ok(Lexeme::with_text(TokenKind::LineStringLiteral, value))
    }

    /// `"""..."""`.
    pub(super) fn multi_line_string(&mut self, start: u32) -> ScanResult {
        self.advance_bytes(TRIPLE_QUOTE.len());
        let value = self.quoted_body(Delimiter::TripleQuote, "multi-line string", start)?;
        Ok(Lexeme::with_text(TokenKind::MultiLineStringLiteral, value))
    }

    /// `b"..."` byte string or `b'x'` byte literal.
    pub(super) fn byte_literal(&mut self, start: u32) -> ScanResult {
        self.advance_bytes(1); // 'b'
        let quote = self.opening_quote();
        if quote == '"' {
            let value = self.quoted_body(Delimiter::Quote(quote), "byte string", start)?;
            self.check_ascii(&value, start);
            return Ok(Lexeme::with_text(TokenKind::ByteStringLiteral, value));
        }
        let value = self.quoted_body(Delimiter::Quote(quote), "byte", start)?;
        let value = self.single_char(&value, "byte", start);
        self.check_ascii(&value, start);
        Ok(Lexeme::with_text(TokenKind::ByteLiteral, value))
    }

    /// `r'x'` or `r"x"`.
    pub(super) fn rune_literal(&mut self, start: u32) -> ScanResult {
        self.advance_bytes(1); // 'r'
        let quote = self.opening_quote();
        let value = self.quoted_body(Delimiter::Quote(quote), "rune", start)?;
        let value = self.single_char(&value, "rune", start);
        Ok(Lexeme::with_text(TokenKind::RuneLiteral, value))
    }

    fn opening_quote(&mut self) -> char {
        self.bump().unwrap_or('"')
    }

    /// Scan up to and including the closing delimiter; returns the decoded
    /// contents.
    fn quoted_body(
        &mut self,
        delimiter: Delimiter,
        literal: &'static str,
        start: u32,
    ) -> Result<String, Fatal> {
        let mut value = String::new();
        let mut first_fatal: Option<Fatal> = None;
        let unterminated = || Fatal::new(LexError::UnterminatedLiteral { literal }, start);

        loop {
            let Some(c) = self.current() else {
                return Err(first_fatal.unwrap_or_else(unterminated));
            };
            match delimiter {
                Delimiter::Quote(quote) if c == quote => {
                    self.bump();
                    break;
                }
                Delimiter::Quote(_) if c == '\n' || (c == '\r' && self.peek() == Some('\n')) => {
                    return Err(first_fatal.unwrap_or_else(unterminated));
                }
                Delimiter::TripleQuote if self.rest().starts_with(TRIPLE_QUOTE) => {
                    self.advance_bytes(TRIPLE_QUOTE.len());
                    break;
                }
                _ => {}
            }

            if c != '\\' {
                value.push(c);
                self.bump();
                continue;
            }

            let at = self.pos;
            self.advance_bytes(1);
            let Some(escape) = self.current() else {
                continue;
            };
            let after = self.rest().get(escape.len_utf8()..).unwrap_or("");
            let line_break = escape == '\n' || (escape == '\r' && after.starts_with('\n'));
            if line_break && matches!(delimiter, Delimiter::Quote(_)) {
                // Reported as unterminated on the next iteration.
                continue;
            }
            match decode_escape(escape, after) {
                Ok(Escape {
                    value: decoded,
                    len,
                    warning,
                }) => {
                    self.advance_bytes(len as usize);
                    value.push(decoded);
                    if let Some(warning) = warning {
                        self.report(&warning, at);
                    }
                }
                Err(EscapeError { error, len }) => {
                    self.advance_bytes(len as usize);
                    first_fatal.get_or_insert(Fatal::new(error, at));
                }
            }
        }

        match first_fatal {
            Some(fatal) => Err(fatal),
            None => Ok(value),
        }
    }

    /// Keep the first character of a rune or byte body, reporting an empty or
    /// overlong body.
    fn single_char(&self, value: &str, literal: &'static str, start: u32) -> String {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.report(&LexError::EmptyCharLiteral { literal }, start);
                String::new()
            }
            (Some(c), None) => c.to_string(),
            (Some(c), Some(_)) => {
                self.report(&LexError::TooManyCharacters { literal }, start);
                c.to_string()
            }
        }
    }

    fn check_ascii(&self, value: &str, start: u32) {
        if let Some(found) = value.chars().find(|c| !c.is_ascii()) {
            self.report(&LexError::NonAsciiByte { found }, start);
        }
    }
}
