//! Numeric literals.
//!
//! ```text
//! number   := prefix? digits fraction? exponent? suffix?
//! prefix   := 0b | 0B | 0o | 0O | 0x | 0X
//! fraction := '.' digits            (decimal and hexadecimal only)
//! exponent := (e|E|p|P) '-'? decimal-digits
//! suffix   := (i|u)(8|16|32|64) | f(16|32|64)
//! ```
//!
//! The token text is always the exact source slice; no value is computed.

use cj_ir::TokenKind;

use super::{Cursor, Fatal, Lexeme, ScanResult};
use crate::classify::IdentClassifier;
use crate::lex_error::LexError;

const INTEGER_SUFFIXES: &[&str] = &["i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64"];
const FLOAT_SUFFIXES: &[&str] = &["f16", "f32", "f64"];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    fn kind(self) -> TokenKind {
        match self {
            Radix::Binary => TokenKind::BinaryLiteral,
            Radix::Octal => TokenKind::OctalLiteral,
            Radix::Decimal => TokenKind::DecimalLiteral,
            Radix::Hexadecimal => TokenKind::HexadecimalLiteral,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    fn is_digit(self, c: char) -> bool {
        match self {
            Radix::Binary => matches!(c, '0' | '1'),
            Radix::Octal => matches!(c, '0'..='7'),
            Radix::Decimal => c.is_ascii_digit(),
            Radix::Hexadecimal => c.is_ascii_hexdigit(),
        }
    }

    fn is_exponent_marker(self, c: char) -> bool {
        match self {
            Radix::Decimal => matches!(c, 'e' | 'E'),
            Radix::Hexadecimal => matches!(c, 'p' | 'P'),
            Radix::Binary | Radix::Octal => false,
        }
    }

    fn has_fraction(self) -> bool {
        matches!(self, Radix::Decimal | Radix::Hexadecimal)
    }
}

impl<C: IdentClassifier> Cursor<'_, C> {
    /// Scan a numeric literal starting with a digit or `.` + digit.
    pub(super) fn number(&mut self, start: u32) -> ScanResult {
        let radix = self.radix_prefix();
        let mut kind = radix.kind();

        if radix == Radix::Decimal {
            if self.current() == Some('0') && self.peek() == Some('_') {
                self.report(&LexError::LeadingZeroSeparator, start + 1);
            }
            self.eat_digits(radix);
        } else {
            let digits = self.eat_digits(radix);
            // Binary and octal: a decimal digit outside the radix poisons the
            // rest of the literal.
            if let Some(digit) = self.current().filter(char::is_ascii_digit) {
                self.report(
                    &LexError::IllegalDigit {
                        digit,
                        radix: radix.name(),
                    },
                    self.pos,
                );
                self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
                return Ok(Lexeme::with_text(kind, self.slice_from(start)));
            }
            if digits == 0 {
                self.report(
                    &LexError::MissingDigits {
                        radix: radix.name(),
                    },
                    start,
                );
            }
        }

        if radix.has_fraction() && self.at_fraction(radix) {
            self.advance_bytes(1);
            self.eat_digits(radix);
            kind = TokenKind::FloatLiteral;

            if self.at_fraction(Radix::Decimal) {
                return Err(self.multiple_decimal_points());
            }
        }

        if self.current().is_some_and(|c| radix.is_exponent_marker(c)) {
            let marker = self.pos;
            self.advance_bytes(1);
            self.eat('-');
            if self.eat_digits(Radix::Decimal) == 0 {
                self.report(&LexError::MissingExponentDigits, marker);
            }
            kind = TokenKind::FloatLiteral;
        }

        self.suffix(kind);
        Ok(Lexeme::with_text(kind, self.slice_from(start)))
    }

    /// Consume a radix prefix if present.
    fn radix_prefix(&mut self) -> Radix {
        if self.current() != Some('0') {
            return Radix::Decimal;
        }
        let radix = match self.peek() {
            Some('b' | 'B') => Radix::Binary,
            Some('o' | 'O') => Radix::Octal,
            Some('x' | 'X') => Radix::Hexadecimal,
            _ => return Radix::Decimal,
        };
        self.advance_bytes(2);
        radix
    }

    /// Consume digits of `radix` and `_` separators; returns the digit count.
    fn eat_digits(&mut self, radix: Radix) -> u32 {
        let mut digits = 0;
        while let Some(c) = self.current() {
            if radix.is_digit(c) {
                digits += 1;
            } else if c != '_' {
                break;
            }
            self.advance_bytes(1);
        }
        digits
    }

    /// `.` followed by a digit of `radix` (so `0..5` stays a range).
    fn at_fraction(&self, radix: Radix) -> bool {
        self.current() == Some('.') && self.peek().is_some_and(|c| radix.is_digit(c))
    }

    /// Swallow the rest of a literal like `1.2.3` and build the failure.
    fn multiple_decimal_points(&mut self) -> Fatal {
        let at = self.pos;
        loop {
            self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
            if self.at_fraction(Radix::Decimal) {
                self.advance_bytes(1);
            } else {
                break;
            }
        }
        Fatal::new(LexError::MultipleDecimalPoints, at)
    }

    /// Consume a trailing alphanumeric run and check it against the suffixes
    /// allowed for `kind`.
    fn suffix(&mut self, kind: TokenKind) {
        let at = self.pos;
        if self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_') == 0 {
            return;
        }
        let suffix = self.slice_from(at);
        let error = if kind == TokenKind::FloatLiteral {
            (!FLOAT_SUFFIXES.contains(&suffix)).then(|| LexError::IllegalFloatSuffix {
                suffix: suffix.to_owned(),
            })
        } else {
            (!INTEGER_SUFFIXES.contains(&suffix)).then(|| LexError::IllegalIntegerSuffix {
                suffix: suffix.to_owned(),
            })
        };
        if let Some(error) = error {
            self.report(&error, at);
        }
    }
}
