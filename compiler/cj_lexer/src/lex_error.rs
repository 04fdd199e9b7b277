//! Lexer error types.
//!
//! Errors come in two tiers. Recoverable errors are reported and the token
//! is still produced with its normal kind. Fatal errors abandon the token:
//! the cursor emits a [`TokenKind::Error`](cj_ir::TokenKind::Error) token in
//! its place, or [`Cursor::try_tokenize`](crate::Cursor::try_tokenize) stops
//! with a [`LexFailure`].

use cj_diagnostic::Severity;
use cj_ir::Span;
use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    // === Numeric (recoverable) ===
    #[error("illegal digit '{digit}' in {radix} literal")]
    IllegalDigit { digit: char, radix: &'static str },
    #[error("expected at least one digit after the {radix} prefix")]
    MissingDigits { radix: &'static str },
    #[error("'_' cannot directly follow a leading '0'")]
    LeadingZeroSeparator,
    #[error("expected at least one digit in exponent")]
    MissingExponentDigits,
    #[error("illegal integer suffix '{suffix}'")]
    IllegalIntegerSuffix { suffix: String },
    #[error("illegal float suffix '{suffix}'")]
    IllegalFloatSuffix { suffix: String },

    // === Escapes (recoverable) ===
    #[error("unicode escape must contain at least one hex digit")]
    EmptyUnicodeEscape,
    #[error("unicode escape has {digits} hex digits, at most 8 are allowed")]
    OverlongUnicodeEscape { digits: usize },
    #[error("invalid unicode scalar value 0x{value:X}")]
    InvalidUnicodeScalar { value: u32 },

    // === Identifiers and textual literals (recoverable) ===
    #[error("raw identifier is missing its closing '`'")]
    MissingClosingBacktick,
    #[error("{literal} literal must contain exactly one character")]
    TooManyCharacters { literal: &'static str },
    #[error("empty {literal} literal")]
    EmptyCharLiteral { literal: &'static str },
    #[error("byte literal contains non-ASCII character {found:?}")]
    NonAsciiByte { found: char },

    // === Comments (recoverable) ===
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    // === Fatal ===
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("unterminated {literal} literal")]
    UnterminatedLiteral { literal: &'static str },
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("malformed unicode escape, expected '{{' after '\\u'")]
    MalformedUnicodeEscape,
    #[error("unicode escape is missing its closing '}}'")]
    UnclosedUnicodeEscape,
    #[error("invalid number with multiple decimal points")]
    MultipleDecimalPoints,
}

impl LexError {
    /// Whether this error abandons the token being scanned.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LexError::UnexpectedCharacter(_)
                | LexError::UnterminatedLiteral { .. }
                | LexError::InvalidEscape(_)
                | LexError::MalformedUnicodeEscape
                | LexError::UnclosedUnicodeEscape
                | LexError::MultipleDecimalPoints
        )
    }

    /// Severity used when reporting this error.
    ///
    /// Every lexical error is an error; recoverable ones only differ in that
    /// scanning carries on with a normal token.
    #[allow(
        clippy::unused_self,
        reason = "per-variant hook kept alongside is_fatal for callers"
    )]
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// A fatal error together with where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{error} (at byte {offset})")]
pub struct LexFailure {
    pub error: LexError,
    /// Byte offset the problem was detected at.
    pub offset: u32,
    /// Input consumed by the failed token.
    pub span: Span,
}
