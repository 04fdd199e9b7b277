//! Token types for the cjlang lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the byte range it covers and, for
//! literals and identifiers, the text it stands for. Tokens produced by one
//! lexer run tile the source exactly: whitespace and comments are tokens too.

mod flags;
mod kind;

use std::fmt;

use super::Span;

pub use flags::TokenFlags;
pub use kind::TokenKind;

/// A token with its span in the source.
///
/// `text` is:
/// - the raw source slice for identifiers and numeric literals,
/// - the decoded value for string, byte and rune literals,
/// - the error message for [`TokenKind::Error`],
/// - `None` for punctuation, trivia and [`TokenKind::Eof`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub span: Span,
}

impl Token {
    /// Create a token with no text.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: None,
            span,
        }
    }

    /// Create a token carrying text.
    #[inline]
    pub fn with_text(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    /// Zero-length end marker at `offset`.
    #[inline]
    pub fn eof(offset: u32) -> Self {
        Token::new(TokenKind::Eof, Span::point(offset))
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    /// Number of source bytes this token covers.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Token text, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The exact source substring this token was scanned from.
    ///
    /// Returns `None` if the span does not fall on character boundaries of
    /// `source` (i.e. the token came from a different buffer).
    pub fn source_slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.span.to_range())
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{:?}({text:?}) @ {}", self.kind, self.span),
            None => write!(f, "{:?} @ {}", self.kind, self.span),
        }
    }
}
