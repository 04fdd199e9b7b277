//! Stateful single-pass scanner.
//!
//! The cursor walks a `&str` by byte offset and hands out one [`Token`] per
//! call to [`Cursor::advance_token`]. Dispatch looks at most two characters
//! ahead and hands off to a sub-scanner per token family:
//!
//! | First char(s)             | Sub-scanner          |
//! |---------------------------|----------------------|
//! | `\n`, `\r\n`, whitespace  | trivia (this module) |
//! | `` ` ``                   | `ident`              |
//! | digit, `.` + digit        | `number`             |
//! | `r'` `b'` `"` `'` `"""`   | `literal`            |
//! | `//`, `/*`                | `comment`            |
//! | punctuation               | `operator`           |
//! | id-start                  | `ident`              |
//!
//! Punctuation is tried before id-start, so a classifier cannot turn an
//! operator character into an identifier.
//!
//! Sub-scanners return `Result<Lexeme, Fatal>`. Recoverable problems are
//! reported on the spot and scanning continues; a fatal problem turns the
//! consumed input into a [`TokenKind::Error`] token.

mod comment;
mod ident;
mod literal;
mod number;
mod operator;

use std::fmt;
use std::sync::Arc;

use cj_diagnostic::{span_utils, DiagnosticEngine, LEXICAL_ISSUE};
use cj_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::classify::{is_pattern_whitespace, IdentClassifier, UnicodeXid};
use crate::lex_error::{LexError, LexFailure};

/// File name used when the caller does not supply one.
const DEFAULT_FILE_NAME: &str = "<input>";

/// Scanned token contents, before the span is attached.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Lexeme {
    kind: TokenKind,
    text: Option<String>,
}

impl Lexeme {
    #[inline]
    fn bare(kind: TokenKind) -> Self {
        Lexeme { kind, text: None }
    }

    #[inline]
    fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Lexeme {
            kind,
            text: Some(text.into()),
        }
    }
}

/// A fatal error raised by a sub-scanner at byte offset `at`.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Fatal {
    error: LexError,
    at: u32,
}

impl Fatal {
    #[cold]
    fn new(error: LexError, at: u32) -> Self {
        Fatal { error, at }
    }
}

type ScanResult = Result<Lexeme, Fatal>;

/// Saved cursor position for backtracking.
///
/// Only the position is saved; the text is shared and diagnostics are
/// managed separately through [`DiagnosticEngine::checkpoint`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CursorSnapshot {
    pos: u32,
}

/// Scanner over one source buffer.
///
/// Cloning yields an independent position over the same text, feeding the
/// same diagnostics.
#[derive(Clone)]
pub struct Cursor<'src, C = UnicodeXid> {
    text: &'src str,
    /// Byte offset of the next unread character; always a char boundary.
    pos: u32,
    file_name: Arc<str>,
    diagnostics: DiagnosticEngine,
    classifier: C,
}

impl<'src> Cursor<'src, UnicodeXid> {
    /// Create a cursor at the start of `text`.
    ///
    /// Offsets are `u32`; input beyond 4 GiB is not scanned.
    pub fn new(text: &'src str) -> Self {
        Cursor {
            text: clamp_to_u32(text),
            pos: 0,
            file_name: Arc::from(DEFAULT_FILE_NAME),
            diagnostics: DiagnosticEngine::new(),
            classifier: UnicodeXid,
        }
    }
}

impl<'src, C: IdentClassifier> Cursor<'src, C> {
    /// Name used in diagnostic locations.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<Arc<str>>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Report into `diagnostics` instead of a private engine.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticEngine) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Replace the identifier classifier.
    pub fn with_classifier<D: IdentClassifier>(self, classifier: D) -> Cursor<'src, D> {
        Cursor {
            text: self.text,
            pos: self.pos,
            file_name: self.file_name,
            diagnostics: self.diagnostics,
            classifier,
        }
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.text
    }

    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[inline]
    pub fn diagnostics(&self) -> &DiagnosticEngine {
        &self.diagnostics
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scanned text in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        to_u32(self.text.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }

    /// Character at the current position, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot { pos: self.pos }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.pos = snapshot.pos;
    }

    /// Scan and return the next token.
    ///
    /// At end of input this returns a zero-length `Eof` token, and keeps
    /// doing so on every further call. Otherwise at least one character is
    /// consumed.
    pub fn advance_token(&mut self) -> Token {
        let token = match self.next_token() {
            Ok(token) => token,
            Err(failure) => {
                self.report(&failure.error, failure.offset);
                Token::with_text(TokenKind::Error, failure.error.to_string(), failure.span)
            }
        };
        trace!(pos = token.span.start, kind = ?token.kind, "advance");
        token
    }

    /// Scan the rest of the input.
    ///
    /// The result ends with exactly one `Eof` token.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.file_name, len = self.text.len()))]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.text.len() / 4 + 1);
        loop {
            let token = self.advance_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(
            tokens = tokens.len(),
            errors = self.diagnostics.error_count(),
            "tokenized"
        );
        tokens
    }

    /// Scan the rest of the input, stopping at the first fatal error.
    ///
    /// The fatal error is reported to the diagnostics engine as well as
    /// returned. Recoverable errors are reported and do not stop the scan.
    pub fn try_tokenize(&mut self) -> Result<Vec<Token>, LexFailure> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Ok(token) => {
                    trace!(pos = token.span.start, kind = ?token.kind, "advance");
                    let done = token.is(TokenKind::Eof);
                    tokens.push(token);
                    if done {
                        return Ok(tokens);
                    }
                }
                Err(failure) => {
                    self.report(&failure.error, failure.offset);
                    return Err(failure);
                }
            }
        }
    }

    /// The token [`advance_token`](Self::advance_token) would return next.
    ///
    /// Leaves both the position and the diagnostics unchanged.
    pub fn peek_token(&mut self) -> Token {
        let snapshot = self.snapshot();
        let checkpoint = self.diagnostics.checkpoint();
        let token = self.advance_token();
        self.restore(snapshot);
        self.diagnostics.rollback(checkpoint);
        token
    }

    fn next_token(&mut self) -> Result<Token, LexFailure> {
        let start = self.pos;
        match self.scan(start) {
            Ok(Lexeme { kind, text }) => Ok(Token {
                kind,
                text,
                span: Span::new(start, self.pos),
            }),
            Err(Fatal { error, at }) => {
                if self.pos == start {
                    self.bump();
                }
                Err(LexFailure {
                    error,
                    offset: at,
                    span: Span::new(start, self.pos),
                })
            }
        }
    }

    fn scan(&mut self, start: u32) -> ScanResult {
        let Some(c) = self.current() else {
            return Ok(Lexeme::bare(TokenKind::Eof));
        };
        match c {
            '\n' => {
                self.advance_bytes(1);
                Ok(Lexeme::bare(TokenKind::Newline))
            }
            '\r' if self.peek() == Some('\n') => {
                self.advance_bytes(2);
                Ok(Lexeme::bare(TokenKind::Newline))
            }
            c if is_pattern_whitespace(c) => Ok(self.whitespace()),
            '`' => Ok(self.raw_identifier(start)),
            '0'..='9' => self.number(start),
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.number(start),
            'r' if matches!(self.peek(), Some('\'' | '"')) => self.rune_literal(start),
            'b' if matches!(self.peek(), Some('\'' | '"')) => self.byte_literal(start),
            '"' if self.rest().starts_with(r#"""""#) => self.multi_line_string(start),
            '"' | '\'' => self.line_string(start),
            '/' if self.peek() == Some('/') => Ok(self.line_comment()),
            '/' if self.peek() == Some('*') => Ok(self.block_comment(start)),
            c => {
                if let Some(kind) = self.operator() {
                    Ok(Lexeme::bare(kind))
                } else if self.classifier.is_id_start(c) {
                    Ok(self.identifier(start))
                } else {
                    self.bump();
                    Err(Fatal::new(LexError::UnexpectedCharacter(c), start))
                }
            }
        }
    }

    /// Run of pattern whitespace, stopping before any line break.
    fn whitespace(&mut self) -> Lexeme {
        while let Some(c) = self.current() {
            let line_break = c == '\n' || (c == '\r' && self.peek() == Some('\n'));
            if line_break || !is_pattern_whitespace(c) {
                break;
            }
            self.bump();
        }
        Lexeme::bare(TokenKind::Whitespace)
    }

    // ─── Primitives ─────────────────────────────────────────────────────

    #[inline]
    fn rest(&self) -> &'src str {
        self.text.get(self.pos as usize..).unwrap_or("")
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consume one character.
    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += char_len(c);
        Some(c)
    }

    #[inline]
    fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.pos += char_len(expected);
            true
        } else {
            false
        }
    }

    /// Skip `n` bytes. Callers only skip over ASCII they have inspected.
    #[inline]
    fn advance_bytes(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(to_u32(n)).min(self.len());
    }

    /// Consume characters while `pred` holds; returns the bytes consumed.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> u32 {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.advance_bytes(len);
        to_u32(len)
    }

    #[inline]
    fn slice_from(&self, start: u32) -> &'src str {
        self.text
            .get(start as usize..self.pos as usize)
            .unwrap_or("")
    }

    /// Report a lexical error located at byte `at`.
    fn report(&self, error: &LexError, at: u32) {
        let location = span_utils::location_at(&self.file_name, self.text, at);
        self.diagnostics
            .report(error.severity(), error.to_string(), location, LEXICAL_ISSUE);
    }
}

impl<C: IdentClassifier> Iterator for Cursor<'_, C> {
    type Item = Token;

    /// Next token, or `None` once `Eof` is reached.
    fn next(&mut self) -> Option<Token> {
        let token = self.advance_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

impl<C> fmt::Debug for Cursor<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("file_name", &self.file_name)
            .field("pos", &self.pos)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "len_utf8 is at most 4"
)]
fn char_len(c: char) -> u32 {
    c.len_utf8() as u32
}

/// Convert a byte count bounded by the (clamped) source length.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Truncate `text` to the longest prefix whose offsets fit in `u32`.
fn clamp_to_u32(text: &str) -> &str {
    let limit = u32::MAX as usize;
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.get(..end).unwrap_or("")
}

#[cfg(test)]
mod tests;
