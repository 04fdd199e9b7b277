//! Parser-facing view of a token sequence.
//!
//! Trivia (whitespace, newlines, comments) is removed and summarized on the
//! following significant token as [`TokenFlags`]. Identifiers spelled like a
//! keyword are flagged using the stream's [`KeywordTable`]; raw identifiers
//! never are.

use cj_ir::{Span, Token, TokenFlags, TokenKind};

use crate::keywords::{KeywordClass, KeywordTable};

/// Significant tokens with per-token flags and a read position.
///
/// The stream always ends with an `Eof` token; reading past the end keeps
/// returning it.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    flags: Vec<TokenFlags>,
    pos: usize,
    keywords: KeywordTable,
}

impl TokenStream {
    /// Build a stream from a full-fidelity token sequence.
    pub fn new(tokens: Vec<Token>, keywords: KeywordTable) -> Self {
        let mut significant = Vec::with_capacity(tokens.len());
        let mut flags = Vec::with_capacity(tokens.len());
        let mut pending = TokenFlags::empty();
        let mut seen_any = false;
        let mut end = 0;

        for token in tokens {
            end = token.end();
            match token.kind {
                TokenKind::Whitespace => pending |= TokenFlags::SPACE_BEFORE,
                TokenKind::Newline => pending |= TokenFlags::NEWLINE_BEFORE,
                TokenKind::LineComment | TokenKind::BlockComment => {
                    pending |= TokenFlags::COMMENT_BEFORE;
                }
                _ => {
                    let mut token_flags = pending;
                    if !seen_any || pending.has_newline_before() {
                        token_flags |= TokenFlags::LINE_START;
                    }
                    if seen_any && pending.is_empty() {
                        token_flags |= TokenFlags::ADJACENT;
                    }
                    token_flags |= classify(&token, &keywords);
                    let is_eof = token.is(TokenKind::Eof);
                    significant.push(token);
                    flags.push(token_flags);
                    if is_eof {
                        break;
                    }
                    pending = TokenFlags::empty();
                    seen_any = true;
                }
            }
        }

        if !significant.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            significant.push(Token::eof(end));
            flags.push(pending);
        }

        TokenStream {
            tokens: significant,
            flags,
            pos: 0,
            keywords,
        }
    }

    /// Current token.
    #[inline]
    pub fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Token `n` positions ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.saturating_add(n).min(last)]
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Flags of the current token.
    pub fn flags(&self) -> TokenFlags {
        let last = self.flags.len() - 1;
        self.flags[self.pos.min(last)]
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Return the current token and move past it. Stays on `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is(TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Advance if the current token has `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// True if the current token is the identifier `keyword` and the table
    /// lists it as a reserved or contextual keyword.
    pub fn at_keyword(&self, keyword: &str) -> bool {
        let token = self.peek();
        token.is(TokenKind::Ident)
            && token.text() == Some(keyword)
            && self.keywords.classify(keyword).is_some()
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Index of the current token among significant tokens.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind or fast-forward to a position from [`position`](Self::position).
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len() - 1);
    }

    /// All significant tokens, ending with `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Flags parallel to [`tokens`](Self::tokens).
    pub fn all_flags(&self) -> &[TokenFlags] {
        &self.flags
    }
}

fn classify(token: &Token, keywords: &KeywordTable) -> TokenFlags {
    match token.kind {
        TokenKind::Error => TokenFlags::HAS_ERROR,
        TokenKind::Ident => match token.text().and_then(|text| keywords.classify(text)) {
            Some(KeywordClass::Reserved) => TokenFlags::RESERVED_KEYWORD,
            Some(KeywordClass::Contextual) => TokenFlags::CONTEXTUAL_KEYWORD,
            None => TokenFlags::empty(),
        },
        _ => TokenFlags::empty(),
    }
}
