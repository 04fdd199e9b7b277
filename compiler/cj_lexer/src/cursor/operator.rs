//! Punctuation and operators by maximal munch.
//!
//! Each family checks its longest spelling first, so `**=` wins over `**`,
//! which wins over `*`. Comment openers never reach this module.

use cj_ir::TokenKind;

use super::Cursor;
use crate::classify::IdentClassifier;

impl<C: IdentClassifier> Cursor<'_, C> {
    /// Consume the operator at the cursor, or return `None` without moving.
    pub(super) fn operator(&mut self) -> Option<TokenKind> {
        let (kind, len) = self.match_operator()?;
        self.advance_bytes(len);
        Some(kind)
    }

    fn match_operator(&self) -> Option<(TokenKind, usize)> {
        let bytes = self.rest().as_bytes();
        let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
        let (next, after) = (at(1), at(2));

        let op = match at(0) {
            b'.' => dot(next, after),
            b',' => (TokenKind::Comma, 1),
            b'(' => (TokenKind::LParen, 1),
            b')' => (TokenKind::RParen, 1),
            b'[' => (TokenKind::LSquare, 1),
            b']' => (TokenKind::RSquare, 1),
            b'{' => (TokenKind::LCurl, 1),
            b'}' => (TokenKind::RCurl, 1),
            b':' => (TokenKind::Colon, 1),
            b';' => (TokenKind::Semi, 1),
            b'#' => (TokenKind::Hash, 1),
            b'@' => (TokenKind::At, 1),
            b'\\' => (TokenKind::Backslash, 1),
            b'$' => (TokenKind::Dollar, 1),
            b'?' if next == b'?' => (TokenKind::Coalescing, 2),
            b'?' => (TokenKind::Quest, 1),
            b'*' => star(next, after),
            b'%' => with_assign(next, TokenKind::Mod, TokenKind::ModAssign),
            b'/' => with_assign(next, TokenKind::Div, TokenKind::DivAssign),
            b'^' => with_assign(next, TokenKind::BitXor, TokenKind::BitXorAssign),
            b'!' => with_assign(next, TokenKind::Not, TokenKind::NotEqual),
            b'+' => plus(next),
            b'-' => minus(next),
            b'&' => ampersand(next, after),
            b'|' => pipe(next, after),
            b'<' => less(next, after),
            b'>' => greater(next, after),
            b'=' => equal(next),
            b'~' if next == b'>' => (TokenKind::Composition, 2),
            _ => return None,
        };
        Some(op)
    }
}

/// `...` `..=` `..` `.`
fn dot(next: u8, after: u8) -> (TokenKind, usize) {
    match (next, after) {
        (b'.', b'.') => (TokenKind::Ellipsis, 3),
        (b'.', b'=') => (TokenKind::ClosedRange, 3),
        (b'.', _) => (TokenKind::Range, 2),
        _ => (TokenKind::Dot, 1),
    }
}

/// `**=` `**` `*=` `*`
fn star(next: u8, after: u8) -> (TokenKind, usize) {
    match (next, after) {
        (b'*', b'=') => (TokenKind::ExpAssign, 3),
        (b'*', _) => (TokenKind::Exp, 2),
        (b'=', _) => (TokenKind::MulAssign, 2),
        _ => (TokenKind::Mul, 1),
    }
}

/// `op=` or `op`.
fn with_assign(next: u8, plain: TokenKind, assign: TokenKind) -> (TokenKind, usize) {
    if next == b'=' {
        (assign, 2)
    } else {
        (plain, 1)
    }
}

/// `++` `+=` `+`
fn plus(next: u8) -> (TokenKind, usize) {
    match next {
        b'+' => (TokenKind::Inc, 2),
        b'=' => (TokenKind::AddAssign, 2),
        _ => (TokenKind::Add, 1),
    }
}

/// `--` `->` `-=` `-`
fn minus(next: u8) -> (TokenKind, usize) {
    match next {
        b'-' => (TokenKind::Dec, 2),
        b'>' => (TokenKind::Arrow, 2),
        b'=' => (TokenKind::SubAssign, 2),
        _ => (TokenKind::Sub, 1),
    }
}

/// `&&=` `&&` `&=` `&`
fn ampersand(next: u8, after: u8) -> (TokenKind, usize) {
    match (next, after) {
        (b'&', b'=') => (TokenKind::AndAssign, 3),
        (b'&', _) => (TokenKind::And, 2),
        (b'=', _) => (TokenKind::BitAndAssign, 2),
        _ => (TokenKind::BitAnd, 1),
    }
}

/// `||=` `||` `|>` `|=` `|`
fn pipe(next: u8, after: u8) -> (TokenKind, usize) {
    match (next, after) {
        (b'|', b'=') => (TokenKind::OrAssign, 3),
        (b'|', _) => (TokenKind::Or, 2),
        (b'>', _) => (TokenKind::Pipeline, 2),
        (b'=', _) => (TokenKind::BitOrAssign, 2),
        _ => (TokenKind::BitOr, 1),
    }
}

/// `<<=` `<<` `<=` `<-` `<:` `<`
fn less(next: u8, after: u8) -> (TokenKind, usize) {
    match (next, after) {
        (b'<', b'=') => (TokenKind::LShiftAssign, 3),
        (b'<', _) => (TokenKind::LShift, 2),
        (b'=', _) => (TokenKind::Le, 2),
        (b'-', _) => (TokenKind::BackArrow, 2),
        (b':', _) => (TokenKind::UpperBound, 2),
        _ => (TokenKind::Lt, 1),
    }
}

/// `>>=` `>>` `>=` `>`
fn greater(next: u8, after: u8) -> (TokenKind, usize) {
    match (next, after) {
        (b'>', b'=') => (TokenKind::RShiftAssign, 3),
        (b'>', _) => (TokenKind::RShift, 2),
        (b'=', _) => (TokenKind::Ge, 2),
        _ => (TokenKind::Gt, 1),
    }
}

/// `==` `=>` `=`
fn equal(next: u8) -> (TokenKind, usize) {
    match next {
        b'=' => (TokenKind::Equal, 2),
        b'>' => (TokenKind::DoubleArrow, 2),
        _ => (TokenKind::Assign, 1),
    }
}
