//! Shared front-end types for cjlang.
//!
//! This crate holds the data produced by the lexer and consumed by every
//! later phase:
//! - [`Span`] for half-open byte ranges into a source buffer
//! - [`Token`] / [`TokenKind`] for the lexer's output
//! - [`TokenFlags`] for trivia context folded onto significant tokens
//!
//! It has no knowledge of diagnostics or scanning, so tooling can depend on
//! it without pulling in the lexer.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenFlags, TokenKind};
