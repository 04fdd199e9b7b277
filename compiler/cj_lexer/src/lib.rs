//! Hand-written, full-fidelity lexer for cjlang.
//!
//! [`Cursor`] scans a source buffer into [`Token`]s one at a time. Every
//! byte of the input lands in exactly one token, trivia included, so the
//! token sequence reproduces the source exactly. Malformed input never
//! aborts the scan: problems are reported to a shared
//! [`DiagnosticEngine`] and the cursor keeps going.
//!
//! The parser-facing view is [`TokenStream`], which drops trivia, folds it
//! into [`TokenFlags`](cj_ir::TokenFlags) and classifies keywords against a
//! [`KeywordTable`].

mod classify;
mod cursor;
mod escape;
mod keywords;
mod lex_error;
mod token_stream;

pub use classify::{is_pattern_whitespace, IdentClassifier, UnicodeXid};
pub use cursor::{Cursor, CursorSnapshot};
pub use keywords::{KeywordClass, KeywordTable};
pub use lex_error::{LexError, LexFailure};
pub use token_stream::TokenStream;

use cj_diagnostic::DiagnosticEngine;
use cj_ir::Token;

/// Tokenize `source`, reporting problems to `diagnostics`.
///
/// The result always ends with exactly one `Eof` token.
pub fn tokenize(source: &str, diagnostics: &DiagnosticEngine) -> Vec<Token> {
    Cursor::new(source)
        .with_diagnostics(diagnostics.clone())
        .tokenize()
}

/// Tokenize `source` and wrap the result for the parser.
pub fn lex(source: &str, diagnostics: &DiagnosticEngine) -> TokenStream {
    TokenStream::new(tokenize(source, diagnostics), KeywordTable::cangjie())
}
