//! Diagnostic collection for the cjlang front end.
//!
//! Scanning never aborts on malformed input. Instead every problem becomes a
//! [`Diagnostic`] appended to a shared [`DiagnosticEngine`]:
//! - [`Severity`] orders how serious a diagnostic is
//! - [`SourceLocation`] names the file, line and column it points at
//! - [`span_utils`] resolves byte offsets to 1-based line/column pairs
//! - [`emitter`] renders collected diagnostics as plain text

mod diagnostic;
pub mod emitter;
mod engine;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity, SourceLocation, LEXICAL_ISSUE};
pub use engine::{DiagnosticCheckpoint, DiagnosticEngine};
