//! Plain-text diagnostic output.
//!
//! Each diagnostic renders as a `severity[category]: message` header followed
//! by an indented `--> file:line:column` pointer. No colors; the output is
//! meant for logs and test snapshots.

use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticEngine, Severity};

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Writes diagnostics as plain text to any [`Write`] sink.
pub struct PlainEmitter<W: Write> {
    writer: W,
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(writer: W) -> Self {
        PlainEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Emit everything in `engine`, then a summary line.
    pub fn emit_engine(&mut self, engine: &DiagnosticEngine) {
        let diagnostics = engine.diagnostics();
        self.emit_all(&diagnostics);
        let warnings = diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning | Severity::ExtWarn))
            .count();
        self.emit_summary(engine.error_count(), warnings);
        self.flush();
    }
}

impl PlainEmitter<io::Stderr> {
    pub fn stderr() -> Self {
        PlainEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for PlainEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(
            self.writer,
            "{}[{}]: {}",
            diagnostic.severity, diagnostic.category, diagnostic.message
        );
        let _ = writeln!(self.writer, "  --> {}", diagnostic.location);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        match (error_count, warning_count) {
            (0, 0) => {}
            (0, w) => {
                let _ = writeln!(self.writer, "{w} warning{} emitted", plural_s(w));
            }
            (e, 0) => {
                let _ = writeln!(self.writer, "{e} error{} emitted", plural_s(e));
            }
            (e, w) => {
                let _ = writeln!(
                    self.writer,
                    "{e} error{} and {w} warning{} emitted",
                    plural_s(e),
                    plural_s(w)
                );
            }
        }
    }
}
