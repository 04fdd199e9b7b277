//! Shared diagnostic sink.
//!
//! One engine exists per compilation. Cursors hold a clone of the handle, so
//! every clone appends to the same ordered sequence.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::{Diagnostic, Severity, SourceLocation};

/// Opaque marker for the engine's length at some point in time.
///
/// Produced by [`DiagnosticEngine::checkpoint`]; passing it back to
/// [`DiagnosticEngine::rollback`] discards everything reported since.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DiagnosticCheckpoint {
    len: usize,
}

/// Ordered, append-only collection of diagnostics behind a shared handle.
///
/// Cloning is cheap and yields a handle to the same storage. Reporting never
/// fails and never panics.
#[derive(Clone, Default)]
pub struct DiagnosticEngine {
    inner: Arc<Mutex<Vec<Diagnostic>>>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn report(
        &self,
        severity: Severity,
        message: impl Into<String>,
        location: SourceLocation,
        category: impl Into<String>,
    ) {
        self.push(Diagnostic::new(severity, message, location, category));
    }

    /// Append an already-built diagnostic.
    pub fn push(&self, diagnostic: Diagnostic) {
        debug!(
            severity = %diagnostic.severity,
            location = %diagnostic.location,
            category = %diagnostic.category,
            message = %diagnostic.message,
            "diagnostic"
        );
        self.inner.lock().push(diagnostic);
    }

    pub fn note(&self, message: impl Into<String>, location: SourceLocation, category: &str) {
        self.report(Severity::Note, message, location, category);
    }

    pub fn warning(&self, message: impl Into<String>, location: SourceLocation, category: &str) {
        self.report(Severity::Warning, message, location, category);
    }

    pub fn error(&self, message: impl Into<String>, location: SourceLocation, category: &str) {
        self.report(Severity::Error, message, location, category);
    }

    /// True iff any stored diagnostic has severity [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.inner.lock().iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.inner.lock().iter().filter(|d| d.is_error()).count()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Snapshot of every diagnostic, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.lock().clone()
    }

    /// Diagnostics whose severity is `severity` or more serious.
    pub fn at_least(&self, severity: Severity) -> Vec<Diagnostic> {
        self.filtered(|d| d.severity >= severity)
    }

    /// Diagnostics with exactly `severity`.
    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.filtered(|d| d.severity == severity)
    }

    /// Remove and return every diagnostic, leaving the engine empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.inner.lock())
    }

    pub fn checkpoint(&self) -> DiagnosticCheckpoint {
        DiagnosticCheckpoint { len: self.len() }
    }

    /// Drop diagnostics reported after `checkpoint`.
    ///
    /// A checkpoint taken before a [`take`](Self::take) may be longer than
    /// the current sequence; rolling back to it is a no-op.
    pub fn rollback(&self, checkpoint: DiagnosticCheckpoint) {
        let mut diagnostics = self.inner.lock();
        if checkpoint.len < diagnostics.len() {
            debug!(
                discarded = diagnostics.len() - checkpoint.len,
                "diagnostic rollback"
            );
            diagnostics.truncate(checkpoint.len);
        }
    }

    /// True if both handles feed the same storage.
    pub fn shares_storage_with(&self, other: &DiagnosticEngine) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn filtered(&self, keep: impl Fn(&Diagnostic) -> bool) -> Vec<Diagnostic> {
        self.inner
            .lock()
            .iter()
            .filter(|&d| keep(d))
            .cloned()
            .collect()
    }
}

impl fmt::Debug for DiagnosticEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticEngine")
            .field("diagnostics", &*self.inner.lock())
            .finish()
    }
}
