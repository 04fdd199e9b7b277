//! Diagnostic records.

use std::fmt;
use std::sync::Arc;

/// Category tag carried by every diagnostic the lexer emits.
pub const LEXICAL_ISSUE: &str = "Lexical Issue";

/// Severity level of a diagnostic, ordered from least to most serious.
///
/// `Extension` and `ExtWarn` mark uses of non-standard language extensions:
/// the first is informational, the second is a warning that is promoted
/// above ordinary warnings.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    Note,
    Warning,
    Extension,
    ExtWarn,
    Error,
}

impl Severity {
    /// All severities, least serious first.
    pub const ALL: [Severity; 5] = [
        Severity::Note,
        Severity::Warning,
        Severity::Extension,
        Severity::ExtWarn,
        Severity::Error,
    ];

    #[inline]
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Extension => write!(f, "extension"),
            Severity::ExtWarn => write!(f, "extension warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A resolved position in a named source file.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
/// Ordering is lexicographic by file name, then line, then column.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SourceLocation {
    pub file_name: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file_name: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        SourceLocation {
            file_name: file_name.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}

/// A single reported problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
    /// Free-text grouping tag, e.g. [`LEXICAL_ISSUE`].
    pub category: String,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        location: SourceLocation,
        category: impl Into<String>,
    ) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            location,
            category: category.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}]: {}",
            self.location, self.severity, self.category, self.message
        )
    }
}

#[cfg(test)]
mod tests;
