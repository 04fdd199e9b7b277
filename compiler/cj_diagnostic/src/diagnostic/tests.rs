use super::*;
use pretty_assertions::assert_eq;

#[test]
fn severity_ordering() {
    assert!(Severity::Note < Severity::Warning);
    assert!(Severity::Warning < Severity::Extension);
    assert!(Severity::Extension < Severity::ExtWarn);
    assert!(Severity::ExtWarn < Severity::Error);

    let mut sorted = Severity::ALL;
    sorted.reverse();
    sorted.sort();
    assert_eq!(sorted, Severity::ALL);
}

#[test]
fn only_error_is_error() {
    for severity in Severity::ALL {
        assert_eq!(severity.is_error(), severity == Severity::Error);
    }
}

#[test]
fn location_orders_by_file_then_line_then_column() {
    let a = SourceLocation::new("a.cj", 3, 9);
    let b = SourceLocation::new("a.cj", 4, 1);
    let c = SourceLocation::new("a.cj", 4, 2);
    let d = SourceLocation::new("b.cj", 1, 1);
    assert!(a < b);
    assert!(b < c);
    assert!(c < d);
    assert_eq!(a, SourceLocation::new("a.cj", 3, 9));
}

#[test]
fn location_display() {
    let loc = SourceLocation::new("main.cj", 2, 14);
    assert_eq!(loc.to_string(), "main.cj:2:14");
}

#[test]
fn diagnostic_display() {
    let diag = Diagnostic::new(
        Severity::Error,
        "illegal digit '2' in binary literal",
        SourceLocation::new("<stdin>", 1, 6),
        LEXICAL_ISSUE,
    );
    assert!(diag.is_error());
    assert_eq!(
        diag.to_string(),
        "<stdin>:1:6: error [Lexical Issue]: illegal digit '2' in binary literal"
    );
}
