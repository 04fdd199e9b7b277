//! Character classification for identifiers and whitespace.

/// Decides which characters may start or continue an identifier.
///
/// The cursor is generic over this trait so tests can substitute a
/// restricted alphabet without touching the Unicode tables.
pub trait IdentClassifier {
    fn is_id_start(&self, c: char) -> bool;
    fn is_id_continue(&self, c: char) -> bool;
}

/// `_` or `XID_Start`, followed by `XID_Continue`.
///
/// ASCII is resolved inline; everything else goes through `unicode-ident`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct UnicodeXid;

impl IdentClassifier for UnicodeXid {
    #[inline]
    fn is_id_start(&self, c: char) -> bool {
        if c.is_ascii() {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            unicode_ident::is_xid_start(c)
        }
    }

    #[inline]
    fn is_id_continue(&self, c: char) -> bool {
        if c.is_ascii() {
            c.is_ascii_alphanumeric() || c == '_'
        } else {
            unicode_ident::is_xid_continue(c)
        }
    }
}

/// Unicode `Pattern_White_Space`.
#[inline]
pub fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{0085}'
            | '\u{200E}'
            | '\u{200F}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
