//! Escape sequence decoding for textual literals.
//!
//! Valid escapes: `\"` `\'` `\\` `\n` `\t` and `\u{H..H}` with one to eight
//! hex digits. A well-formed `\u{}` whose value is unusable decodes to
//! U+FFFD with a recoverable error attached; anything else malformed is
//! fatal for the enclosing literal.

use crate::lex_error::LexError;

/// A decoded escape sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Escape {
    pub value: char,
    /// Bytes consumed after the backslash.
    pub len: u32,
    /// Recoverable problem the caller should report.
    pub warning: Option<LexError>,
}

/// A fatal escape error and how many bytes after the backslash it covers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EscapeError {
    pub error: LexError,
    pub len: u32,
}

const MAX_UNICODE_DIGITS: usize = 8;

/// Decode the escape whose first character after `\` is `escape`.
///
/// `after` is the source text following `escape`.
pub(crate) fn decode_escape(escape: char, after: &str) -> Result<Escape, EscapeError> {
    let simple = match escape {
        '"' => '"',
        '\'' => '\'',
        '\\' => '\\',
        'n' => '\n',
        't' => '\t',
        'u' => return decode_unicode(after),
        // A raw line break is left for the literal scanner to reject.
        '\n' | '\r' => {
            return Err(EscapeError {
                error: LexError::InvalidEscape(escape),
                len: 0,
            })
        }
        other => {
            return Err(EscapeError {
                error: LexError::InvalidEscape(other),
                len: byte_len(other.len_utf8()),
            })
        }
    };
    Ok(Escape {
        value: simple,
        len: 1,
        warning: None,
    })
}

/// `after` is the text following `\u`.
fn decode_unicode(after: &str) -> Result<Escape, EscapeError> {
    let Some(body) = after.strip_prefix('{') else {
        return Err(EscapeError {
            error: LexError::MalformedUnicodeEscape,
            len: 1,
        });
    };

    let digits = body.bytes().take_while(u8::is_ascii_hexdigit).count();
    if body.as_bytes().get(digits) != Some(&b'}') {
        return Err(EscapeError {
            error: LexError::UnclosedUnicodeEscape,
            len: byte_len(2 + digits),
        });
    }

    // u { digits }
    let len = byte_len(3 + digits);
    let replaced = |warning| Escape {
        value: char::REPLACEMENT_CHARACTER,
        len,
        warning: Some(warning),
    };

    if digits == 0 {
        return Ok(replaced(LexError::EmptyUnicodeEscape));
    }
    if digits > MAX_UNICODE_DIGITS {
        return Ok(replaced(LexError::OverlongUnicodeEscape { digits }));
    }

    let Ok(value) = u32::from_str_radix(&body[..digits], 16) else {
        return Ok(replaced(LexError::OverlongUnicodeEscape { digits }));
    };
    Ok(match char::from_u32(value) {
        Some(c) => Escape {
            value: c,
            len,
            warning: None,
        },
        None => replaced(LexError::InvalidUnicodeScalar { value }),
    })
}

#[inline]
fn byte_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
