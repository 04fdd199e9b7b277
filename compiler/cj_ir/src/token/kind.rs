//! The closed set of token kinds.

use std::fmt;

/// Token kinds produced by the lexer.
///
/// A flat enumeration: every multi-character operator is its own variant
/// rather than a composition of single-character tokens. Kinds carry no
/// payload; decoded values live in [`Token::text`](super::Token::text).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Zero-length, produced forever after the last token.
    Eof,

    // === Trivia ===
    /// Run of pattern whitespace, never containing a newline.
    Whitespace,
    /// `\n` or `\r\n`.
    Newline,
    /// `// ...` up to (excluding) the line terminator.
    LineComment,
    /// `/* ... */`, nesting.
    BlockComment,

    // === Identifiers ===
    Ident,
    /// `` `name` ``, text includes the backticks.
    RawIdent,

    // === Numeric literals ===
    BinaryLiteral,
    OctalLiteral,
    DecimalLiteral,
    HexadecimalLiteral,
    FloatLiteral,

    // === Textual literals ===
    /// `"..."` or `'...'`.
    LineStringLiteral,
    /// `"""..."""`.
    MultiLineStringLiteral,
    /// `b"..."`.
    ByteStringLiteral,
    /// `b'x'`.
    ByteLiteral,
    /// `r'x'` or `r"x"`.
    RuneLiteral,

    // === Punctuation ===
    Dot,          // .
    Comma,        // ,
    LParen,       // (
    RParen,       // )
    LSquare,      // [
    RSquare,      // ]
    LCurl,        // {
    RCurl,        // }
    Colon,        // :
    Semi,         // ;
    Hash,         // #
    At,           // @
    Quest,        // ?
    Coalescing,   // ??
    Backslash,    // \
    Dollar,       // $
    Arrow,        // ->
    BackArrow,    // <-
    DoubleArrow,  // =>
    Ellipsis,     // ...
    ClosedRange,  // ..=
    Range,        // ..
    UpperBound,   // <:
    Pipeline,     // |>
    Composition,  // ~>

    // === Arithmetic & logic ===
    Exp,    // **
    Mul,    // *
    Mod,    // %
    Div,    // /
    Add,    // +
    Sub,    // -
    Inc,    // ++
    Dec,    // --
    And,    // &&
    Or,     // ||
    Not,    // !
    BitAnd, // &
    BitOr,  // |
    BitXor, // ^
    LShift, // <<
    RShift, // >>

    // === Comparison ===
    Lt,       // <
    Gt,       // >
    Le,       // <=
    Ge,       // >=
    NotEqual, // !=
    Equal,    // ==

    // === Assignment ===
    Assign,       // =
    AddAssign,    // +=
    SubAssign,    // -=
    MulAssign,    // *=
    ExpAssign,    // **=
    DivAssign,    // /=
    ModAssign,    // %=
    AndAssign,    // &&=
    OrAssign,     // ||=
    BitAndAssign, // &=
    BitOrAssign,  // |=
    BitXorAssign, // ^=
    LShiftAssign, // <<=
    RShiftAssign, // >>=

    /// Input that could not be scanned. The token's text is the message.
    Error,
}

impl TokenKind {
    /// Fixed source spelling for punctuation and operators.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, literals,
    /// trivia, errors) and for `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LSquare => "[",
            TokenKind::RSquare => "]",
            TokenKind::LCurl => "{",
            TokenKind::RCurl => "}",
            TokenKind::Colon => ":",
            TokenKind::Semi => ";",
            TokenKind::Hash => "#",
            TokenKind::At => "@",
            TokenKind::Quest => "?",
            TokenKind::Coalescing => "??",
            TokenKind::Backslash => "\\",
            TokenKind::Dollar => "$",
            TokenKind::Arrow => "->",
            TokenKind::BackArrow => "<-",
            TokenKind::DoubleArrow => "=>",
            TokenKind::Ellipsis => "...",
            TokenKind::ClosedRange => "..=",
            TokenKind::Range => "..",
            TokenKind::UpperBound => "<:",
            TokenKind::Pipeline => "|>",
            TokenKind::Composition => "~>",
            TokenKind::Exp => "**",
            TokenKind::Mul => "*",
            TokenKind::Mod => "%",
            TokenKind::Div => "/",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Not => "!",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::BitXor => "^",
            TokenKind::LShift => "<<",
            TokenKind::RShift => ">>",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::NotEqual => "!=",
            TokenKind::Equal => "==",
            TokenKind::Assign => "=",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::ExpAssign => "**=",
            TokenKind::DivAssign => "/=",
            TokenKind::ModAssign => "%=",
            TokenKind::AndAssign => "&&=",
            TokenKind::OrAssign => "||=",
            TokenKind::BitAndAssign => "&=",
            TokenKind::BitOrAssign => "|=",
            TokenKind::BitXorAssign => "^=",
            TokenKind::LShiftAssign => "<<=",
            TokenKind::RShiftAssign => ">>=",
            TokenKind::Eof
            | TokenKind::Whitespace
            | TokenKind::Newline
            | TokenKind::LineComment
            | TokenKind::BlockComment
            | TokenKind::Ident
            | TokenKind::RawIdent
            | TokenKind::BinaryLiteral
            | TokenKind::OctalLiteral
            | TokenKind::DecimalLiteral
            | TokenKind::HexadecimalLiteral
            | TokenKind::FloatLiteral
            | TokenKind::LineStringLiteral
            | TokenKind::MultiLineStringLiteral
            | TokenKind::ByteStringLiteral
            | TokenKind::ByteLiteral
            | TokenKind::RuneLiteral
            | TokenKind::Error => return None,
        };
        Some(text)
    }

    /// Human-readable name used in diagnostics and parser messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::Ident => "identifier",
            TokenKind::RawIdent => "raw identifier",
            TokenKind::BinaryLiteral => "binary literal",
            TokenKind::OctalLiteral => "octal literal",
            TokenKind::DecimalLiteral => "decimal literal",
            TokenKind::HexadecimalLiteral => "hexadecimal literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::LineStringLiteral => "string literal",
            TokenKind::MultiLineStringLiteral => "multi-line string literal",
            TokenKind::ByteStringLiteral => "byte string literal",
            TokenKind::ByteLiteral => "byte literal",
            TokenKind::RuneLiteral => "rune literal",
            TokenKind::Error => "invalid token",
            other => other.lexeme().unwrap_or("token"),
        }
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    #[inline]
    pub const fn is_identifier(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::RawIdent)
    }

    #[inline]
    pub const fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            TokenKind::BinaryLiteral
                | TokenKind::OctalLiteral
                | TokenKind::DecimalLiteral
                | TokenKind::HexadecimalLiteral
                | TokenKind::FloatLiteral
        )
    }

    #[inline]
    pub const fn is_textual_literal(self) -> bool {
        matches!(
            self,
            TokenKind::LineStringLiteral
                | TokenKind::MultiLineStringLiteral
                | TokenKind::ByteStringLiteral
                | TokenKind::ByteLiteral
                | TokenKind::RuneLiteral
        )
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        self.is_numeric_literal() || self.is_textual_literal()
    }

    /// Compound assignment operators (`+=`, `**=`, `<<=`, ...), not `=`.
    pub const fn is_compound_assign(self) -> bool {
        matches!(
            self,
            TokenKind::AddAssign
                | TokenKind::SubAssign
                | TokenKind::MulAssign
                | TokenKind::ExpAssign
                | TokenKind::DivAssign
                | TokenKind::ModAssign
                | TokenKind::AndAssign
                | TokenKind::OrAssign
                | TokenKind::BitAndAssign
                | TokenKind::BitOrAssign
                | TokenKind::BitXorAssign
                | TokenKind::LShiftAssign
                | TokenKind::RShiftAssign
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.display_name()),
        }
    }
}
