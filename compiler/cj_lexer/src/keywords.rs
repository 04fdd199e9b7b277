//! Keyword tables.
//!
//! The lexer itself never produces keyword tokens: `let` is an
//! [`Ident`](cj_ir::TokenKind::Ident) like any other. Keyword status is a
//! property of the language configuration, looked up by the parser-facing
//! [`TokenStream`](crate::TokenStream).
//!
//! Two classes:
//! 1. **Reserved** keywords can never name a user binding.
//! 2. **Contextual** keywords (`open`, `get`, ...) are keywords only where
//!    the grammar expects them and identifiers everywhere else.

use rustc_hash::FxHashSet;

const CANGJIE_RESERVED: &[&str] = &[
    "as",
    "break",
    "Bool",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "Rune",
    "do",
    "else",
    "enum",
    "extend",
    "for",
    "from",
    "func",
    "false",
    "finally",
    "foreign",
    "Float16",
    "Float32",
    "Float64",
    "if",
    "in",
    "is",
    "init",
    "inout",
    "import",
    "interface",
    "Int8",
    "Int16",
    "Int32",
    "Int64",
    "IntNative",
    "let",
    "mut",
    "main",
    "macro",
    "match",
    "Nothing",
    "operator",
    "prop",
    "package",
    "quote",
    "return",
    "spawn",
    "super",
    "static",
    "struct",
    "synchronized",
    "try",
    "this",
    "true",
    "type",
    "throw",
    "This",
    "unsafe",
    "Unit",
    "UInt8",
    "UInt16",
    "UInt32",
    "UInt64",
    "UIntNative",
    "var",
    "VArray",
    "where",
    "while",
];

const CANGJIE_CONTEXTUAL: &[&str] = &[
    "abstract",
    "open",
    "override",
    "private",
    "protected",
    "public",
    "redef",
    "get",
    "set",
    "sealed",
];

/// How an identifier's spelling relates to the keyword table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeywordClass {
    Reserved,
    Contextual,
}

/// Immutable set of reserved and contextual keywords.
#[derive(Clone, Debug)]
pub struct KeywordTable {
    reserved: FxHashSet<&'static str>,
    contextual: FxHashSet<&'static str>,
    /// Byte length range covering every keyword, for fast rejection.
    min_len: usize,
    max_len: usize,
}

impl KeywordTable {
    /// Build a table from explicit word lists.
    ///
    /// A word listed in both sets is treated as reserved.
    pub fn new(
        reserved: impl IntoIterator<Item = &'static str>,
        contextual: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        let reserved: FxHashSet<_> = reserved.into_iter().collect();
        let contextual: FxHashSet<_> = contextual
            .into_iter()
            .filter(|word| !reserved.contains(word))
            .collect();
        let lengths = reserved.iter().chain(&contextual).map(|word| word.len());
        let min_len = lengths.clone().min().unwrap_or(0);
        let max_len = lengths.max().unwrap_or(0);
        KeywordTable {
            reserved,
            contextual,
            min_len,
            max_len,
        }
    }

    /// The keyword set of the Cangjie language.
    pub fn cangjie() -> Self {
        Self::new(
            CANGJIE_RESERVED.iter().copied(),
            CANGJIE_CONTEXTUAL.iter().copied(),
        )
    }

    /// Classify an identifier spelling.
    #[inline]
    pub fn classify(&self, text: &str) -> Option<KeywordClass> {
        if !(self.min_len..=self.max_len).contains(&text.len()) {
            return None;
        }
        if self.reserved.contains(text) {
            Some(KeywordClass::Reserved)
        } else if self.contextual.contains(text) {
            Some(KeywordClass::Contextual)
        } else {
            None
        }
    }

    pub fn is_reserved(&self, text: &str) -> bool {
        self.classify(text) == Some(KeywordClass::Reserved)
    }

    pub fn is_contextual(&self, text: &str) -> bool {
        self.classify(text) == Some(KeywordClass::Contextual)
    }

    /// Reserved keywords, in no particular order.
    pub fn reserved(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reserved.iter().copied()
    }

    /// Contextual keywords, in no particular order.
    pub fn contextual(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.contextual.iter().copied()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::cangjie()
    }
}
