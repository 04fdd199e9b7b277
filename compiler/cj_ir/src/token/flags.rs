//! Per-token metadata flags.

use bitflags::bitflags;

bitflags! {
    /// Trivia context and keyword classification for a significant token.
    ///
    /// The parser-facing token stream drops whitespace and comments; these
    /// flags keep what the parser still needs to know about them (e.g. a
    /// newline acting as a statement terminator).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TokenFlags: u8 {
        /// Horizontal whitespace preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A newline preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// A comment preceded this token.
        const COMMENT_BEFORE = 1 << 2;
        /// First significant token on its line.
        const LINE_START = 1 << 3;
        /// No trivia between this token and the previous one.
        const ADJACENT = 1 << 4;
        /// The token is an error token.
        const HAS_ERROR = 1 << 5;
        /// Identifier spelled like a reserved keyword.
        const RESERVED_KEYWORD = 1 << 6;
        /// Identifier spelled like a contextual keyword.
        const CONTEXTUAL_KEYWORD = 1 << 7;
    }
}

impl TokenFlags {
    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn has_space_before(self) -> bool {
        self.contains(Self::SPACE_BEFORE)
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(Self::ADJACENT)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.intersects(Self::RESERVED_KEYWORD.union(Self::CONTEXTUAL_KEYWORD))
    }
}

const _: () = assert!(std::mem::size_of::<TokenFlags>() == 1);
