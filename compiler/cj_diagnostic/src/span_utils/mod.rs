//! Byte offset to line/column resolution.
//!
//! Lines are separated by `\n` only; a `\r` before it is an ordinary
//! character of the preceding line. Lines and columns are 1-based and columns
//! count characters.
//!
//! For repeated lookups on the same source, use [`LineOffsetTable`] which
//! pre-computes line offsets for O(log L) lookup instead of O(n) scanning.

use std::sync::Arc;

use cj_ir::Span;

use crate::SourceLocation;

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use cj_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// offsets[i] is the byte offset where line i + 1 starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| saturating_u32(i + 1)),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        saturating_u32(line_idx) + 1
    }

    /// 1-based (line, column) of `offset`, column in characters.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0);
        (line, column_between(source, line_start as usize, offset as usize))
    }

    /// Byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Resolve `offset` into a [`SourceLocation`] in `file_name`.
    pub fn location(&self, file_name: &Arc<str>, source: &str, offset: u32) -> SourceLocation {
        let (line, column) = self.offset_to_line_col(source, offset);
        SourceLocation {
            file_name: Arc::clone(file_name),
            line,
            column,
        }
    }
}

/// 1-based line number where `span` starts.
pub fn line_number(source: &str, span: Span) -> u32 {
    line_from_offset(source, span.start)
}

/// 1-based line number of `offset`, by counting preceding newlines.
pub fn line_from_offset(source: &str, offset: u32) -> u32 {
    let end = (offset as usize).min(source.len());
    let newlines = source.as_bytes()[..end]
        .iter()
        .filter(|&&byte| byte == b'\n')
        .count();
    saturating_u32(newlines) + 1
}

/// 1-based (line, column) of `offset` by a single linear scan.
///
/// Offsets past the end clamp to the end of the source. An offset inside a
/// multi-byte character resolves to that character's column.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let end = (offset as usize).min(source.len());
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, &byte) in source.as_bytes()[..end].iter().enumerate() {
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    (line, column_between(source, line_start, end))
}

/// Resolve `offset` into a [`SourceLocation`] by linear scan.
pub fn location_at(file_name: &Arc<str>, source: &str, offset: u32) -> SourceLocation {
    let (line, column) = offset_to_line_col(source, offset);
    SourceLocation {
        file_name: Arc::clone(file_name),
        line,
        column,
    }
}

/// 1-based column of byte `offset` on a line starting at `line_start`.
fn column_between(source: &str, line_start: usize, offset: usize) -> u32 {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let start = line_start.min(end);
    let chars = source.get(start..end).map_or(0, |line| line.chars().count());
    saturating_u32(chars) + 1
}

#[inline]
fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX - 1)
}
