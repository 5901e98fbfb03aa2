#![forbid(unsafe_code)]

//! Line-start tables and offset to line/column lookups.
//!
//! A [`LineStarts`] table is produced by the scanner and maps offsets in the
//! scanned text back to zero-based line/column positions, which is what
//! diagnostics and editors usually want.
//!
//! # Example
//! ```
//! use linescan::{LinePosition, compute_line_starts};
//!
//! let starts = compute_line_starts("fn main() {\r\n    oops\n}");
//! assert_eq!(starts.as_slice(), &[0, 13, 22]);
//! assert_eq!(starts.position_of(17), LinePosition::new(1, 4));
//! assert_eq!(starts.offset_of(LinePosition::new(2, 0)), Some(22));
//! ```

use std::ops::Deref;

/// Zero-based line and column.
///
/// The column is measured in the offset units of the scanned text
/// (UTF-16 code units for `[u16]`, bytes for `str`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LinePosition {
    /// Zero-based line index.
    pub line: usize,
    /// Offset from the start of the line.
    pub column: usize,
}

impl LinePosition {
    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Strictly increasing offsets at which each logical line begins.
///
/// Tables produced by the scanner always start with `0` and hold one entry
/// per logical line, including a trailing empty line after a final
/// terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LineStarts(Vec<usize>);

impl LineStarts {
    pub(crate) fn from_vec(starts: Vec<usize>) -> Self {
        debug_assert!(starts.windows(2).all(|w| w[0] < w[1]));
        Self(starts)
    }

    /// Borrow the offsets.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Take the offsets.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Number of logical lines.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.0.len()
    }

    /// Offset at which `line` begins.
    #[inline]
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.0.get(line).copied()
    }

    /// Index of the line containing `offset`.
    ///
    /// Offsets past the last line start belong to the last line. An empty
    /// table maps everything to line 0.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        // Number of starts <= offset, minus one for the containing line.
        self.0
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Zero-based line/column of `offset`.
    #[must_use]
    pub fn position_of(&self, offset: usize) -> LinePosition {
        let line = self.line_of(offset);
        let start = self.line_start(line).unwrap_or(0);
        LinePosition::new(line, offset.saturating_sub(start))
    }

    /// Offset of `position`, if its line exists.
    ///
    /// The column is not checked against the line length.
    #[must_use]
    pub fn offset_of(&self, position: LinePosition) -> Option<usize> {
        self.line_start(position.line)?.checked_add(position.column)
    }
}

impl Deref for LineStarts {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<LineStarts> for Vec<usize> {
    fn from(starts: LineStarts) -> Self {
        starts.0
    }
}

impl<'a> IntoIterator for &'a LineStarts {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
