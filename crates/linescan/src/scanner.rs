#![forbid(unsafe_code)]

//! Single-pass line scanner.
//!
//! One left-to-right scan classifies every code unit (see
//! [`classify`](crate::units::classify)) and collects, as requested, the
//! logical lines and the offsets at which they begin.
//!
//! Line terminators are CR, LF, CRLF (one break), U+2028 and U+2029. The
//! trailing line is always flushed, so text ending in a terminator has a
//! final empty line, and empty text has exactly one empty line.
//!
//! # Example
//! ```
//! use linescan::scanner::{compute_line_starts, lines_and_line_starts, split_lines};
//!
//! assert_eq!(split_lines("a\r\nb", false), vec!["a", "b"]);
//! assert_eq!(split_lines("a\n \nb", true), vec!["a", "b"]);
//! assert_eq!(compute_line_starts("a\r\nb").as_slice(), &[0, 3]);
//!
//! let both = lines_and_line_starts("x\n");
//! assert_eq!(both.lines, vec!["x", ""]);
//! assert_eq!(both.line_starts.as_slice(), &[0, 2]);
//! ```

use crate::line_starts::LineStarts;
use crate::units::{CR, CodeUnits, LF, UnitClass, classify};

/// What a scan collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Collect line slices.
    pub lines: bool,
    /// Collect line-start offsets.
    pub line_starts: bool,
    /// Drop lines with no content unit. Line starts are never filtered.
    pub remove_empty: bool,
}

impl ScanOptions {
    /// Collect both lines and line starts, keeping empty lines.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: true,
            line_starts: true,
            remove_empty: false,
        }
    }

    /// Set whether to collect lines.
    #[must_use]
    pub const fn lines(mut self, lines: bool) -> Self {
        self.lines = lines;
        self
    }

    /// Set whether to collect line starts.
    #[must_use]
    pub const fn line_starts(mut self, line_starts: bool) -> Self {
        self.line_starts = line_starts;
        self
    }

    /// Set whether to drop empty and whitespace-only lines.
    #[must_use]
    pub const fn remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines of a text together with their start offsets.
#[derive(Debug, PartialEq, Eq)]
pub struct LinesAndLineStarts<'a, T: ?Sized> {
    /// Line slices, terminators excluded.
    pub lines: Vec<&'a T>,
    /// Offset of each line's first unit.
    pub line_starts: LineStarts,
}

impl<'a, T: ?Sized> LinesAndLineStarts<'a, T> {
    /// Iterate `(start, line)` pairs.
    ///
    /// Only meaningful when both fields were collected without removal.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a T)> + '_ {
        self.line_starts.iter().copied().zip(self.lines.iter().copied())
    }
}

/// Scan `text` once, collecting what `options` asks for.
///
/// Fields that were not requested are left empty.
#[must_use]
pub fn scan_with_options<'a, T>(text: &'a T, options: &ScanOptions) -> LinesAndLineStarts<'a, T>
where
    T: CodeUnits + ?Sized,
{
    let end = text.offset_len();
    let mut lines: Vec<&'a T> = Vec::new();
    let mut line_starts: Vec<usize> = Vec::new();

    let mut flush = |start: usize, stop: usize, non_white_space: bool| {
        if options.line_starts {
            line_starts.push(start);
        }
        if options.lines && (!options.remove_empty || non_white_space) {
            lines.push(text.slice(start..stop));
        }
    };

    let mut units = text.units().peekable();
    let mut line_start = 0;
    let mut non_white_space = false;

    while let Some((offset, unit)) = units.next() {
        match classify(unit) {
            UnitClass::LineTerminator => {
                if unit == CR {
                    units.next_if(|&(_, next)| next == LF);
                }
                flush(line_start, offset, non_white_space);
                line_start = units.peek().map_or(end, |&(next, _)| next);
                non_white_space = false;
            }
            UnitClass::WhiteSpace => {}
            UnitClass::Content => non_white_space = true,
        }
    }
    flush(line_start, end, non_white_space);

    tracing::trace!(
        units = end,
        lines = lines.len(),
        line_starts = line_starts.len(),
        remove_empty = options.remove_empty,
        "scanned text"
    );

    LinesAndLineStarts {
        lines,
        line_starts: LineStarts::from_vec(line_starts),
    }
}

/// Lines and line starts of `text`, keeping empty lines.
///
/// `lines.len() == line_starts.len()`, and line `i` begins at
/// `line_starts[i]`.
#[must_use]
pub fn lines_and_line_starts<T>(text: &T) -> LinesAndLineStarts<'_, T>
where
    T: CodeUnits + ?Sized,
{
    scan_with_options(text, &ScanOptions::new())
}

/// Split `text` into logical lines.
///
/// With `remove_empty`, lines holding only whitespace (or nothing) are
/// dropped.
#[must_use]
pub fn split_lines<T>(text: &T, remove_empty: bool) -> Vec<&T>
where
    T: CodeUnits + ?Sized,
{
    let options = ScanOptions::new()
        .line_starts(false)
        .remove_empty(remove_empty);
    scan_with_options(text, &options).lines
}

/// Offsets at which each logical line of `text` begins.
#[must_use]
pub fn compute_line_starts<T>(text: &T) -> LineStarts
where
    T: CodeUnits + ?Sized,
{
    scan_with_options(text, &ScanOptions::new().lines(false)).line_starts
}
