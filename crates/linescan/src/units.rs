#![forbid(unsafe_code)]

//! Code-unit view of text.
//!
//! Every algorithm in this crate reads text one *code unit* at a time and
//! reports positions as *offsets*. [`CodeUnits`] abstracts over the two
//! representations that matter in practice:
//!
//! - `[u16]`: UTF-16 code units as stored. Offsets are code-unit indices and
//!   surrogate pairs are never combined.
//! - `str`: each `char` is one unit. Offsets are UTF-8 byte offsets, so they
//!   can be used to slice the original string directly.
//!
//! # Example
//! ```
//! use linescan::units::{CodeUnits, UnitClass, classify};
//!
//! let text = "a\u{3000}b";
//! let offsets: Vec<usize> = text.units().map(|(offset, _)| offset).collect();
//! assert_eq!(offsets, vec![0, 1, 4]);
//! assert_eq!(classify(0x3000), UnitClass::WhiteSpace);
//! ```

use std::ops::Range;

/// Carriage return.
pub const CR: u32 = 0x000D;
/// Line feed.
pub const LF: u32 = 0x000A;

/// Classification of a single code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitClass {
    /// Ends a logical line (CR, LF, LS, PS).
    LineTerminator,
    /// Separates content but never ends a line.
    WhiteSpace,
    /// Anything else, including unpaired surrogates.
    Content,
}

impl UnitClass {
    /// Whether this unit counts toward a line having content.
    #[inline]
    #[must_use]
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}

/// Classify a code-unit value.
#[inline]
#[must_use]
pub const fn classify(unit: u32) -> UnitClass {
    match unit {
        // CR, LF, line separator, paragraph separator
        0x000D | 0x000A | 0x2028 | 0x2029 => UnitClass::LineTerminator,
        // TAB, VT, FF, SP, NBSP
        0x0009 | 0x000B | 0x000C | 0x0020 | 0x00A0
        // ZWNBSP (BOM as a code point)
        | 0xFEFF
        // ogham space mark
        | 0x1680
        // en quad ..= hair space
        | 0x2000..=0x200A
        // narrow no-break, medium mathematical, ideographic
        | 0x202F | 0x205F | 0x3000
        // next line
        | 0x0085 => UnitClass::WhiteSpace,
        _ => UnitClass::Content,
    }
}

/// Text that can be read as a sequence of code units.
///
/// Implemented for `str` and `[u16]`. Offsets yielded by [`units`] are
/// always valid slice boundaries for [`slice`].
///
/// [`units`]: CodeUnits::units
/// [`slice`]: CodeUnits::slice
pub trait CodeUnits: ToOwned + 'static {
    /// Length of the text in offset space (bytes for `str`).
    fn offset_len(&self) -> usize;

    /// Number of code units (chars for `str`).
    fn unit_count(&self) -> usize;

    /// Iterate `(offset, unit value)` pairs from left to right.
    fn units(&self) -> impl Iterator<Item = (usize, u32)> + '_;

    /// Sub-slice by offset range.
    fn slice(&self, range: Range<usize>) -> &Self;

    /// Concatenate parts into an owned text.
    fn concat(parts: &[&Self]) -> Self::Owned;

    /// A single space unit.
    fn space() -> &'static Self;

    /// The UTF-8 byte-order mark as three code units (0xEF, 0xBB, 0xBF).
    fn utf8_bom() -> &'static Self;
}

impl CodeUnits for str {
    #[inline]
    fn offset_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn unit_count(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn units(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.char_indices().map(|(offset, c)| (offset, u32::from(c)))
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    fn concat(parts: &[&Self]) -> String {
        parts.concat()
    }

    #[inline]
    fn space() -> &'static Self {
        " "
    }

    #[inline]
    fn utf8_bom() -> &'static Self {
        "\u{EF}\u{BB}\u{BF}"
    }
}

impl CodeUnits for [u16] {
    #[inline]
    fn offset_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn unit_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn units(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.iter()
            .enumerate()
            .map(|(offset, &unit)| (offset, u32::from(unit)))
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    fn concat(parts: &[&Self]) -> Vec<u16> {
        parts.concat()
    }

    #[inline]
    fn space() -> &'static Self {
        &[0x0020]
    }

    #[inline]
    fn utf8_bom() -> &'static Self {
        &[0x00EF, 0x00BB, 0x00BF]
    }
}
