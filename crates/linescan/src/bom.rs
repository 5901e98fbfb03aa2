#![forbid(unsafe_code)]

//! Byte-order-mark detection, insertion and removal.
//!
//! Marks are matched on raw code-unit values as stored, with no byte
//! swapping:
//!
//! | Mark | Units |
//! |------|-------|
//! | UTF-16 LE | `0xFF 0xFE` |
//! | UTF-16 BE | `0xFE 0xFF` |
//! | UTF-8 | `0xEF 0xBB 0xBF` |
//!
//! This is the shape a mark takes when encoded bytes were widened one to one
//! into code units. The decoded code point U+FEFF is *not* a mark here.
//!
//! # Example
//! ```
//! use linescan::bom::{ByteOrderMark, add_utf8_byte_order_mark, remove_byte_order_mark};
//!
//! let marked = add_utf8_byte_order_mark("abc");
//! assert_eq!(ByteOrderMark::detect(&*marked), Some(ByteOrderMark::Utf8));
//! assert_eq!(remove_byte_order_mark(&*marked), "abc");
//!
//! assert_eq!(ByteOrderMark::detect("\u{FEFF}abc"), None);
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;

use crate::units::CodeUnits;

/// A recognized byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrderMark {
    /// `0xFF 0xFE`
    Utf16Le,
    /// `0xFE 0xFF`
    Utf16Be,
    /// `0xEF 0xBB 0xBF`
    Utf8,
}

impl ByteOrderMark {
    /// Detect the mark at the start of `text`.
    ///
    /// UTF-16 marks are checked before the UTF-8 one.
    #[must_use]
    pub fn detect<T: CodeUnits + ?Sized>(text: &T) -> Option<Self> {
        let head: SmallVec<[u32; 3]> = text.units().take(3).map(|(_, unit)| unit).collect();
        match head.as_slice() {
            [0xFF, 0xFE, ..] => Some(Self::Utf16Le),
            [0xFE, 0xFF, ..] => Some(Self::Utf16Be),
            [0xEF, 0xBB, 0xBF] => Some(Self::Utf8),
            _ => None,
        }
    }

    /// Length of the mark in code units.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Utf16Le | Self::Utf16Be => 2,
            Self::Utf8 => 3,
        }
    }

    /// The mark's code-unit values.
    #[must_use]
    pub const fn units(self) -> &'static [u16] {
        match self {
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
        }
    }

    /// Whether this is one of the UTF-16 marks.
    #[inline]
    #[must_use]
    pub const fn is_utf16(self) -> bool {
        matches!(self, Self::Utf16Le | Self::Utf16Be)
    }
}

/// Offset just past the first `count` units of `text`.
fn offset_after<T: CodeUnits + ?Sized>(text: &T, count: usize) -> usize {
    text.units()
        .nth(count)
        .map_or(text.offset_len(), |(offset, _)| offset)
}

/// Length of the leading mark in code units: 0, 2 or 3.
#[must_use]
pub fn byte_order_mark_length<T: CodeUnits + ?Sized>(text: &T) -> usize {
    ByteOrderMark::detect(text).map_or(0, ByteOrderMark::len)
}

/// The leading mark of `text`, or an empty slice.
#[must_use]
pub fn byte_order_mark<T: CodeUnits + ?Sized>(text: &T) -> &T {
    let end = offset_after(text, byte_order_mark_length(text));
    text.slice(0..end)
}

/// `text` without its leading mark. Returns `text` itself when unmarked.
#[must_use]
pub fn remove_byte_order_mark<T: CodeUnits + ?Sized>(text: &T) -> &T {
    match byte_order_mark_length(text) {
        0 => text,
        len => text.slice(offset_after(text, len)..text.offset_len()),
    }
}

/// Prepend the UTF-8 mark unless `text` already carries any mark.
///
/// An existing UTF-16 mark is left alone, never converted.
#[must_use]
pub fn add_utf8_byte_order_mark<T: CodeUnits + ?Sized>(text: &T) -> Cow<'_, T> {
    if byte_order_mark_length(text) != 0 {
        return Cow::Borrowed(text);
    }
    tracing::trace!(units = text.offset_len(), "prepending utf-8 byte order mark");
    Cow::Owned(T::concat(&[T::utf8_bom(), text]))
}
