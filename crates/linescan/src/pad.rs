#![forbid(unsafe_code)]

//! Fixed-width padding.
//!
//! Widths are counted in code units (chars for `str`). The fill token is
//! repeated whole, so a multi-unit fill may overshoot the target width.
//!
//! For `str` a character outside the BMP counts as one unit, while in
//! `[u16]` it is a surrogate pair and counts as two. The same text can
//! therefore receive different padding in the two views:
//! `pad_left("\u{1F600}", 3)` adds two spaces, the UTF-16 form adds one.
//!
//! # Example
//! ```
//! use linescan::pad::{pad_left_with, pad_right};
//!
//! assert_eq!(pad_left_with("5", 3, "0"), "005");
//! assert_eq!(pad_right("ab", 4), "ab  ");
//! assert_eq!(pad_left_with("x", 4, "ab"), "ababx");
//! ```

use std::borrow::Cow;
use std::iter;

use crate::units::CodeUnits;

/// Number of whole `fill` tokens needed to bring `text` to `size` units.
fn fill_count<T: CodeUnits + ?Sized>(text: &T, size: usize, fill: &T) -> usize {
    let fill_units = fill.unit_count();
    if fill_units == 0 {
        return 0;
    }
    size.saturating_sub(text.unit_count()).div_ceil(fill_units)
}

/// Left-pad `text` with spaces to at least `size` units.
#[must_use]
pub fn pad_left<T: CodeUnits + ?Sized>(text: &T, size: usize) -> Cow<'_, T> {
    pad_left_with(text, size, T::space())
}

/// Right-pad `text` with spaces to at least `size` units.
#[must_use]
pub fn pad_right<T: CodeUnits + ?Sized>(text: &T, size: usize) -> Cow<'_, T> {
    pad_right_with(text, size, T::space())
}

/// Prepend copies of `fill` until `text` is at least `size` units long.
///
/// Returns `text` borrowed when no padding is needed or `fill` is empty.
#[must_use]
pub fn pad_left_with<'a, T: CodeUnits + ?Sized>(text: &'a T, size: usize, fill: &T) -> Cow<'a, T> {
    match fill_count(text, size, fill) {
        0 => Cow::Borrowed(text),
        count => {
            let parts: Vec<&T> = iter::repeat_n(fill, count).chain([text]).collect();
            Cow::Owned(T::concat(&parts))
        }
    }
}

/// Append copies of `fill` until `text` is at least `size` units long.
///
/// Returns `text` borrowed when no padding is needed or `fill` is empty.
#[must_use]
pub fn pad_right_with<'a, T: CodeUnits + ?Sized>(
    text: &'a T,
    size: usize,
    fill: &T,
) -> Cow<'a, T> {
    match fill_count(text, size, fill) {
        0 => Cow::Borrowed(text),
        count => {
            let parts: Vec<&T> = iter::once(text).chain(iter::repeat_n(fill, count)).collect();
            Cow::Owned(T::concat(&parts))
        }
    }
}
