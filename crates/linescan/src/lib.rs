#![forbid(unsafe_code)]

//! Line segmentation for source and text tooling.
//!
//! This crate splits text into logical lines and computes the offset at
//! which each line begins, for stable line/column addressing in
//! diagnostics and editors:
//! - [`split_lines`] - logical lines, optionally without blank ones
//! - [`compute_line_starts`] - line-start offsets as [`LineStarts`]
//! - [`lines_and_line_starts`] - both from one scan
//! - [`bom`] - byte-order-mark detection, insertion and removal
//! - [`pad`] - fixed-width padding
//!
//! Every function works on `str` (offsets are UTF-8 byte offsets) and on
//! `[u16]` (offsets are UTF-16 code units), see [`CodeUnits`].
//!
//! Line terminators are CR, LF, CRLF, U+2028 and U+2029. Unicode spaces
//! such as U+3000 or U+00A0 (and U+0085) are whitespace but never end a
//! line.
//!
//! # Example
//! ```
//! use linescan::{LinePosition, compute_line_starts, split_lines};
//!
//! let source = "let a = 1;\r\n\r\nlet b = a;\n";
//! assert_eq!(split_lines(source, false), vec!["let a = 1;", "", "let b = a;", ""]);
//! assert_eq!(split_lines(source, true), vec!["let a = 1;", "let b = a;"]);
//!
//! let starts = compute_line_starts(source);
//! assert_eq!(starts.as_slice(), &[0, 12, 14, 25]);
//! assert_eq!(starts.position_of(18), LinePosition::new(2, 4));
//!
//! // UTF-16 text is addressed in code units.
//! let wide: Vec<u16> = "\u{1F600}\nx".encode_utf16().collect();
//! assert_eq!(compute_line_starts(wide.as_slice()).as_slice(), &[0, 3]);
//! ```

pub mod bom;
pub mod line_starts;
pub mod pad;
pub mod scanner;
pub mod units;

pub use bom::{
    ByteOrderMark, add_utf8_byte_order_mark, byte_order_mark, byte_order_mark_length,
    remove_byte_order_mark,
};
pub use line_starts::{LinePosition, LineStarts};
pub use pad::{pad_left, pad_left_with, pad_right, pad_right_with};
pub use scanner::{
    LinesAndLineStarts, ScanOptions, compute_line_starts, lines_and_line_starts,
    scan_with_options, split_lines,
};
pub use units::{CodeUnits, UnitClass, classify};
