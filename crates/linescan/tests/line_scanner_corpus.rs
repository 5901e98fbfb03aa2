#![forbid(unsafe_code)]

//! Line scanner corpus tests.
//!
//! Each case is run against both the `str` view and the UTF-16 view of the
//! same text. Expected line starts are given in UTF-16 code units; the
//! `str` view is checked by re-encoding its lines.
//! - ASCII terminators (CR, LF, CRLF)
//! - Unicode separators (U+2028, U+2029) and NEL
//! - Whitespace-only lines under removal
//! - Astral characters (surrogate pairs in UTF-16)

use linescan::{LinePosition, compute_line_starts, lines_and_line_starts, split_lines};

// =============================================================================
// Corpus
// =============================================================================

#[derive(Debug, Clone)]
struct LineCase {
    input: &'static str,
    description: &'static str,
    lines: &'static [&'static str],
    /// Line starts in UTF-16 code units.
    starts: &'static [usize],
    /// Lines left after blank-line removal.
    non_empty: &'static [&'static str],
}

impl LineCase {
    const fn new(
        input: &'static str,
        description: &'static str,
        lines: &'static [&'static str],
        starts: &'static [usize],
        non_empty: &'static [&'static str],
    ) -> Self {
        Self {
            input,
            description,
            lines,
            starts,
            non_empty,
        }
    }
}

const CORPUS: &[LineCase] = &[
    LineCase::new("", "empty", &[""], &[0], &[]),
    LineCase::new("abc", "no terminator", &["abc"], &[0], &["abc"]),
    LineCase::new("a\nb", "LF", &["a", "b"], &[0, 2], &["a", "b"]),
    LineCase::new("a\rb", "CR", &["a", "b"], &[0, 2], &["a", "b"]),
    LineCase::new("a\r\nb", "CRLF", &["a", "b"], &[0, 3], &["a", "b"]),
    LineCase::new("a\n\rb", "LF then CR", &["a", "", "b"], &[0, 2, 3], &["a", "b"]),
    LineCase::new("a\r\r\nb", "CR then CRLF", &["a", "", "b"], &[0, 2, 4], &["a", "b"]),
    LineCase::new("a\n", "trailing LF", &["a", ""], &[0, 2], &["a"]),
    LineCase::new("a\r\n", "trailing CRLF", &["a", ""], &[0, 3], &["a"]),
    LineCase::new("\r\n", "only CRLF", &["", ""], &[0, 2], &[]),
    LineCase::new(
        "a\u{2028}b\u{2029}c",
        "line and paragraph separators",
        &["a", "b", "c"],
        &[0, 2, 4],
        &["a", "b", "c"],
    ),
    LineCase::new("a\u{0085}b", "NEL is whitespace", &["a\u{0085}b"], &[0], &["a\u{0085}b"]),
    LineCase::new(
        "x\n \t\u{000B}\u{000C}\n\u{00A0}\u{1680}\u{2007}\u{202F}\u{205F}\u{3000}\u{FEFF}\ny",
        "whitespace-only lines",
        &[
            "x",
            " \t\u{000B}\u{000C}",
            "\u{00A0}\u{1680}\u{2007}\u{202F}\u{205F}\u{3000}\u{FEFF}",
            "y",
        ],
        &[0, 2, 7, 15],
        &["x", "y"],
    ),
    LineCase::new(
        "\u{200B}\n\u{0085}",
        "zero width space is content",
        &["\u{200B}", "\u{0085}"],
        &[0, 2],
        &["\u{200B}"],
    ),
    LineCase::new(
        "\u{1F600}\n\u{1F600}",
        "surrogate pairs",
        &["\u{1F600}", "\u{1F600}"],
        &[0, 3],
        &["\u{1F600}", "\u{1F600}"],
    ),
];

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// =============================================================================
// str view
// =============================================================================

#[test]
fn corpus_str_lines() {
    for case in CORPUS {
        assert_eq!(
            split_lines(case.input, false),
            case.lines,
            "{}: {:?}",
            case.description,
            case.input
        );
        assert_eq!(
            split_lines(case.input, true),
            case.non_empty,
            "{} (non-empty): {:?}",
            case.description,
            case.input
        );
    }
}

#[test]
fn corpus_str_starts_index_lines() {
    for case in CORPUS {
        let both = lines_and_line_starts(case.input);
        assert_eq!(both.lines.len(), case.starts.len(), "{}", case.description);
        for (start, line) in both.iter() {
            assert_eq!(
                &case.input[start..start + line.len()],
                line,
                "{}",
                case.description
            );
        }
    }
}

// =============================================================================
// UTF-16 view
// =============================================================================

#[test]
fn corpus_utf16_starts() {
    for case in CORPUS {
        let wide = utf16(case.input);
        assert_eq!(
            compute_line_starts(wide.as_slice()).as_slice(),
            case.starts,
            "{}: {:?}",
            case.description,
            case.input
        );
    }
}

#[test]
fn corpus_utf16_lines() {
    for case in CORPUS {
        let wide = utf16(case.input);
        let lines: Vec<String> = split_lines(wide.as_slice(), false)
            .into_iter()
            .map(String::from_utf16_lossy)
            .collect();
        assert_eq!(lines, case.lines, "{}", case.description);

        let non_empty: Vec<String> = split_lines(wide.as_slice(), true)
            .into_iter()
            .map(String::from_utf16_lossy)
            .collect();
        assert_eq!(non_empty, case.non_empty, "{}", case.description);
    }
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn diagnostic_positions() {
    let source = "fn main() {\r\n\tlet x = 1;\n}\n";
    let starts = compute_line_starts(source);
    assert_eq!(starts.line_count(), 4);

    let x = source.find('x').unwrap();
    assert_eq!(starts.position_of(x), LinePosition::new(1, 5));
    assert_eq!(starts.offset_of(LinePosition::new(1, 5)), Some(x));

    let brace = source.rfind('}').unwrap();
    assert_eq!(starts.position_of(brace), LinePosition::new(2, 0));
    assert_eq!(starts.position_of(source.len()), LinePosition::new(3, 0));
}

#[test]
fn line_start_positions_have_zero_column() {
    for case in CORPUS {
        let starts = compute_line_starts(case.input);
        for (line, &start) in starts.iter().enumerate() {
            assert_eq!(
                starts.position_of(start),
                LinePosition::new(line, 0),
                "{}",
                case.description
            );
        }
    }
}
