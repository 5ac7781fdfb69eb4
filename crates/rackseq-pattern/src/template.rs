//! Placeholder expansion for label patterns.
//!
//! A pattern is plain text with placeholders in braces:
//!
//! | Placeholder | Expands to |
//! |-------------|------------|
//! | `{ROW}`, `{ROW##}` | row number, offset by `start_row` |
//! | `{COL}`, `{COL##}` | column number, offset by `start_col` |
//! | `{A}`, `{AA}`, ... | sequence number as letters (`1 -> A`, `27 -> AA`) |
//! | `{#}`, `{##}`, ... | sequence number, offset by `start_number` |
//!
//! For `ROW`, `COL` and `#`, the number of `#` characters is a zero-padding
//! width; one `#` (or none) means no padding. The number of `A`s in a
//! letter placeholder is ignored: `{AA}` renders exactly like `{A}`.
//! Saved patterns depend on this, so it is not a padding width.
//!
//! Anything else, including half-typed placeholders, passes through
//! unchanged. Patterns are re-parsed on every expansion.

use smallvec::SmallVec;

/// What a placeholder expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `{ROW...}`
    Row,
    /// `{COL...}`
    Col,
    /// `{A...}`
    Letters,
    /// `{#...}`
    Number,
}

/// A recognised placeholder and its repeat count.
///
/// `repeat` is the number of `#` characters for `Row`, `Col` and `Number`
/// (zero for bare `{ROW}`), or the number of `A`s for `Letters`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// Placeholder kind.
    pub kind: PlaceholderKind,
    /// Repeat count of the marker character.
    pub repeat: usize,
}

impl Placeholder {
    /// Parse the text between `{` and `}`.
    fn parse(inner: &str) -> Option<Self> {
        let (kind, marks, marker) = if let Some(rest) = inner.strip_prefix("ROW") {
            (PlaceholderKind::Row, rest, '#')
        } else if let Some(rest) = inner.strip_prefix("COL") {
            (PlaceholderKind::Col, rest, '#')
        } else if inner.starts_with('A') {
            (PlaceholderKind::Letters, inner, 'A')
        } else if inner.starts_with('#') {
            (PlaceholderKind::Number, inner, '#')
        } else {
            return None;
        };
        marks.chars().all(|ch| ch == marker).then_some(Self {
            kind,
            repeat: marks.len(),
        })
    }
}

/// Where a label is being generated: 1-based sequence, row, and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelPosition {
    /// Position in visiting order, starting at 1.
    pub sequence: u64,
    /// Row number, starting at 1.
    pub row: u64,
    /// Column number, starting at 1.
    pub col: u64,
}

/// Values the first sequence number, row, and column map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offsets {
    /// Added to the sequence number (minus one) for `{#}`.
    pub number: u32,
    /// Added to the row number (minus one) for `{ROW}`.
    pub row: u32,
    /// Added to the column number (minus one) for `{COL}`.
    pub col: u32,
}

impl Default for Offsets {
    fn default() -> Self {
        Self {
            number: 1,
            row: 1,
            col: 1,
        }
    }
}

impl From<&rackseq_core::PatternConfig> for Offsets {
    fn from(config: &rackseq_core::PatternConfig) -> Self {
        Self {
            number: config.start_number,
            row: config.start_row,
            col: config.start_col,
        }
    }
}

/// Expand every recognised placeholder in `pattern`.
///
/// Substitution runs in three passes: `ROW`/`COL`, then letters, then
/// digits. A pass never re-reads its own output, but later passes do scan
/// the output of earlier ones. That is safe because `ROW`/`COL` emit only
/// digits and letters emit only `A`-`Z`, neither of which can complete a
/// later placeholder.
///
/// # Examples
///
/// ```
/// use rackseq_pattern::{expand, LabelPosition, Offsets};
///
/// let at = LabelPosition { sequence: 3, row: 2, col: 5 };
/// assert_eq!(expand("{##}", at, Offsets::default()), "03");
/// assert_eq!(expand("{ROW}-{COL##}", at, Offsets::default()), "2-05");
/// ```
pub fn expand(pattern: &str, at: LabelPosition, offsets: Offsets) -> String {
    let out = substitute(pattern, |p| match p.kind {
        PlaceholderKind::Row => Some(pad(shift(at.row, offsets.row), p.repeat)),
        PlaceholderKind::Col => Some(pad(shift(at.col, offsets.col), p.repeat)),
        _ => None,
    });
    let out = substitute(&out, |p| {
        (p.kind == PlaceholderKind::Letters).then(|| letters(at.sequence))
    });
    substitute(&out, |p| {
        (p.kind == PlaceholderKind::Number)
            .then(|| pad(shift(at.sequence, offsets.number), p.repeat))
    })
}

/// Recognised placeholders in `pattern`, left to right.
pub fn placeholders(pattern: &str) -> SmallVec<[Placeholder; 4]> {
    let mut found = SmallVec::new();
    substitute(pattern, |p| {
        found.push(p);
        None
    });
    found
}

/// `true` if `pattern` contains a `{#...}` or `{A...}` placeholder, the
/// only placeholders that differ for every entity in a batch.
pub fn has_sequence_placeholder(pattern: &str) -> bool {
    placeholders(pattern)
        .iter()
        .any(|p| matches!(p.kind, PlaceholderKind::Letters | PlaceholderKind::Number))
}

/// Bijective base-26: `1 -> A`, `26 -> Z`, `27 -> AA`, `702 -> ZZ`.
/// Zero renders as the empty string.
pub fn letters(mut n: u64) -> String {
    let mut digits: SmallVec<[u8; 8]> = SmallVec::new();
    while n > 0 {
        n -= 1;
        digits.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Scan `input` for `{...}` tokens and replace those `render` accepts.
///
/// A token runs from `{` to the next `}`. If it is not a placeholder, or
/// `render` declines it, the `{` is kept as literal text and scanning
/// resumes right after it, so `{{A}}` still finds the inner `{A}`.
fn substitute(input: &str, mut render: impl FnMut(Placeholder) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let token = &rest[open..];
        let Some(close) = token.find('}') else {
            rest = token;
            break;
        };
        match Placeholder::parse(&token[1..close]).and_then(&mut render) {
            Some(text) => {
                out.push_str(&text);
                rest = &token[close + 1..];
            }
            None => {
                out.push('{');
                rest = &token[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn shift(value: u64, start: u32) -> i128 {
    value as i128 + start as i128 - 1
}

fn pad(value: i128, width: usize) -> String {
    if width > 1 {
        format!("{value:0width$}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(n: u64) -> LabelPosition {
        LabelPosition {
            sequence: n,
            row: 1,
            col: 1,
        }
    }

    fn at(sequence: u64, row: u64, col: u64) -> LabelPosition {
        LabelPosition { sequence, row, col }
    }

    #[test]
    fn padded_number() {
        assert_eq!(expand("{##}", seq(3), Offsets::default()), "03");
        assert_eq!(expand("{###}", seq(42), Offsets::default()), "042");
    }

    #[test]
    fn single_hash_does_not_pad() {
        assert_eq!(expand("{#}", seq(7), Offsets::default()), "7");
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(expand("{##}", seq(1234), Offsets::default()), "1234");
    }

    #[test]
    fn row_and_col() {
        assert_eq!(expand("{ROW}-{COL##}", at(1, 2, 5), Offsets::default()), "2-05");
        assert_eq!(expand("{ROW###}", at(1, 4, 1), Offsets::default()), "004");
        assert_eq!(expand("{COL#}", at(1, 1, 9), Offsets::default()), "9");
    }

    #[test]
    fn offsets_shift_numbers() {
        let offsets = Offsets {
            number: 100,
            row: 10,
            col: 0,
        };
        assert_eq!(
            expand("{ROW}/{COL}/{#}", at(1, 1, 1), offsets),
            "10/0/100"
        );
        assert_eq!(expand("{COL}", at(1, 1, 3), offsets), "2");
    }

    #[test]
    fn letters_are_bijective_base_26() {
        assert_eq!(letters(1), "A");
        assert_eq!(letters(26), "Z");
        assert_eq!(letters(27), "AA");
        assert_eq!(letters(52), "AZ");
        assert_eq!(letters(53), "BA");
        assert_eq!(letters(702), "ZZ");
        assert_eq!(letters(703), "AAA");
        assert_eq!(letters(0), "");
    }

    #[test]
    fn letter_placeholder() {
        assert_eq!(expand("{A}", seq(27), Offsets::default()), "AA");
    }

    #[test]
    fn letter_count_is_not_a_padding_width() {
        // Unlike `{##}`, `{AA}` does not pad: seq 1 is "A", not "AA".
        assert_eq!(expand("{AA}", seq(1), Offsets::default()), "A");
        assert_eq!(expand("{AAA}", seq(28), Offsets::default()), "AB");
    }

    #[test]
    fn letters_ignore_start_number() {
        let offsets = Offsets {
            number: 5,
            ..Offsets::default()
        };
        assert_eq!(expand("{A}{#}", seq(1), offsets), "A5");
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(
            expand("Aisle 3, bay {##}", seq(8), Offsets::default()),
            "Aisle 3, bay 08"
        );
    }

    #[test]
    fn unknown_and_partial_tokens_pass_through() {
        let d = Offsets::default();
        assert_eq!(expand("{ROW", seq(1), d), "{ROW");
        assert_eq!(expand("{RO}", seq(1), d), "{RO}");
        assert_eq!(expand("{row}", seq(1), d), "{row}");
        assert_eq!(expand("{#A}", seq(1), d), "{#A}");
        assert_eq!(expand("{}", seq(1), d), "{}");
        assert_eq!(expand("}{", seq(1), d), "}{");
        assert_eq!(expand("{ROWS}", seq(1), d), "{ROWS}");
    }

    #[test]
    fn nested_brace_finds_inner_placeholder() {
        assert_eq!(expand("{{#}}", seq(4), Offsets::default()), "{4}");
    }

    #[test]
    fn substituted_digits_are_not_rescanned() {
        // The row pass emits "{1}" from "{{ROW}}"; later passes must not
        // treat it as a placeholder.
        assert_eq!(expand("{{ROW}}-{#}", at(9, 1, 1), Offsets::default()), "{1}-9");
    }

    #[test]
    fn repeated_placeholders_all_expand() {
        assert_eq!(
            expand("{#}{#}-{A}{A}", seq(2), Offsets::default()),
            "22-BB"
        );
    }

    #[test]
    fn placeholders_lists_in_order() {
        let found = placeholders("R{ROW##}-{AA}-{###}-{nope}");
        assert_eq!(
            found.as_slice(),
            &[
                Placeholder {
                    kind: PlaceholderKind::Row,
                    repeat: 2
                },
                Placeholder {
                    kind: PlaceholderKind::Letters,
                    repeat: 2
                },
                Placeholder {
                    kind: PlaceholderKind::Number,
                    repeat: 3
                },
            ]
        );
    }

    #[test]
    fn sequence_placeholder_detection() {
        assert!(has_sequence_placeholder("R{##}"));
        assert!(has_sequence_placeholder("{A}"));
        assert!(!has_sequence_placeholder("{ROW}-{COL}"));
        assert!(!has_sequence_placeholder("fixed"));
    }

    proptest! {
        #[test]
        fn padded_number_has_at_least_width(n in 1u64..1_000_000, width in 2usize..8) {
            let pattern = format!("{{{}}}", "#".repeat(width));
            let out = expand(&pattern, seq(n), Offsets::default());
            prop_assert!(out.len() >= width);
            prop_assert_eq!(out.parse::<u64>().unwrap(), n);
        }

        #[test]
        fn letters_are_injective(a in 1u64..100_000, b in 1u64..100_000) {
            prop_assume!(a != b);
            prop_assert_ne!(letters(a), letters(b));
        }

        #[test]
        fn text_without_braces_is_unchanged(s in "[^{}]*") {
            prop_assert_eq!(expand(&s, seq(1), Offsets::default()), s);
        }
    }
}
