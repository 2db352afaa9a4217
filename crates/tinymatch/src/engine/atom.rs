//! # Atom Probing
//!
//! An atom is the smallest unit a pattern position can describe: one literal
//! byte, one escaped literal, `.`, or one bracket class. Probing an atom also
//! consumes an immediately following exact-count quantifier (`{n}`), so the
//! engine stays single-pass with no separate tokenizer. The cost of that
//! fusion is that malformed-`{n}` detection happens here: a bad count fails
//! the whole atom even when the unit itself matched.

use crate::engine::{class::class_contains, fold_byte};

/// Outcome of probing one pattern atom against one text byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AtomProbe {
    /// The atom matched the byte.
    Match {
        /// Pattern bytes consumed by the atom and any `{n}` suffix.
        advance: usize,

        /// Requested repetitions: `n` from `{n}`, otherwise 1.
        repeats: usize,
    },

    /// The atom did not match the byte.
    NoMatch,

    /// Unterminated class, or an unterminated or zero-valued `{n}`.
    Malformed,
}

/// Probe the atom at the head of `pattern` against one text byte.
///
/// `byte` is `None` at end of text; the empty atom never matches a unit.
///
/// ## Arguments
/// * `pattern` - The pattern suffix, starting at the atom.
/// * `byte` - The text byte under test, or `None` at end of text.
/// * `fold_case` - Whether comparisons are ASCII case-folded.
pub(crate) fn probe_atom(
    pattern: &[u8],
    byte: Option<u8>,
    fold_case: bool,
) -> AtomProbe {
    let Some(byte) = byte else {
        return AtomProbe::NoMatch;
    };

    let advance = match pattern {
        [b'\\', escaped, ..] => {
            if fold_byte(byte, fold_case) != fold_byte(*escaped, fold_case) {
                return AtomProbe::NoMatch;
            }
            2
        }
        [b'[', ..] => {
            let Some(close) = pattern[1..].iter().position(|&b| b == b']') else {
                return AtomProbe::Malformed;
            };
            if !class_contains(byte, &pattern[1..1 + close], fold_case) {
                return AtomProbe::NoMatch;
            }
            close + 2
        }
        [b'.', ..] => 1,
        [literal, ..] => {
            if fold_byte(byte, fold_case) != fold_byte(*literal, fold_case) {
                return AtomProbe::NoMatch;
            }
            1
        }
        [] => return AtomProbe::NoMatch,
    };

    if pattern.get(advance) == Some(&b'{') {
        return probe_exact_count(pattern, advance + 1);
    }

    AtomProbe::Match {
        advance,
        repeats: 1,
    }
}

/// Parse the `n}` remainder of an exact-count quantifier.
///
/// `cursor` points just past the `{`. An empty digit run (n = 0) or a
/// missing `}` is malformed.
fn probe_exact_count(
    pattern: &[u8],
    mut cursor: usize,
) -> AtomProbe {
    let mut count: usize = 0;
    while let Some(digit) = pattern.get(cursor).filter(|b| b.is_ascii_digit()) {
        count = count
            .saturating_mul(10)
            .saturating_add((digit - b'0') as usize);
        cursor += 1;
    }

    if count == 0 || pattern.get(cursor) != Some(&b'}') {
        return AtomProbe::Malformed;
    }

    AtomProbe::Match {
        advance: cursor + 1,
        repeats: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_of(
        advance: usize,
        repeats: usize,
    ) -> AtomProbe {
        AtomProbe::Match { advance, repeats }
    }

    #[test]
    fn test_end_of_text() {
        assert_eq!(probe_atom(b"a", None, false), AtomProbe::NoMatch);
        assert_eq!(probe_atom(b".", None, false), AtomProbe::NoMatch);
    }

    #[test]
    fn test_literal() {
        assert_eq!(probe_atom(b"abc", Some(b'a'), false), match_of(1, 1));
        assert_eq!(probe_atom(b"abc", Some(b'b'), false), AtomProbe::NoMatch);
        assert_eq!(probe_atom(b"A", Some(b'a'), true), match_of(1, 1));
        assert_eq!(probe_atom(b"A", Some(b'a'), false), AtomProbe::NoMatch);
    }

    #[test]
    fn test_dot() {
        assert_eq!(probe_atom(b".x", Some(b'q'), false), match_of(1, 1));
    }

    #[test]
    fn test_escape() {
        // `\.` is a literal dot test, not any-byte.
        assert_eq!(probe_atom(b"\\.", Some(b'.'), false), match_of(2, 1));
        assert_eq!(probe_atom(b"\\.", Some(b'x'), false), AtomProbe::NoMatch);
        assert_eq!(
            probe_atom(b"\\\\x", Some(b'\\'), false),
            match_of(2, 1)
        );
    }

    #[test]
    fn test_class() {
        assert_eq!(
            probe_atom(b"[0-9]x", Some(b'7'), false),
            match_of(5, 1)
        );
        assert_eq!(probe_atom(b"[0-9]x", Some(b'a'), false), AtomProbe::NoMatch);
        assert_eq!(
            probe_atom(b"[^0-9]", Some(b'a'), false),
            match_of(6, 1)
        );
    }

    #[test]
    fn test_unterminated_class() {
        assert_eq!(probe_atom(b"[0-9", Some(b'7'), false), AtomProbe::Malformed);
    }

    #[test]
    fn test_exact_count() {
        assert_eq!(probe_atom(b"a{3}", Some(b'a'), false), match_of(4, 3));
        assert_eq!(
            probe_atom(b"[0-9]{12}", Some(b'7'), false),
            match_of(9, 12)
        );
    }

    #[test]
    fn test_malformed_count() {
        // The unit matches, but the bad count fails the whole atom.
        assert_eq!(probe_atom(b"a{", Some(b'a'), false), AtomProbe::Malformed);
        assert_eq!(probe_atom(b"a{0}", Some(b'a'), false), AtomProbe::Malformed);
        assert_eq!(
            probe_atom(b"a{abc}", Some(b'a'), false),
            AtomProbe::Malformed
        );
        assert_eq!(probe_atom(b"a{ }", Some(b'a'), false), AtomProbe::Malformed);
        assert_eq!(probe_atom(b"a{3", Some(b'a'), false), AtomProbe::Malformed);
    }

    #[test]
    fn test_count_only_parsed_after_unit_match() {
        // A non-matching unit never reaches the `{n}` parse.
        assert_eq!(probe_atom(b"b{0}", Some(b'a'), false), AtomProbe::NoMatch);
    }
}
