//! # Bracket Class Evaluation

use crate::engine::fold_byte;

/// Test whether `byte` belongs to a bracket character class.
///
/// `body` is the text strictly between `[` (or `[^`) and the matching `]`,
/// brackets excluded. A leading `^` negates the result. A `low-high` triplet
/// denotes an inclusive range; any other byte is a single-byte alternative.
/// A `-` that opens or closes the body is a literal.
///
/// Malformed classes (no closing `]`) never reach this function; the atom
/// matcher rejects them.
///
/// ## Arguments
/// * `byte` - The text byte under test.
/// * `body` - The class body.
/// * `fold_case` - Whether comparisons are ASCII case-folded.
pub(crate) fn class_contains(
    byte: u8,
    body: &[u8],
    fold_case: bool,
) -> bool {
    let (negate, body) = match body.split_first() {
        Some((b'^', rest)) => (true, rest),
        _ => (false, body),
    };

    let probe = fold_byte(byte, fold_case);

    let mut matched = false;
    let mut at = 0;
    while at < body.len() {
        if at + 2 < body.len() && body[at + 1] == b'-' {
            let low = fold_byte(body[at], fold_case);
            let high = fold_byte(body[at + 2], fold_case);
            if probe >= low && probe <= high {
                matched = true;
            }
            at += 3;
        } else {
            if probe == fold_byte(body[at], fold_case) {
                matched = true;
            }
            at += 1;
        }
    }

    matched != negate
}
