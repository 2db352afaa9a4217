//! # Backtracking Engine
//!
//! The recursive core of the matcher. Patterns carry no compiled form: every
//! recursive step and every repetition probe re-reads the pattern bytes in
//! place, fusing parsing and matching. Recursion depth and backtracking
//! steps are bounded explicitly, so pathological patterns degrade into a
//! classified failure instead of stack exhaustion or runaway search.

pub(crate) mod atom;
pub(crate) mod class;

use crate::{
    diagnostics::MatchDiagnostics,
    engine::atom::{AtomProbe, probe_atom},
    errors::MatchError,
    limits::MatchLimits,
};

/// Apply ASCII case folding to `byte` when `fold_case` is set.
pub(crate) fn fold_byte(
    byte: u8,
    fold_case: bool,
) -> u8 {
    if fold_case {
        byte.to_ascii_lowercase()
    } else {
        byte
    }
}

/// Call-scoped state threaded through one search: the configured limits, the
/// caller's diagnostics, the fold mode, and the per-call step counter.
pub(crate) struct MatchContext<'a> {
    limits: &'a MatchLimits,
    diagnostics: &'a mut MatchDiagnostics,
    fold_case: bool,
    steps: usize,
}

impl<'a> MatchContext<'a> {
    /// Set up a context for one top-level search call.
    pub(crate) fn new(
        limits: &'a MatchLimits,
        diagnostics: &'a mut MatchDiagnostics,
        fold_case: bool,
    ) -> Self {
        Self {
            limits,
            diagnostics,
            fold_case,
            steps: 0,
        }
    }

    /// Consume one backtracking step.
    ///
    /// Returns `false` if the step ceiling is exceeded; the failure cause is
    /// recorded (first cause per call wins) and the caller must fail.
    fn take_step(&mut self) -> bool {
        self.steps += 1;
        self.diagnostics.note_backtrack_steps(self.steps);

        let limit = self.limits.max_backtrack_steps();
        if self.steps > limit {
            log::trace!("backtrack step ceiling hit: {limit}");
            self.diagnostics
                .record_error(MatchError::BacktrackLimitExceeded { limit });
            return false;
        }
        true
    }

    /// Match `pattern` against the beginning of `text`.
    ///
    /// Returns the matched length, or `None`. `text` is the suffix of the
    /// haystack at the current candidate position; each repetition consumes
    /// exactly one byte of it — an invariant of the supported atom grammar,
    /// which has no variable-width units.
    pub(crate) fn match_here(
        &mut self,
        pattern: &[u8],
        text: &[u8],
        depth: usize,
    ) -> Option<usize> {
        self.diagnostics.note_recursion_depth(depth);

        let depth_limit = self.limits.max_recursion_depth();
        if depth > depth_limit {
            log::trace!("recursion depth ceiling hit: {depth_limit}");
            self.diagnostics
                .record_error(MatchError::RecursionDepthExceeded { limit: depth_limit });
            return None;
        }

        if pattern.is_empty() {
            return Some(0);
        }

        // `$` terminates a match only as the whole remaining pattern;
        // anywhere else it is a literal.
        if pattern == b"$" {
            return text.is_empty().then_some(0);
        }

        let probe = probe_atom(pattern, text.first().copied(), self.fold_case);
        let (advance, repeats) = match probe {
            AtomProbe::Match { advance, repeats } => (advance, repeats),
            AtomProbe::NoMatch => return None,
            AtomProbe::Malformed => {
                self.diagnostics.record_error(MatchError::MalformedPattern);
                return None;
            }
        };

        // Resolve the repetition bounds. A symbol quantifier takes
        // precedence over a consumed `{n}`; without either, the bounds
        // collapse to the atom's own repeat count.
        let (min, max, rest_at) = match pattern.get(advance) {
            Some(b'*') => (0, None, advance + 1),
            Some(b'+') => (1, None, advance + 1),
            Some(b'?') => (0, Some(1), advance + 1),
            _ => (repeats, Some(repeats), advance),
        };
        let rest = &pattern[rest_at..];

        // Greedy expansion: re-probe the same atom (re-read from its
        // original pattern position) against successive bytes.
        let mut count = 1;
        let mut consumed = 1;
        while max.is_none_or(|max| count < max) && consumed < text.len() {
            if !self.take_step() {
                return None;
            }
            match probe_atom(pattern, Some(text[consumed]), self.fold_case) {
                AtomProbe::Match { .. } => {
                    count += 1;
                    consumed += 1;
                }
                _ => break,
            }
        }

        // Backtrack from the maximal repetition count down to `min`,
        // giving back one byte per failed trial of the pattern remainder.
        while count >= min {
            if let Some(rest_len) = self.match_here(rest, &text[consumed..], depth + 1) {
                return Some(consumed + rest_len);
            }
            if !self.take_step() {
                return None;
            }
            if count == min {
                break;
            }
            count -= 1;
            consumed -= 1;
        }

        None
    }
}
