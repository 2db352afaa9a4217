//! # Search Driver

use crate::{
    diagnostics::MatchDiagnostics,
    engine::MatchContext,
    errors::MatchError,
    limits::MatchLimits,
};
use core::ops::Range;

/// Scan direction for unanchored searches.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Try candidate start positions left to right.
    #[default]
    Forward,

    /// Try candidate start positions right to left.
    Backward,
}

/// Per-call search options.
///
/// ## Style Hints
///
/// Instance names should prefer `options`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Whether comparisons are ASCII case-folded.
    fold_case: bool,

    /// Scan direction for unanchored searches.
    direction: Direction,
}

impl SearchOptions {
    /// Set case folding.
    ///
    /// ## Arguments
    /// * `fold_case` - Whether comparisons are ASCII case-folded.
    pub fn with_fold_case(
        self,
        fold_case: bool,
    ) -> Self {
        Self { fold_case, ..self }
    }

    /// Set the scan direction.
    ///
    /// ## Arguments
    /// * `direction` - The scan direction for unanchored searches.
    pub fn with_direction(
        self,
        direction: Direction,
    ) -> Self {
        Self { direction, ..self }
    }

    /// Get whether comparisons are ASCII case-folded.
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// Get the scan direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// A successful match: a byte span of the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    /// Byte offset of the match start in the haystack.
    pub start: usize,

    /// Byte length of the match; zero-length matches are legal.
    pub len: usize,
}

impl MatchSpan {
    /// Get the byte offset one past the match end.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Get the matched byte range, suitable for slicing the haystack.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Whether the match is zero-length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<MatchSpan> for Range<usize> {
    fn from(span: MatchSpan) -> Self {
        span.range()
    }
}

/// The public entry point: owns the limit configuration and the diagnostics
/// it accumulates across calls.
///
/// Patterns are re-read from their text on every probe; there is no compiled
/// form, and the matching path performs no allocation.
///
/// ```rust
/// use tinymatch::{MatchSpan, Searcher};
///
/// let mut searcher = Searcher::new();
/// let span = searcher.find("[0-9]+", "order 1337 shipped").unwrap();
/// assert_eq!(span, MatchSpan { start: 6, len: 4 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    /// Resource ceilings, read at call time.
    limits: MatchLimits,

    /// Accumulated telemetry.
    diagnostics: MatchDiagnostics,
}

impl Searcher {
    /// Create a searcher with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher with the given limits.
    ///
    /// ## Arguments
    /// * `limits` - The resource ceilings to apply to every call.
    pub fn from_limits(limits: MatchLimits) -> Self {
        Self {
            limits,
            diagnostics: MatchDiagnostics::default(),
        }
    }

    /// Get the configured limits.
    pub fn limits(&self) -> &MatchLimits {
        &self.limits
    }

    /// Get a mutable view of the limits, for re-tuning between calls.
    pub fn limits_mut(&mut self) -> &mut MatchLimits {
        &mut self.limits
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &MatchDiagnostics {
        &self.diagnostics
    }

    /// Get the failure classification of the most recent call.
    pub fn last_error(&self) -> Option<MatchError> {
        self.diagnostics.last_error()
    }

    /// Zero the peak counters; limits and last-error are unaffected.
    pub fn reset_peaks(&mut self) {
        self.diagnostics.reset_peaks();
    }

    /// Search `text` for `pattern` with default options (case-sensitive,
    /// forward).
    ///
    /// ## Arguments
    /// * `pattern` - The pattern.
    /// * `text` - The haystack.
    pub fn find(
        &mut self,
        pattern: &str,
        text: &str,
    ) -> Option<MatchSpan> {
        self.search(pattern, text, SearchOptions::default())
    }

    /// Search `text` for `pattern`.
    ///
    /// A leading `^` anchors the match to position 0; otherwise every start
    /// position (including the empty suffix at end of text) is tried in
    /// `options.direction()` order, and the first success wins.
    ///
    /// On `None`, [`last_error`](Searcher::last_error) distinguishes a benign
    /// no-match from a limit or syntax failure.
    ///
    /// ## Arguments
    /// * `pattern` - The pattern.
    /// * `text` - The haystack.
    /// * `options` - The per-call options.
    pub fn search(
        &mut self,
        pattern: &str,
        text: &str,
        options: SearchOptions,
    ) -> Option<MatchSpan> {
        log::trace!(
            "search: pattern={pattern:?} direction={}",
            options.direction()
        );

        self.diagnostics.begin_call();

        let pattern = pattern.as_bytes();
        let text = text.as_bytes();

        let length_limit = self.limits.max_pattern_length();
        if pattern.len() > length_limit {
            self.diagnostics.record_error(MatchError::PatternTooLong {
                length: pattern.len(),
                limit: length_limit,
            });
            return None;
        }

        let result = {
            let mut context =
                MatchContext::new(&self.limits, &mut self.diagnostics, options.fold_case());

            if let Some(anchored) = pattern.strip_prefix(b"^") {
                context
                    .match_here(anchored, text, 0)
                    .map(|len| MatchSpan { start: 0, len })
            } else {
                match options.direction() {
                    Direction::Forward => scan_starts(&mut context, pattern, text, 0..=text.len()),
                    Direction::Backward => {
                        scan_starts(&mut context, pattern, text, (0..=text.len()).rev())
                    }
                }
            }
        };

        if result.is_none() {
            // First cause wins; this only lands when nothing more
            // specific was recorded.
            self.diagnostics.record_error(MatchError::NoMatch);
        }
        result
    }
}

/// Try candidate start positions in order; first success wins.
///
/// The backtracking step budget is shared across the whole scan, not
/// per position.
fn scan_starts(
    context: &mut MatchContext<'_>,
    pattern: &[u8],
    text: &[u8],
    starts: impl Iterator<Item = usize>,
) -> Option<MatchSpan> {
    for start in starts {
        if let Some(len) = context.match_here(pattern, &text[start..], 0) {
            return Some(MatchSpan { start, len });
        }
    }
    None
}

/// Search `text` for `pattern` with default limits and options.
///
/// One-shot convenience over [`Searcher`]; diagnostics are discarded.
///
/// ## Arguments
/// * `pattern` - The pattern.
/// * `text` - The haystack.
pub fn find(
    pattern: &str,
    text: &str,
) -> Option<MatchSpan> {
    Searcher::new().find(pattern, text)
}

/// Test whether `pattern` matches anywhere in `text`, with default limits
/// and options.
///
/// ## Arguments
/// * `pattern` - The pattern.
/// * `text` - The haystack.
pub fn is_match(
    pattern: &str,
    text: &str,
) -> bool {
    find(pattern, text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanchored_scan() {
        let mut searcher = Searcher::new();

        let span = searcher.find("abc", "xxabcxx").unwrap();
        assert_eq!(span.range(), 2..5);
        assert_eq!(searcher.last_error(), None);

        assert_eq!(searcher.find("abc", "def"), None);
        assert_eq!(searcher.last_error(), Some(MatchError::NoMatch));
    }

    #[test]
    fn test_anchors() {
        let mut searcher = Searcher::new();

        assert!(searcher.find("^abc", "abcd").is_some());
        assert_eq!(searcher.find("^abc", "xabc"), None);
        assert_eq!(
            searcher.find("abc$", "abcd"),
            None,
            "mid-text `$` must not terminate the match"
        );
        assert_eq!(
            searcher.find("abc$", "xabc"),
            Some(MatchSpan { start: 1, len: 3 })
        );

        // `^$` matches only the empty text.
        assert_eq!(searcher.find("^$", ""), Some(MatchSpan { start: 0, len: 0 }));
        assert_eq!(searcher.find("^$", "x"), None);
    }

    #[test]
    fn test_direction() {
        let mut searcher = Searcher::new();

        let forward = SearchOptions::default();
        let backward = SearchOptions::default().with_direction(Direction::Backward);

        assert_eq!(
            searcher.search("a.", "abxab", forward),
            Some(MatchSpan { start: 0, len: 2 })
        );
        assert_eq!(
            searcher.search("a.", "abxab", backward),
            Some(MatchSpan { start: 3, len: 2 })
        );
    }

    #[test]
    fn test_fold_case() {
        let mut searcher = Searcher::new();
        let folding = SearchOptions::default().with_fold_case(true);

        assert_eq!(searcher.find("[ABC]", "b"), None);
        assert_eq!(
            searcher.search("[ABC]", "b", folding),
            Some(MatchSpan { start: 0, len: 1 })
        );
    }

    #[test]
    fn test_pattern_too_long() {
        let mut searcher = Searcher::from_limits(MatchLimits::default().with_max_pattern_length(4));

        assert_eq!(searcher.find("abcdef", "abcdef"), None);
        assert_eq!(
            searcher.last_error(),
            Some(MatchError::PatternTooLong {
                length: 6,
                limit: 4
            })
        );
    }

    #[test]
    fn test_empty_suffix_start() {
        // The position at end of text is a valid start; `x*`-style patterns
        // still need one atom match, but a bare `$` lands there.
        let mut searcher = Searcher::new();
        assert_eq!(
            searcher.find("$", "ab"),
            Some(MatchSpan { start: 2, len: 0 })
        );
    }

    #[test]
    fn test_span_accessors() {
        let span = MatchSpan { start: 2, len: 3 };
        assert_eq!(span.end(), 5);
        assert_eq!(span.range(), 2..5);
        assert!(!span.is_empty());
        assert_eq!(Range::from(span), 2..5);
    }

    #[test]
    fn test_one_shot_helpers() {
        assert!(is_match("h.llo", "say hello"));
        assert!(!is_match("^h.llo", "say hello"));
        assert_eq!(
            find("l+o", "say hello"),
            Some(MatchSpan { start: 6, len: 3 })
        );
    }

    #[test]
    fn test_direction_display() {
        use core::str::FromStr;

        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::from_str("backward"), Ok(Direction::Backward));
    }
}
