//! # Error Types

/// Classification of a failed search.
///
/// A failed [`search`](crate::Searcher::search) always returns `None`;
/// callers distinguish a benign [`MatchError::NoMatch`] from a resource-limit
/// or syntax failure via
/// [`MatchDiagnostics::last_error`](crate::MatchDiagnostics::last_error).
///
/// Within one search call the first recorded cause wins; later failures do
/// not overwrite it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Exhaustive search found nothing; a negative result, not a failure.
    #[error("no match")]
    NoMatch,

    /// Pattern exceeds the configured maximum length.
    #[error("pattern length ({length}) exceeds limit ({limit})")]
    PatternTooLong {
        /// The rejected pattern's length, in bytes.
        length: usize,

        /// The configured maximum pattern length.
        limit: usize,
    },

    /// The engine's recursion depth guard tripped.
    #[error("recursion depth exceeds limit ({limit})")]
    RecursionDepthExceeded {
        /// The configured maximum recursion depth.
        limit: usize,
    },

    /// Cumulative backtracking probes exceeded the configured ceiling.
    #[error("backtrack steps exceed limit ({limit})")]
    BacktrackLimitExceeded {
        /// The configured maximum backtrack steps.
        limit: usize,
    },

    /// Unterminated class, or an unterminated or zero-valued `{n}`.
    #[error("malformed pattern")]
    MalformedPattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(MatchError::NoMatch.to_string(), "no match");
        assert_eq!(
            MatchError::PatternTooLong {
                length: 100,
                limit: 64
            }
            .to_string(),
            "pattern length (100) exceeds limit (64)"
        );
        assert_eq!(
            MatchError::RecursionDepthExceeded { limit: 5 }.to_string(),
            "recursion depth exceeds limit (5)"
        );
        assert_eq!(
            MatchError::BacktrackLimitExceeded { limit: 512 }.to_string(),
            "backtrack steps exceed limit (512)"
        );
        assert_eq!(MatchError::MalformedPattern.to_string(), "malformed pattern");
    }
}
