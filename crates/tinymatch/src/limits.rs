//! # Search Limit Configuration

/// Default maximum pattern length, in bytes.
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 64;

/// Default maximum recursion depth of the backtracking engine.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 128;

/// Default maximum backtracking steps per search call.
pub const DEFAULT_MAX_BACKTRACK_STEPS: usize = 1024;

/// Resource ceilings applied to every search call.
///
/// Each limit is read at call time, so a [`Searcher`](crate::Searcher) can be
/// re-tuned between calls via
/// [`limits_mut`](crate::Searcher::limits_mut).
///
/// ## Style Hints
///
/// Instance names should prefer `limits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    /// Maximum accepted pattern length, in bytes.
    max_pattern_length: usize,

    /// Maximum recursion depth of the backtracking engine.
    max_recursion_depth: usize,

    /// Maximum backtracking steps per search call.
    max_backtrack_steps: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            max_backtrack_steps: DEFAULT_MAX_BACKTRACK_STEPS,
        }
    }
}

impl MatchLimits {
    /// Set the maximum pattern length.
    ///
    /// ## Arguments
    /// * `max_pattern_length` - The new ceiling, in bytes.
    pub fn with_max_pattern_length(
        self,
        max_pattern_length: usize,
    ) -> Self {
        Self {
            max_pattern_length,
            ..self
        }
    }

    /// Set the maximum recursion depth.
    ///
    /// ## Arguments
    /// * `max_recursion_depth` - The new ceiling.
    pub fn with_max_recursion_depth(
        self,
        max_recursion_depth: usize,
    ) -> Self {
        Self {
            max_recursion_depth,
            ..self
        }
    }

    /// Set the maximum backtrack steps.
    ///
    /// ## Arguments
    /// * `max_backtrack_steps` - The new ceiling.
    pub fn with_max_backtrack_steps(
        self,
        max_backtrack_steps: usize,
    ) -> Self {
        Self {
            max_backtrack_steps,
            ..self
        }
    }

    /// Get the maximum pattern length, in bytes.
    pub fn max_pattern_length(&self) -> usize {
        self.max_pattern_length
    }

    /// Get the maximum recursion depth.
    pub fn max_recursion_depth(&self) -> usize {
        self.max_recursion_depth
    }

    /// Get the maximum backtrack steps.
    pub fn max_backtrack_steps(&self) -> usize {
        self.max_backtrack_steps
    }
}
