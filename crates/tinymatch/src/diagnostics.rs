//! # Search Diagnostics

use crate::errors::MatchError;

/// Observable telemetry accumulated by a [`Searcher`](crate::Searcher).
///
/// [`last_error`](MatchDiagnostics::last_error) is call-scoped: it is cleared
/// at the start of every search call, and the first failure cause recorded
/// during the call sticks. The peak counters are high-water marks that only
/// grow across calls until [`reset_peaks`](MatchDiagnostics::reset_peaks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchDiagnostics {
    /// The failure classification of the most recent search call.
    last_error: Option<MatchError>,

    /// High-water mark of backtrack steps consumed by a single call.
    peak_backtrack_steps: usize,

    /// High-water mark of recursion depth reached by a single call.
    peak_recursion_depth: usize,
}

impl MatchDiagnostics {
    /// Get the failure classification of the most recent search call.
    ///
    /// `None` after a successful call (or before any call).
    pub fn last_error(&self) -> Option<MatchError> {
        self.last_error
    }

    /// Get the peak backtrack steps observed in any call since the last reset.
    pub fn peak_backtrack_steps(&self) -> usize {
        self.peak_backtrack_steps
    }

    /// Get the peak recursion depth observed in any call since the last reset.
    pub fn peak_recursion_depth(&self) -> usize {
        self.peak_recursion_depth
    }

    /// Zero both peak counters.
    ///
    /// Does not affect limits or the last-error classification.
    pub fn reset_peaks(&mut self) {
        self.peak_backtrack_steps = 0;
        self.peak_recursion_depth = 0;
    }

    /// Clear the last-error classification at the start of a call.
    pub(crate) fn begin_call(&mut self) {
        self.last_error = None;
    }

    /// Record a failure cause; the first cause per call wins.
    pub(crate) fn record_error(
        &mut self,
        error: MatchError,
    ) {
        if self.last_error.is_none() {
            self.last_error = Some(error);
        }
    }

    /// Raise the backtrack-step high-water mark to `steps` if it is higher.
    pub(crate) fn note_backtrack_steps(
        &mut self,
        steps: usize,
    ) {
        if steps > self.peak_backtrack_steps {
            self.peak_backtrack_steps = steps;
        }
    }

    /// Raise the recursion-depth high-water mark to `depth` if it is higher.
    pub(crate) fn note_recursion_depth(
        &mut self,
        depth: usize,
    ) {
        if depth > self.peak_recursion_depth {
            self.peak_recursion_depth = depth;
        }
    }
}
