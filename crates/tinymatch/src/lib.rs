//! # `tinymatch` Bounded Pattern Matcher
//!
//! A minimal recursive-backtracking pattern matcher with explicit resource
//! ceilings, sized for embedded and hostile-input settings where a full
//! regex engine is unwarranted.
//!
//! Supported syntax:
//! * Literals: `abc`, `hello123`
//! * Any byte: `.`
//! * Bracket classes: `[abc]`, `[^0-9]`, `[a-zA-Z0-9]`
//! * Quantifiers: `*`, `+`, `?`, and exact `{n}`
//! * Anchors: `^` (start of text), `$` (end of text)
//! * Escapes: `\.`, `\*`, `\[`, `\\`, etc.
//!
//! Not supported: alternation, grouping/captures, backreferences,
//! lookaround, non-greedy quantifiers. `|`, `(`, and `)` match verbatim.
//!
//! Patterns have no compiled form; they are re-read in place on every probe,
//! and the matching path performs no allocation. Greedy backtracking is
//! bounded by three configurable ceilings ([`MatchLimits`]): pattern length,
//! recursion depth, and backtracking steps. A tripped ceiling surfaces as a
//! classified failure ([`MatchError`]) in the searcher's diagnostics, never
//! as a panic or stack overflow.
//!
//! See:
//! * [`Searcher`] for the stateful entry point with limits and diagnostics.
//! * [`find`] / [`is_match`] for one-shot searches with defaults.
//!
//! ```rust
//! use tinymatch::{Direction, SearchOptions, Searcher};
//!
//! let mut searcher = Searcher::new();
//!
//! let span = searcher.find("gr[ae]y", "50 shades of grey").unwrap();
//! assert_eq!(span.range(), 13..17);
//!
//! let options = SearchOptions::default()
//!     .with_fold_case(true)
//!     .with_direction(Direction::Backward);
//! let span = searcher.search("SHADE", "50 shades of grey", options).unwrap();
//! assert_eq!(span.range(), 3..8);
//! ```
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

mod diagnostics;
mod engine;
mod errors;
mod limits;
mod searcher;

pub use diagnostics::MatchDiagnostics;
pub use errors::MatchError;
pub use limits::{
    DEFAULT_MAX_BACKTRACK_STEPS,
    DEFAULT_MAX_PATTERN_LENGTH,
    DEFAULT_MAX_RECURSION_DEPTH,
    MatchLimits,
};
pub use searcher::{Direction, MatchSpan, SearchOptions, Searcher, find, is_match};
