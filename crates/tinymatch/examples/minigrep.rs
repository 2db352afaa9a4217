#![allow(missing_docs)]

//! Line-oriented grep over stdin.
//!
//! ```text
//! cargo run --example minigrep -- '[0-9]+ms' < server.log
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::str::FromStr;

use tinymatch::{Direction, MatchError, SearchOptions, Searcher};

fn main() -> ExitCode {
    stderrlog::new().verbosity(2).init().unwrap();

    let mut fold_case = false;
    let mut direction = Direction::Forward;
    let mut pattern = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-i" => fold_case = true,
            other => match other.strip_prefix("--direction=") {
                Some(value) => match Direction::from_str(value) {
                    Ok(value) => direction = value,
                    Err(_) => {
                        eprintln!("unknown direction: {value:?}");
                        return ExitCode::FAILURE;
                    }
                },
                None => pattern = Some(other.to_string()),
            },
        }
    }

    let Some(pattern) = pattern else {
        eprintln!("usage: minigrep [-i] [--direction=forward|backward] PATTERN");
        return ExitCode::FAILURE;
    };

    let options = SearchOptions::default()
        .with_fold_case(fold_case)
        .with_direction(direction);
    let mut searcher = Searcher::new();

    for line in io::stdin().lock().lines() {
        let line = line.unwrap();
        match searcher.search(&pattern, &line, options) {
            Some(span) => println!("{}..{}: {line}", span.start, span.end()),
            None => match searcher.last_error() {
                Some(MatchError::NoMatch) | None => {}
                Some(error) => {
                    log::error!("search failed: {error}");
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    log::info!(
        "peak steps: {}, peak depth: {}",
        searcher.diagnostics().peak_backtrack_steps(),
        searcher.diagnostics().peak_recursion_depth(),
    );
    ExitCode::SUCCESS
}
