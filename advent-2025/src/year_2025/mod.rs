//! Advent of Code 2025

pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_6;
pub mod day_7;
pub mod day_8;
pub mod day_9;
pub mod day_10;
pub mod day_11;

use advent_kit::{ParseError, SolveError};

/// Parse each non-blank line with `parse_line`, prefixing errors with the
/// 1-based line number.
pub(crate) fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_line(line.trim_end()).map_err(|e| invalid(e.context(format!("line {}", idx + 1))))
        })
        .collect()
}

pub(crate) fn invalid(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{err:#}"))
}

pub(crate) fn failed(err: anyhow::Error) -> SolveError {
    SolveError::SolveFailed(err.into())
}
