//! Day 5: fresh ingredient ID ranges

use std::ops::RangeInclusive;

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow};
use itertools::Itertools;

use super::parse_lines;

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 5, tags = ["ranges"])]
pub struct Day5;

#[derive(Debug)]
pub struct Inventory {
    /// Sorted, non-overlapping and non-adjacent
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl PuzzleParser for Day5 {
    type Shared<'a> = Inventory;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (ranges, ids) = input
            .trim_start_matches('\n')
            .split_once("\n\n")
            .unwrap_or((input.as_str(), ""));

        let ranges = parse_lines(ranges, |line| {
            let (lo, hi) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| anyhow!("expected 'a-b', got {line:?}"))?;
            let lo: u64 = lo.parse().context("bad range start")?;
            let hi: u64 = hi.parse().context("bad range end")?;
            Ok(lo..=hi)
        })?;
        let available = parse_lines(ids, |line| {
            line.trim()
                .parse()
                .with_context(|| format!("bad ingredient ID {line:?}"))
        })
        .map_err(|e| ParseError::InvalidFormat(format!("ID section: {e}")))?;

        Ok(Inventory {
            fresh: merge(ranges),
            available,
        })
    }
}

impl PartSolver<1> for Day5 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let fresh = shared
            .available
            .iter()
            .filter(|&&id| shared.is_fresh(id))
            .count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Day5 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let covered: u64 = shared
            .fresh
            .iter()
            .map(|range| range.end() - range.start() + 1)
            .sum();
        Ok(covered.to_string())
    }
}

impl Inventory {
    fn is_fresh(&self, id: u64) -> bool {
        let idx = self.fresh.partition_point(|range| *range.end() < id);
        self.fresh.get(idx).is_some_and(|range| range.contains(&id))
    }
}

/// Sort and merge overlapping or touching ranges; empty ranges are dropped
fn merge(ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges
        .into_iter()
        .filter(|range| !range.is_empty())
        .sorted_by_key(|range| *range.start())
        .coalesce(|a, b| {
            if b.start().saturating_sub(1) <= *a.end() {
                Ok(*a.start()..=(*a.end()).max(*b.end()))
            } else {
                Err((a, b))
            }
        })
        .collect()
}
