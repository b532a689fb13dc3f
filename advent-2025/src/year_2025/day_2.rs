//! Day 2: product IDs made of a repeated digit block

use std::collections::HashSet;
use std::ops::RangeInclusive;

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow};

use super::invalid;

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 2, tags = ["math"])]
pub struct Day2;

impl PuzzleParser for Day2 {
    type Shared<'a> = Vec<RangeInclusive<u64>>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(idx, range)| parse_range(range).with_context(|| format!("range {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

fn parse_range(range: &str) -> anyhow::Result<RangeInclusive<u64>> {
    let (lo, hi) = range
        .split_once('-')
        .ok_or_else(|| anyhow!("expected 'a-b', got {range:?}"))?;
    let lo: u64 = lo.parse().with_context(|| format!("bad start {lo:?}"))?;
    let hi: u64 = hi.parse().with_context(|| format!("bad end {hi:?}"))?;
    if lo > hi {
        return Err(anyhow!("range {lo}-{hi} is reversed"));
    }
    Ok(lo..=hi)
}

impl PartSolver<1> for Day2 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(sum_repeats(shared, |digits| {
            (digits % 2 == 0).then_some(digits / 2).into_iter().collect()
        })
        .to_string())
    }
}

impl PartSolver<2> for Day2 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(sum_repeats(shared, |digits| {
            (1..digits).filter(|k| digits % k == 0).collect()
        })
        .to_string())
    }
}

fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// `parts` copies of the `k`-digit string `0…01`, read as a number, so that
/// `block * repunit` writes `block` out `parts` times.
fn repunit(k: u32, parts: u32) -> u128 {
    (0..parts).map(|i| 10u128.pow(k * i)).sum()
}

/// Numbers in `range` with `digits` digits that are a `k`-digit block
/// repeated, generated from their leading block
fn repeats_of_size(range: &RangeInclusive<u64>, digits: u32, k: u32) -> impl Iterator<Item = u64> {
    let lo = (*range.start()).max(10u64.saturating_pow(digits - 1));
    let hi = (*range.end()).min(10u64.saturating_pow(digits).saturating_sub(1));
    let tail = 10u64.saturating_pow(digits - k);
    let repunit = repunit(k, digits / k);

    (lo / tail..=hi / tail)
        .filter_map(move |block| u64::try_from(u128::from(block) * repunit).ok())
        .filter(move |&id| lo <= id && id <= hi)
}

fn sum_repeats<F>(ranges: &[RangeInclusive<u64>], block_sizes: F) -> u64
where
    F: Fn(u32) -> Vec<u32>,
{
    ranges
        .iter()
        .map(|range| {
            let mut ids = HashSet::new();
            for digits in digit_count(*range.start())..=digit_count(*range.end()) {
                for k in block_sizes(digits) {
                    ids.extend(repeats_of_size(range, digits, k));
                }
            }
            ids.into_iter().sum::<u64>()
        })
        .sum()
}
