//! Day 3: largest joltage from a bank of batteries

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{anyhow, ensure};

use super::{failed, parse_lines};

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 3, tags = ["greedy"])]
pub struct Day3;

impl PuzzleParser for Day3 {
    /// Digits of each bank
    type Shared<'a> = Vec<Vec<u8>>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        parse_lines(input, |line| {
            line.trim()
                .bytes()
                .map(|b| {
                    ensure!(b.is_ascii_digit(), "not a digit: {:?}", b as char);
                    Ok(b - b'0')
                })
                .collect()
        })
    }
}

impl PartSolver<1> for Day3 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Day3 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}

/// Largest `keep`-digit number formed by deleting digits from `bank`
/// without reordering. `None` if the bank is shorter than `keep`.
fn best_joltage(bank: &[u8], keep: usize) -> Option<u64> {
    let mut drops = bank.len().checked_sub(keep)?;
    let mut stack: Vec<u8> = Vec::with_capacity(bank.len());

    for &digit in bank {
        while drops > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            drops -= 1;
        }
        stack.push(digit);
    }

    Some(
        stack[..keep]
            .iter()
            .fold(0, |acc, &d| acc * 10 + u64::from(d)),
    )
}

fn total_joltage(banks: &[Vec<u8>], keep: usize) -> Result<String, SolveError> {
    banks
        .iter()
        .enumerate()
        .map(|(idx, bank)| {
            best_joltage(bank, keep).ok_or_else(|| {
                failed(anyhow!(
                    "bank {} has {} batteries, need {keep}",
                    idx + 1,
                    bank.len()
                ))
            })
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
}
