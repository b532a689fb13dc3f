//! Day 10: configuring factory machines
//!
//! Part 1 toggles indicator lights, part 2 drives joltage counters to exact
//! values with as few presses as possible using
//! [`linear_system`](crate::utils::linear_system).

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow, bail, ensure};
use itertools::Itertools;
use tracing::debug;

use super::{failed, parse_lines};
use crate::utils::linear_system::{self, Machine, UnsolvedPolicy};

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 10, tags = ["linear-algebra", "search"])]
pub struct Day10;

/// Everything one input line describes
#[derive(Debug, Clone)]
pub struct Factory {
    /// Bit `i` set when light `i` must end up on
    lights: u64,
    light_count: usize,
    counters: Machine,
}

impl PuzzleParser for Day10 {
    type Shared<'a> = Vec<Factory>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        parse_lines(input, parse_factory)
    }
}

fn delimited(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

fn parse_list(token: &str) -> anyhow::Result<Vec<usize>> {
    token
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|n| n.parse().with_context(|| format!("bad index {n:?}")))
        .collect()
}

fn parse_factory(line: &str) -> anyhow::Result<Factory> {
    let mut lights = None;
    let mut buttons = Vec::new();
    let mut joltage = None;

    for token in line.split_whitespace() {
        if let Some(inner) = delimited(token, '[', ']') {
            lights = Some(inner);
        } else if let Some(inner) = delimited(token, '(', ')') {
            buttons.push(parse_list(inner)?);
        } else if let Some(inner) = delimited(token, '{', '}') {
            joltage = Some(
                inner
                    .split(',')
                    .map(|n| n.trim().parse::<u64>().with_context(|| format!("bad joltage {n:?}")))
                    .collect::<anyhow::Result<Vec<_>>>()?,
            );
        } else {
            bail!("unexpected token {token:?}");
        }
    }

    let pattern = lights.ok_or_else(|| anyhow!("missing [light pattern]"))?;
    let joltage = joltage.ok_or_else(|| anyhow!("missing {{joltage}} targets"))?;
    ensure!(pattern.len() <= 64, "more than 64 lights");

    let mut target = 0u64;
    for (i, c) in pattern.chars().enumerate() {
        match c {
            '#' => target |= 1 << i,
            '.' => {}
            other => bail!("bad light {other:?}"),
        }
    }
    for (b, counters) in buttons.iter().enumerate() {
        if let Some(&i) = counters.iter().find(|&&i| i >= pattern.len()) {
            bail!("button {} toggles light {i}, but there are {} lights", b + 1, pattern.len());
        }
    }

    Ok(Factory {
        lights: target,
        light_count: pattern.len(),
        counters: Machine::new(joltage, buttons)?,
    })
}

impl Factory {
    fn button_masks(&self) -> Vec<u64> {
        self.counters
            .buttons()
            .iter()
            .map(|lights| lights.iter().fold(0u64, |mask, &i| mask | 1 << i))
            .collect()
    }

    /// Fewest presses that leave exactly the target lights on.
    ///
    /// Pressing a button twice undoes it, so only subsets of buttons
    /// matter; they're tried smallest first.
    fn fewest_toggles(&self) -> Option<usize> {
        let masks = self.button_masks();
        (0..=masks.len()).find(|&k| {
            masks
                .iter()
                .combinations(k)
                .any(|chosen| chosen.into_iter().fold(0, |state, m| state ^ m) == self.lights)
        })
    }
}

impl PartSolver<1> for Day10 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(idx, factory)| {
                factory.fewest_toggles().ok_or_else(|| {
                    failed(anyhow!(
                        "machine {}: {} lights can't reach the pattern",
                        idx + 1,
                        factory.light_count
                    ))
                })
            })
            .sum::<Result<usize, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Day10 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let machines: Vec<Machine> = shared.iter().map(|f| f.counters.clone()).collect();
        debug!(machines = machines.len(), "solving joltage counters");
        linear_system::total_presses(&machines, UnsolvedPolicy::Reject)
            .map(|total| total.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn test_example() {
        let mut shared = Day10::parse(EXAMPLE).unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 1).unwrap(), "7");
        assert_eq!(Day10::solve_part(&mut shared, 2).unwrap(), "33");
    }

    #[test]
    fn test_fewest_toggles_per_machine() {
        let shared = Day10::parse(EXAMPLE).unwrap();
        let toggles: Vec<_> = shared.iter().map(Factory::fewest_toggles).collect();
        assert_eq!(toggles, vec![Some(2), Some(3), Some(2)]);
    }

    #[test]
    fn test_lights_already_correct() {
        let mut shared = Day10::parse("[..] (0) (1) {0,0}").unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Day10::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn test_unreachable_counter_is_an_error() {
        let mut shared = Day10::parse("[#.] (0) {1,5}").unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 1).unwrap(), "1");
        let err = Day10::solve_part(&mut shared, 2).unwrap_err();
        assert!(err.to_string().contains("machine 1"));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(Day10::parse("(0) {1}").is_err());
        assert!(Day10::parse("[#] (0)").is_err());
        assert!(Day10::parse("[#] (3) {1}").is_err());
        assert!(Day10::parse("[x] (0) {1}").is_err());
        assert!(Day10::parse("[#] 0 {1}").is_err());
    }
}
