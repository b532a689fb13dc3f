//! Day 1: a dial of 100 positions turned left and right

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow};

use super::parse_lines;

const POSITIONS: u32 = 100;
const START: u32 = 50;

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 1, tags = ["simulation"])]
pub struct Day1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u32),
    Right(u32),
}

#[derive(Debug)]
pub struct Shared {
    rotations: Vec<Rotation>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
struct ZeroCounts {
    /// Rotations ending on 0
    landed: u64,
    /// Every click that shows 0, mid-rotation or at the end
    passed: u64,
}

impl PuzzleParser for Day1 {
    type Shared<'a> = Shared;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let (dir, amount) = line.trim().split_at_checked(1).context("empty rotation")?;
            let amount: u32 = amount
                .parse()
                .with_context(|| format!("bad rotation amount {amount:?}"))?;
            match dir {
                "L" => Ok(Rotation::Left(amount)),
                "R" => Ok(Rotation::Right(amount)),
                _ => Err(anyhow!("rotation must start with 'L' or 'R', got {dir:?}")),
            }
        })?;

        Ok(Shared {
            rotations,
            counts: None,
        })
    }
}

impl PartSolver<1> for Day1 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).landed.to_string())
    }
}

impl PartSolver<2> for Day1 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).passed.to_string())
    }
}

fn zero_counts(shared: &mut Shared) -> ZeroCounts {
    *shared.counts.get_or_insert_with(|| {
        let mut dial = START;
        let mut counts = ZeroCounts {
            landed: 0,
            passed: 0,
        };

        for rotation in &shared.rotations {
            let (n, next, wrapped) = match *rotation {
                Rotation::Left(n) => {
                    let rem = n % POSITIONS;
                    (n, (dial + POSITIONS - rem) % POSITIONS, dial < rem)
                }
                Rotation::Right(n) => {
                    let rem = n % POSITIONS;
                    (n, (dial + rem) % POSITIONS, dial + rem >= POSITIONS)
                }
            };

            // each full turn shows 0 exactly once, including its last click
            counts.passed += u64::from(n / POSITIONS);
            if wrapped && next != 0 && dial != 0 {
                counts.passed += 1;
            }
            if next == 0 {
                counts.landed += 1;
                if n % POSITIONS != 0 {
                    counts.passed += 1;
                }
            }
            dial = next;
        }
        counts
    })
}
