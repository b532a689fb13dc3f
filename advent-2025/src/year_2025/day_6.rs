//! Day 6: cephalopod math worksheet

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow, bail};

use super::{failed, invalid};

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 6, tags = ["parsing"])]
pub struct Day6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

/// One problem: its operator and the block of characters holding its
/// numbers, one string per number row, all the same width
#[derive(Debug)]
pub struct Problem<'a> {
    op: Op,
    rows: Vec<&'a str>,
}

impl PuzzleParser for Day6 {
    type Shared<'a> = Vec<Problem<'a>>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        parse_worksheet(input).map_err(invalid)
    }
}

fn parse_worksheet(input: &str) -> anyhow::Result<Vec<Problem<'_>>> {
    let lines: Vec<&str> = input
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();
    let Some((ops, numbers)) = lines.split_last() else {
        bail!("worksheet is empty");
    };
    if numbers.is_empty() {
        bail!("worksheet has an operator row but no numbers");
    }
    if !lines.iter().all(|l| l.is_ascii()) {
        bail!("worksheet must be ASCII");
    }

    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let at = |line: &str, col: usize| line.as_bytes().get(col).copied().unwrap_or(b' ');
    let blank = |col: usize| lines.iter().all(|l| at(*l, col) == b' ');

    let mut problems = Vec::new();
    let mut col = 0;
    while col < width {
        if blank(col) {
            col += 1;
            continue;
        }
        let start = col;
        while col < width && !blank(col) {
            col += 1;
        }

        let op = match ops.get(start..col.min(ops.len())).unwrap_or("").trim() {
            "+" => Op::Add,
            "*" => Op::Mul,
            other => bail!("column {}: expected '+' or '*', got {other:?}", start + 1),
        };
        let rows = numbers
            .iter()
            .map(|line| line.get(start..col.min(line.len())).unwrap_or(""))
            .collect();
        problems.push(Problem { op, rows });
    }
    Ok(problems)
}

impl PartSolver<1> for Day6 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        grand_total(shared, |p| p.row_numbers())
    }
}

impl PartSolver<2> for Day6 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        grand_total(shared, |p| p.column_numbers())
    }
}

impl Problem<'_> {
    /// Each row read left to right
    fn row_numbers(&self) -> anyhow::Result<Vec<u64>> {
        self.rows
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(|r| r.parse().with_context(|| format!("bad number {r:?}")))
            .collect()
    }

    /// Each character column read top to bottom
    fn column_numbers(&self) -> anyhow::Result<Vec<u64>> {
        let width = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        (0..width)
            .filter_map(|c| {
                let digits: String = self
                    .rows
                    .iter()
                    .filter_map(|r| r.as_bytes().get(c))
                    .map(|&b| b as char)
                    .filter(|ch| !ch.is_whitespace())
                    .collect();
                (!digits.is_empty()).then_some(digits)
            })
            .map(|d| d.parse().with_context(|| format!("bad number {d:?}")))
            .collect()
    }

    fn evaluate(&self, numbers: &[u64]) -> anyhow::Result<u64> {
        let result = match self.op {
            Op::Add => numbers.iter().try_fold(0u64, |acc, &n| acc.checked_add(n)),
            Op::Mul => numbers.iter().try_fold(1u64, |acc, &n| acc.checked_mul(n)),
        };
        result.ok_or_else(|| anyhow!("overflow evaluating {:?} over {numbers:?}", self.op))
    }
}

fn grand_total<F>(problems: &[Problem<'_>], read: F) -> Result<String, SolveError>
where
    F: Fn(&Problem<'_>) -> anyhow::Result<Vec<u64>>,
{
    problems
        .iter()
        .enumerate()
        .try_fold(0u64, |total, (idx, problem)| {
            let value = read(problem)
                .and_then(|numbers| problem.evaluate(&numbers))
                .with_context(|| format!("problem {}", idx + 1))?;
            total
                .checked_add(value)
                .ok_or_else(|| anyhow!("grand total overflows"))
        })
        .map(|total| total.to_string())
        .map_err(failed)
}
