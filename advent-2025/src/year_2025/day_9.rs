//! Day 9: largest rectangle between red tiles

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};
use anyhow::{Context, anyhow};
use itertools::Itertools;

use super::{failed, parse_lines};

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 9, tags = ["geometry"])]
pub struct Day9;

type Tile = (i64, i64);

impl PuzzleParser for Day9 {
    /// Red tiles in loop order; consecutive tiles share a row or column
    type Shared<'a> = Vec<Tile>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let tiles = parse_lines(input, |line| {
            let (x, y) = line
                .trim()
                .split_once(',')
                .ok_or_else(|| anyhow!("expected 'x,y', got {line:?}"))?;
            Ok((
                x.parse().with_context(|| format!("bad x {x:?}"))?,
                y.parse().with_context(|| format!("bad y {y:?}"))?,
            ))
        })?;

        if let Some((idx, (a, b))) = tiles
            .iter()
            .circular_tuple_windows()
            .enumerate()
            .find(|(_, (a, b))| a.0 != b.0 && a.1 != b.1)
        {
            return Err(ParseError::InvalidFormat(format!(
                "tiles {} {a:?} and {} {b:?} don't share a row or column",
                idx + 1,
                (idx + 1) % tiles.len() + 1
            )));
        }
        Ok(tiles)
    }
}

impl PartSolver<1> for Day9 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .tuple_combinations()
            .map(|(a, b)| area(*a, *b))
            .max()
            .map(|a| a.to_string())
            .ok_or_else(|| failed(anyhow!("need at least two red tiles")))
    }
}

impl PartSolver<2> for Day9 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let edges: Vec<(Tile, Tile)> = shared
            .iter()
            .copied()
            .circular_tuple_windows()
            .collect();

        let mut best: Option<u64> = None;
        for (&a, &b) in shared.iter().tuple_combinations() {
            if a.0 == b.0 || a.1 == b.1 {
                continue;
            }
            let candidate = area(a, b);
            if best.is_some_and(|best| candidate <= best) {
                continue;
            }
            if rectangle_inside(a, b, &edges) {
                best = Some(candidate);
            }
        }

        best.map(|a| a.to_string())
            .ok_or_else(|| failed(anyhow!("no rectangle fits inside the loop")))
    }
}

/// Tiles covered by the rectangle with opposite corners `a` and `b`
fn area(a: Tile, b: Tile) -> u64 {
    (a.0.abs_diff(b.0) + 1) * (a.1.abs_diff(b.1) + 1)
}

/// Whether the rectangle spanned by `a` and `b` lies on red or green tiles.
///
/// No loop edge may pass through the open interior, and one interior point
/// must be inside the loop. The point test runs on doubled coordinates so the
/// sample point sits strictly between tile centres and never touches an edge.
fn rectangle_inside(a: Tile, b: Tile, edges: &[(Tile, Tile)]) -> bool {
    let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
    let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));

    let crosses = edges.iter().any(|&(p, q)| {
        p.0.max(q.0) > x0 && p.0.min(q.0) < x1 && p.1.max(q.1) > y0 && p.1.min(q.1) < y1
    });
    if crosses {
        return false;
    }

    let (px, py) = (2 * x0 + 1, 2 * y0 + 1);
    let crossings = edges
        .iter()
        .filter(|&&(p, q)| p.0 == q.0)
        .filter(|&&(p, q)| {
            let (lo, hi) = (2 * p.1.min(q.1), 2 * p.1.max(q.1));
            2 * p.0 > px && lo < py && py < hi
        })
        .count();
    crossings % 2 == 1
}
