//! Day 4: paper rolls a forklift can reach

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};

use super::invalid;
use crate::utils::grid::Grid;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';
/// A roll is reachable with fewer neighbors than this
const CROWDED: usize = 4;

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Day4;

impl PuzzleParser for Day4 {
    type Shared<'a> = Grid;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid)?;
        if let Some((row, col)) = (0..grid.height())
            .flat_map(|r| (0..grid.width()).map(move |c| (r, c)))
            .find(|&(r, c)| !matches!(grid.get(r, c), Some(ROLL | EMPTY)))
        {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected cell at row {}, column {}",
                row + 1,
                col + 1
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Day4 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(accessible(shared).len().to_string())
    }
}

impl PartSolver<2> for Day4 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        // work on a copy so part 1 still sees the original floor
        let mut grid = shared.clone();
        let mut removed = 0;
        loop {
            let round = accessible(&grid);
            if round.is_empty() {
                break;
            }
            removed += round.len();
            for (row, col) in round {
                grid.set(row, col, EMPTY);
            }
        }
        Ok(removed.to_string())
    }
}

/// Rolls with fewer than [`CROWDED`] neighboring rolls, judged all at once
fn accessible(grid: &Grid) -> Vec<(usize, usize)> {
    grid.positions(ROLL)
        .filter(|&(row, col)| {
            grid.neighbors8(row, col)
                .filter(|&(r, c)| grid.get(r, c) == Some(ROLL))
                .count()
                < CROWDED
        })
        .collect()
}
