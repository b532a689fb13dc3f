//! Day 7: tachyon beams through a manifold of splitters

use std::collections::BTreeSet;

use advent_kit::{ParseError, PartSolver, PuzzleParser, RegisterSolver, SolveError, Solver};

use super::invalid;
use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::grid::Grid;

const START: u8 = b'S';
const SPLITTER: u8 = b'^';

#[derive(Solver, RegisterSolver)]
#[solver(parts = 2)]
#[puzzle(year = 2025, day = 7, tags = ["grid", "dp"])]
pub struct Day7;

#[derive(Debug)]
pub struct Manifold {
    grid: Grid,
    start: (usize, usize),
}

impl PuzzleParser for Day7 {
    type Shared<'a> = Manifold;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid)?;
        let (start, more) = {
            let mut starts = grid.positions(START);
            (starts.next(), starts.next().is_some())
        };
        let start =
            start.ok_or_else(|| ParseError::MissingData("no 'S' in the manifold".into()))?;
        if more {
            return Err(ParseError::InvalidFormat("more than one 'S'".into()));
        }
        Ok(Manifold { grid, start })
    }
}

impl PartSolver<1> for Day7 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let (start_row, start_col) = shared.start;

        // beams in the same column merge
        let mut beams = BTreeSet::from([start_col]);
        let mut splits = 0u64;
        for row in start_row + 1..grid.height() {
            let mut next = BTreeSet::new();
            for col in beams {
                if grid.get(row, col) == Some(SPLITTER) {
                    splits += 1;
                    next.extend(col.checked_sub(1));
                    next.extend(Some(col + 1).filter(|&c| c < grid.width()));
                } else {
                    next.insert(col);
                }
            }
            beams = next;
        }
        Ok(splits.to_string())
    }
}

impl PartSolver<2> for Day7 {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        let (row, col) = shared.start;
        let timelines = DpCache::with_problem(
            VecBackend::with_capacity(shared.grid.width() * shared.grid.height()),
            Timelines {
                grid: &shared.grid,
            },
        );
        Ok(timelines.get(&shared.grid.index(row, col)).to_string())
    }
}

/// Timelines for a single particle at a flattened grid position heading
/// down: one per way out of the bottom row
struct Timelines<'a> {
    grid: &'a Grid,
}

impl DpProblem<usize, u64> for Timelines<'_> {
    fn deps(&self, index: &usize) -> Vec<usize> {
        let width = self.grid.width();
        let (row, col) = (index / width, index % width);
        if row + 1 >= self.grid.height() {
            return vec![];
        }

        let below = row + 1;
        if self.grid.get(below, col) == Some(SPLITTER) {
            // a split that leaves the grid sideways loses that timeline
            [col.checked_sub(1), Some(col + 1).filter(|&c| c < width)]
                .into_iter()
                .flatten()
                .map(|c| self.grid.index(below, c))
                .collect()
        } else {
            vec![self.grid.index(below, col)]
        }
    }

    fn compute(&self, index: &usize, deps: Vec<u64>) -> u64 {
        if index / self.grid.width() + 1 >= self.grid.height() {
            1
        } else {
            deps.iter().sum()
        }
    }
}
