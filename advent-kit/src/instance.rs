//! Parsed solver instances and the type-erased interface the runner uses

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock span of one parse or solve, in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f`, returning its output and the span it took
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        let end = Utc::now();
        (value, Timing { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer for one part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// Where a parsed day came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub year: u16,
    pub day: u8,
    /// Tags of the plugin that registered the day, empty when registered by hand
    pub tags: &'static [&'static str],
}

/// A day's shared data after parsing, ready to solve any part in any order
pub struct SolverInstance<'a, S: Solver> {
    puzzle: Puzzle,
    shared: S::Shared<'a>,
    parsed: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(puzzle: Puzzle, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Timing::measure(|| S::parse(input));
        Ok(Self {
            puzzle,
            shared: shared?,
            parsed,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], so days with different shared
/// data types can live behind one `Box<dyn DynSolver>`.
///
/// ```no_run
/// use advent_kit::DynSolver;
///
/// fn run_all(solver: &mut dyn DynSolver) -> Result<(), advent_kit::SolveError> {
///     let puzzle = solver.puzzle();
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}/{} part {part}: {}", puzzle.year, puzzle.day, result.answer);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing it
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn puzzle(&self) -> Puzzle;

    /// Span spent parsing the input
    fn parsed(&self) -> Timing;

    /// Number of parts the underlying solver declares
    fn parts(&self) -> u8;

    fn year(&self) -> u16 {
        self.puzzle().year
    }

    fn day(&self) -> u8 {
        self.puzzle().day
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parsed().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, timing) = Timing::measure(|| S::solve_part_checked_range(shared, part));
        Ok(SolveResult {
            answer: answer?,
            timing,
        })
    }

    fn puzzle(&self) -> Puzzle {
        self.puzzle
    }

    fn parsed(&self) -> Timing {
        self.parsed
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
