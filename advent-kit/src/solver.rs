//! Parse and solve traits implemented by every day

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data shared by all parts of a day.
///
/// `Shared` may own its data or borrow from the input; parts receive it
/// mutably so an expensive intermediate result can be stored once and reused
/// by a later part.
///
/// # Example
///
/// ```
/// use advent_kit::{ParseError, PuzzleParser};
///
/// struct Depths;
///
/// impl PuzzleParser for Depths {
///     type Shared<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait PuzzleParser {
    /// Parsed input plus any state carried between parts
    type Shared<'a>: 'a;

    /// Parse the input string
    fn parse<'a>(input: &'a str) -> Result<Self::Shared<'a>, ParseError>;
}

/// One part of a day, selected at compile time by `N`.
///
/// Implement one `PartSolver<N>` per part and let `#[derive(Solver)]` write
/// the runtime dispatch.
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve part `N`
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError>;
}

/// Runtime entry point for a day: knows how many parts exist and dispatches
/// a part number to the right implementation.
///
/// # Example
///
/// ```
/// use advent_kit::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Sums;
///
/// impl PuzzleParser for Sums {
///     type Shared<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|n| n.trim().parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sums {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i64>().to_string()),
///             2 => Ok(shared.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Sums::parse("2, 3, 4").unwrap();
/// assert_eq!(Sums::solve_part(&mut shared, 2).unwrap(), "24");
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this day has
    const PARTS: u8;

    /// Solve the given part
    fn solve_part(shared: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects `0` and parts above `PARTS`
    /// with [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::Shared<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
