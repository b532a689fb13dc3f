//! Framework for Advent of Code day solvers
//!
//! A day is a type that knows how to parse its input once
//! ([`PuzzleParser`]) and how to answer each of its parts from the parsed
//! data ([`PartSolver`], dispatched at runtime through [`Solver`]). Days
//! register themselves with [`SolverPlugin`]s collected by `inventory`, and a
//! runner builds a [`SolverRegistry`] to look them up by year and day.
//!
//! # Example
//!
//! ```
//! use advent_kit::{ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError, Solver};
//!
//! #[derive(Solver)]
//! #[solver(parts = 2)]
//! struct Calories;
//!
//! impl PuzzleParser for Calories {
//!     type Shared<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
//!         input
//!             .split("\n\n")
//!             .map(|elf| {
//!                 elf.lines()
//!                     .map(|l| l.parse::<u32>().map_err(|e| ParseError::InvalidFormat(e.to_string())))
//!                     .sum()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
//!         shared.sort_unstable_by(|a, b| b.cmp(a));
//!         Ok(shared.iter().take(3).sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Calories>(2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n\n4\n\n3\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "13");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, Puzzle, SolveResult, SolverInstance, Timing};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Used by the `RegisterSolver` derive
pub use inventory;

pub use advent_kit_macros::{RegisterSolver, Solver};
