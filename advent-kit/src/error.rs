//! Error types shared by every solver

use thiserror::Error;

/// Error returned when puzzle input cannot be turned into a solver's shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input doesn't match the expected shape
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or value is absent
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error returned while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is zero or larger than the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The solver ran but could not produce an answer
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error as a solve failure
    pub fn failed<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SolveFailed(Box::new(err))
    }
}

/// Error returned by registry lookups
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the range the registry can index
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
    /// Parsing the input failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error returned when building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver was already registered for this year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day outside the range the registry can index
    #[error("Cannot register year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}
