//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] advent_kit::RegistrationError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Errors raised while running the selected days
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Merge two errors into one `Multiple`, flattening nested lists
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let mut errors = Vec::new();
        for err in [first, second] {
            match err.inner() {
                ExecutorError::Multiple(inner) => errors.extend(inner.iter().cloned()),
                _ => errors.push(err),
            }
        }
        ExecutorError::Multiple(errors).into()
    }

    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Failure reading a day's input file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file {} not found", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum PartFailure {
    /// The day's input could not be read, shared by all of its parts
    #[error(transparent)]
    Input(Arc<InputError>),

    /// Lookup or parsing failed, shared by all parts of the day
    #[error(transparent)]
    Setup(Arc<advent_kit::SolverError>),

    #[error(transparent)]
    Solve(#[from] advent_kit::SolveError),
}
