//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Read test inputs instead of real ones
    pub test_input: bool,
    /// Tags every selected day must carry
    pub tags: Vec<String>,
    /// Directory holding the input files, `~` already expanded
    pub inputs_dir: PathBuf,
    /// Size of the worker pool
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            test_input: args.test,
            tags: args.tags,
            inputs_dir: expand_tilde(&args.inputs),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }

    /// Default log filter for the `-v` count, used when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
