//! Command-line arguments

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How work is spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run every day and part in order on one thread
    Sequential,
    /// Days run in parallel, parts of a day run in order (default)
    #[default]
    Day,
    /// Every part of every day runs in parallel
    Part,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code solvers on local inputs", version)]
pub struct Args {
    /// Day to run (runs every registered day if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs every part if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Read `dayDD-test.txt` instead of `dayDD.txt`
    #[arg(short, long)]
    pub test: bool,

    /// Puzzle year
    #[arg(short, long, default_value_t = 2025)]
    pub year: u16,

    /// Directory holding the input files
    #[arg(long, env = "ADVENT_INPUTS", default_value = "inputs")]
    pub inputs: PathBuf,

    /// Only run days carrying all of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Worker threads (defaults to the available parallelism)
    #[arg(long, env = "ADVENT_THREADS")]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Only print answers
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
