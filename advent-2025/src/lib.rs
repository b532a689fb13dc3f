//! Advent of Code 2025 solutions with automatic registration
//!
//! Each day lives in [`year_2025`] and registers itself through
//! `#[derive(RegisterSolver)]`. The reusable pieces the days lean on are in
//! [`utils`]: the bounded integer linear system solver behind day 10, the
//! memoizing DP cache behind days 7 and 11, and small grid helpers.

pub mod utils;

#[cfg(feature = "year-2025")]
pub mod year_2025;
