//! Memoization cache for dynamic programming over a dependency DAG
//!
//! A [`DpProblem`] says which indices a value depends on and how to combine
//! their values; [`DpCache`] resolves the dependencies lazily and computes
//! each index at most once.
//!
//! Backends decide how computed values are stored:
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: any `Hash + Eq` index, for sparse or composite keys
//!
//! **Dependencies must form a DAG.** A cycle recurses until the stack
//! overflows.
//!
//! # Example
//!
//! ```rust
//! use advent_2025::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Staircase;
//!
//! // Ways to climb `n` steps taking 1 or 2 at a time
//! impl DpProblem<usize, u64> for Staircase {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Staircase);
//! assert_eq!(cache.get(&10), 89);
//! ```
//!
//! # Example: closures
//!
//! ```rust
//! use advent_2025::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! // Lattice paths from (r, c) to (0, 0)
//! let cache = DpCache::new(
//!     HashMapBackend::new(),
//!     |&(r, c): &(u32, u32)| {
//!         let mut deps = Vec::new();
//!         if r > 0 { deps.push((r - 1, c)); }
//!         if c > 0 { deps.push((r, c - 1)); }
//!         deps
//!     },
//!     |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
//! );
//!
//! assert_eq!(cache.get(&(4, 4)), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};
