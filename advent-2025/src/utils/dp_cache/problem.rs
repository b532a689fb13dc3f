//! Trait-based DP problem definition.

use std::marker::PhantomData;

/// The dependency structure and combine step of a DP problem.
///
/// # Example
///
/// ```rust
/// use advent_2025::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { *n as u64 * deps[0] }
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Factorial);
/// assert_eq!(cache.get(&5), 120);
/// ```
pub trait DpProblem<I, K> {
    /// Indices that `index` depends on; empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value for `index` given the values of [`deps`](Self::deps), in the
    /// same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Adapts a pair of closures to [`DpProblem`].
pub struct ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, D, C> ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(dep_fn: D, compute_fn: C) -> Self {
        Self {
            dep_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> DpProblem<I, K> for ClosureProblem<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}
