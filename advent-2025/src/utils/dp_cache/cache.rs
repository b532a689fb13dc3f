//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Values are computed on first request, after their dependencies, and
/// cloned out of the backend on every later request.
///
/// # Type Parameters
///
/// - `I`: Index type
/// - `K`: Value type
/// - `B`: Backend storage type
/// - `P`: Problem type
///
/// # Warning: No Cycle Detection
///
/// A dependency cycle recurses without bound. **Dependencies must form a
/// DAG.**
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a cache over `backend` for `problem`.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// The value for `index`, computing it and any missing dependencies
    /// first.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow is held while dependencies resolve
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();

        let value = self.problem.compute(index, dep_values);
        self.backend
            .borrow_mut()
            .insert(index.clone(), value.clone());
        value
    }

    /// Number of values computed so far
    pub fn computed(&self) -> usize {
        self.backend.borrow().len()
    }

    /// The problem this cache answers
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Creates a cache from a dependency closure and a compute closure.
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}
