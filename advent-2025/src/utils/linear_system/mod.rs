//! Minimum-press solver for machines of counters and buttons
//!
//! Each machine is a system of linear equations over non-negative integer
//! press counts: counter `i` must end at `targets[i]`, and each press of a
//! button adds 1 to every counter it's wired to. [`solve_machine`] finds
//! the press vector with the smallest total:
//!
//! 1. build the augmented integer matrix and eliminate it fraction-free,
//!    detecting contradictory systems ([`elimination`]);
//! 2. bound every button by the smallest target it touches
//!    ([`Machine::press_bounds`]);
//! 3. depth-first branch and bound over the free buttons, propagating
//!    forced values through the reduced rows at every node ([`search`]);
//! 4. check every candidate against the original wiring before accepting it.
//!
//! # Example
//!
//! ```
//! use advent_2025::utils::linear_system::{Machine, MachineOutcome, solve_machine};
//!
//! // button 0 bumps counter 0, button 1 bumps counters 0 and 1
//! let machine = Machine::new(vec![2, 1], vec![vec![0], vec![0, 1]]).unwrap();
//! let MachineOutcome::Solved(solution) = solve_machine(&machine).unwrap() else {
//!     panic!("solvable");
//! };
//! assert_eq!(solution.total, 2);
//! assert_eq!(solution.presses, vec![1, 1]);
//! ```

pub mod elimination;
pub mod machine;
pub mod outcome;
pub mod propagate;
pub mod search;

#[cfg(test)]
mod tests;

use thiserror::Error;
use tracing::debug;

pub use elimination::{AugmentedMatrix, ReducedRow, ReducedSystem, Reduction};
pub use machine::Machine;
pub use outcome::{MachineOutcome, Solution, UnsolvedPolicy, fold_totals};
pub use search::{Search, SearchStats};

#[derive(Debug, Clone, Error)]
pub enum LinearSystemError {
    #[error("button {button} is wired to counter {counter}, but there are only {counters} counters")]
    UnknownCounter {
        button: usize,
        counter: usize,
        counters: usize,
    },
    #[error("integer overflow while eliminating")]
    Overflow,
    #[error("machine {} has no answer: {outcome}", .machine + 1)]
    Unsolved {
        /// Position in the input, from 0
        machine: usize,
        outcome: MachineOutcome,
    },
}

/// Find the cheapest press vector for `machine`.
///
/// Errors only on arithmetic overflow; infeasible machines come back as
/// [`MachineOutcome::Inconsistent`] or [`MachineOutcome::Exhausted`].
pub fn solve_machine(machine: &Machine) -> Result<MachineOutcome, LinearSystemError> {
    let system = match AugmentedMatrix::from_machine(machine)?.reduce()? {
        Reduction::Reduced(system) => system,
        Reduction::Inconsistent => {
            debug!(
                counters = machine.counter_count(),
                buttons = machine.button_count(),
                "counter equations are inconsistent"
            );
            return Ok(MachineOutcome::Inconsistent);
        }
    };

    let (best, stats) = Search::new(machine, &system).run();
    debug!(
        counters = machine.counter_count(),
        buttons = machine.button_count(),
        rank = system.rank(),
        free = system.free.len(),
        nodes = stats.nodes,
        pruned = stats.pruned,
        infeasible = stats.infeasible,
        "search finished"
    );

    Ok(match best {
        Some(best) => MachineOutcome::Solved(Solution {
            presses: best.presses,
            total: best.total,
        }),
        None => MachineOutcome::Exhausted,
    })
}

/// Solve every machine and fold the totals under `policy`
pub fn total_presses(machines: &[Machine], policy: UnsolvedPolicy) -> Result<u64, LinearSystemError> {
    let outcomes = machines
        .iter()
        .map(solve_machine)
        .collect::<Result<Vec<_>, _>>()?;
    fold_totals(&outcomes, policy)
}
