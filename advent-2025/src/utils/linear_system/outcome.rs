//! Per-machine results and how they fold into a total

use std::fmt;

use tracing::warn;

use super::LinearSystemError;

/// Cheapest press vector for a machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub presses: Vec<u64>,
    pub total: u64,
}

/// What solving one machine produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineOutcome {
    Solved(Solution),
    /// Elimination proved the counter equations contradictory
    Inconsistent,
    /// The search space held no valid press vector
    Exhausted,
}

impl MachineOutcome {
    pub fn total(&self) -> Option<u64> {
        match self {
            Self::Solved(solution) => Some(solution.total),
            Self::Inconsistent | Self::Exhausted => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

impl fmt::Display for MachineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(solution) => write!(f, "solved with {} presses", solution.total),
            Self::Inconsistent => f.write_str("inconsistent"),
            Self::Exhausted => f.write_str("no solution in bounds"),
        }
    }
}

/// How unsolved machines count toward a total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsolvedPolicy {
    /// Add 0 for the machine and log a warning
    ContributeZero,
    /// Fail on the first unsolved machine
    #[default]
    Reject,
}

/// Sum the solved totals, treating unsolved machines per `policy`.
///
/// `outcomes` is indexed by machine position in the input.
pub fn fold_totals<'a, I>(outcomes: I, policy: UnsolvedPolicy) -> Result<u64, LinearSystemError>
where
    I: IntoIterator<Item = &'a MachineOutcome>,
{
    let mut sum = 0u64;
    for (machine, outcome) in outcomes.into_iter().enumerate() {
        match (outcome.total(), policy) {
            (Some(total), _) => {
                sum = sum
                    .checked_add(total)
                    .ok_or(LinearSystemError::Overflow)?;
            }
            (None, UnsolvedPolicy::ContributeZero) => {
                warn!(machine, %outcome, "machine unsolved, counting 0 presses");
            }
            (None, UnsolvedPolicy::Reject) => {
                return Err(LinearSystemError::Unsolved {
                    machine,
                    outcome: outcome.clone(),
                });
            }
        }
    }
    Ok(sum)
}
