//! Depth-first branch and bound over button press counts

use super::elimination::{ReducedRow, ReducedSystem};
use super::machine::Machine;
use super::propagate::{Assignment, Propagation, propagate};

/// How a search node ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Propagation found a violated row, or the total overflowed
    Infeasible,
    /// Partial sum already at or above the best total
    Pruned,
    /// Every button known and checked against the machine
    Complete,
    /// Children were pushed for one button
    Branched,
    /// Unknown buttons remain but no row mentions any of them
    Stuck,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: usize,
    pub infeasible: usize,
    pub pruned: usize,
    pub complete: usize,
}

impl SearchStats {
    fn record(&mut self, status: NodeStatus) {
        self.nodes += 1;
        match status {
            NodeStatus::Infeasible => self.infeasible += 1,
            NodeStatus::Pruned => self.pruned += 1,
            NodeStatus::Complete => self.complete += 1,
            NodeStatus::Branched | NodeStatus::Stuck => {}
        }
    }
}

/// Best complete assignment found so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent {
    pub presses: Vec<u64>,
    pub total: u64,
}

/// Explicit-stack search for the press vector with the smallest total.
///
/// Buttons no row mentions can only add to the total, so they start at 0.
/// Children are pushed so that the smallest value of the branching button
/// is explored first.
pub struct Search<'a> {
    machine: &'a Machine,
    rows: &'a [ReducedRow],
    bounds: Vec<u64>,
    stack: Vec<Assignment>,
    best: Option<Incumbent>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(machine: &'a Machine, system: &'a ReducedSystem) -> Self {
        let buttons = machine.button_count();
        let root = system
            .constrained(buttons)
            .into_iter()
            .map(|constrained| if constrained { None } else { Some(0) })
            .collect();

        Self {
            machine,
            rows: &system.rows,
            bounds: machine.press_bounds(),
            stack: vec![root],
            best: None,
            stats: SearchStats::default(),
        }
    }

    /// Run until the stack is empty
    pub fn run(mut self) -> (Option<Incumbent>, SearchStats) {
        while let Some(node) = self.stack.pop() {
            let status = self.visit(node);
            self.stats.record(status);
        }
        (self.best, self.stats)
    }

    fn visit(&mut self, mut assignment: Assignment) -> NodeStatus {
        if propagate(self.rows, &self.bounds, &mut assignment) == Propagation::Infeasible {
            return NodeStatus::Infeasible;
        }

        // a total beyond u64 cannot be reported, so such branches are dead
        let Some(partial) = assignment
            .iter()
            .flatten()
            .try_fold(0u64, |sum, &presses| sum.checked_add(presses))
        else {
            return NodeStatus::Infeasible;
        };
        if self.best.as_ref().is_some_and(|best| partial >= best.total) {
            return NodeStatus::Pruned;
        }

        if assignment.iter().all(Option::is_some) {
            let presses: Vec<u64> = assignment.into_iter().flatten().collect();
            if self.machine.validate(&presses) {
                self.best = Some(Incumbent {
                    presses,
                    total: partial,
                });
            }
            return NodeStatus::Complete;
        }

        let Some(button) = self.choose(&assignment) else {
            return NodeStatus::Stuck;
        };
        for value in (0..=self.bounds[button]).rev() {
            let mut child = assignment.clone();
            child[button] = Some(value);
            self.stack.push(child);
        }
        NodeStatus::Branched
    }

    /// The last unknown button of the first row with the fewest unknowns
    fn choose(&self, assignment: &Assignment) -> Option<usize> {
        let mut choice: Option<(usize, usize)> = None;
        for row in self.rows {
            let unknown = row
                .terms
                .iter()
                .filter(|&&(button, _)| assignment[button].is_none());
            let count = unknown.clone().count();
            if count == 0 || choice.is_some_and(|(fewest, _)| count >= fewest) {
                continue;
            }
            if let Some(&(button, _)) = unknown.last() {
                choice = Some((count, button));
            }
            if count == 1 {
                break;
            }
        }
        choice.map(|(_, button)| button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::linear_system::elimination::{AugmentedMatrix, Reduction};

    fn search(targets: Vec<u64>, buttons: Vec<Vec<usize>>) -> (Option<Incumbent>, SearchStats) {
        let machine = Machine::new(targets, buttons).unwrap();
        let Reduction::Reduced(system) = AugmentedMatrix::from_machine(&machine)
            .unwrap()
            .reduce()
            .unwrap()
        else {
            panic!("expected a consistent system");
        };
        Search::new(&machine, &system).run()
    }

    #[test]
    fn test_unique_solution() {
        let (best, stats) = search(vec![2, 1], vec![vec![0], vec![0, 1]]);
        let best = best.unwrap();
        assert_eq!(best.presses, vec![1, 1]);
        assert_eq!(best.total, 2);
        assert_eq!(stats.complete, 1);
    }

    #[test]
    fn test_prefers_cheaper_combination() {
        // button 2 covers both counters at once
        let (best, _) = search(vec![3, 3], vec![vec![0], vec![1], vec![0, 1]]);
        let best = best.unwrap();
        assert_eq!(best.total, 3);
        assert_eq!(best.presses, vec![0, 0, 3]);
    }

    #[test]
    fn test_unwired_button_fixed_to_zero() {
        let (best, stats) = search(vec![4], vec![vec![], vec![0]]);
        assert_eq!(best.unwrap().presses, vec![0, 4]);
        assert_eq!(stats.infeasible, 0);
    }

    #[test]
    fn test_total_overflow_is_infeasible() {
        let huge = i64::MAX as u64;
        let (best, stats) = search(
            vec![huge, huge, huge],
            vec![vec![0], vec![1], vec![2]],
        );
        assert!(best.is_none());
        assert_eq!(stats.complete, 0);
        assert!(stats.infeasible > 0);
    }

    #[test]
    fn test_no_integer_solution_exhausts() {
        // x0 + x1 = 1, x1 + x2 = 1, x0 + x2 = 1 has only the rational solution 1/2
        let (best, stats) = search(vec![1, 1, 1], vec![vec![0, 2], vec![0, 1], vec![1, 2]]);
        assert!(best.is_none());
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_choose_prefers_fewest_unknowns() {
        let machine = Machine::new(vec![5, 5], vec![vec![0, 1], vec![0], vec![1]]).unwrap();
        let system = ReducedSystem {
            rows: vec![
                ReducedRow {
                    terms: vec![(0, 1), (1, 1), (2, 1)],
                    target: 5,
                },
                ReducedRow {
                    terms: vec![(0, 1), (2, 1)],
                    target: 5,
                },
                ReducedRow {
                    terms: vec![(1, 1), (2, 1)],
                    target: 5,
                },
            ],
            pivots: vec![0, 1],
            free: vec![2],
        };
        let search = Search::new(&machine, &system);
        assert_eq!(search.choose(&vec![None, None, None]), Some(2));
        assert_eq!(search.choose(&vec![Some(1), None, None]), Some(2));
        assert_eq!(search.choose(&vec![None, None, Some(0)]), Some(0));
    }
}
