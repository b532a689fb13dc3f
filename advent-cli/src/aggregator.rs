//! Puts results arriving from parallel workers back into (year, day, part)
//! order so output can be streamed as soon as the next result is known.

use crate::executor::{SolverResult, WorkItem};
use std::collections::{BTreeMap, BTreeSet};

/// Key for ordering results, ascending by year, day then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

impl ResultKey {
    /// Every key a list of work items is expected to produce
    pub fn expected_from(work_items: &[WorkItem]) -> Vec<ResultKey> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts.clone().map(move |part| ResultKey {
                    year: w.year,
                    day: w.day,
                    part,
                })
            })
            .collect()
    }
}

/// Buffers results until everything ordered before them has arrived
pub struct ResultAggregator {
    /// Keys not yet emitted; the first one is the next to print
    expected: BTreeSet<ResultKey>,
    /// Received results waiting on an earlier key
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().collect(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return the results now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(&next) = self.expected.first() {
            let Some(result) = self.pending.remove(&next) else {
                break;
            };
            self.expected.pop_first();
            ready.push(result);
        }
        ready
    }

    /// Take whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Whether every expected result has been emitted
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
