//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError, PartFailure};
use crate::inputs::InputStore;
use advent_kit::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tracing::{info, warn};

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PartFailure>,
    /// Set on the result that paid for parsing the input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, failure: PartFailure) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(failure),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// One registered day and the parts to run for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected days on a rayon pool and streams results to a channel
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    parallelize_by: ParallelizeBy,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            registry,
            inputs: InputStore::new(&config.inputs_dir, config.test_input),
            year: config.year,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            parallelize_by: config.parallelize_by,
            thread_pool,
        })
    }

    /// Registered days matching the year, day and part filters
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| info.year == self.year)
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send one result per part to `tx`
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            days = work_items.len(),
            mode = ?self.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "running solvers"
        );

        match self.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = self.run_day(work, &tx) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .map(|work| self.run_day(work, &tx).err())
                    .reduce_with(|err1, err2| match (err1, err2) {
                        (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                        (None, e2) => e2,
                    })
                    .flatten()
                    .map_or(Ok(()), Err)
            }),
        }
    }

    fn run_day(&self, work: &WorkItem, tx: &Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let input = match self.inputs.read(work.day) {
            Ok(input) => input,
            Err(err) => {
                warn!(year = work.year, day = work.day, error = %err, "input unavailable");
                let err = Arc::new(err);
                return fail_parts(work, tx, || PartFailure::Input(err.clone()));
            }
        };

        if matches!(self.parallelize_by, ParallelizeBy::Part) {
            work.parts
                .clone()
                .into_par_iter()
                .map(|part| self.run_parts(work, part..=part, &input, tx).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        } else {
            self.run_parts(work, work.parts.clone(), &input, tx)
        }
    }

    /// Parse `input` once and solve `parts` in order on the parsed data
    fn run_parts(
        &self,
        work: &WorkItem,
        parts: RangeInclusive<u8>,
        input: &str,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let mut solver = match self.registry.create_solver(work.year, work.day, input) {
            Ok(solver) => solver,
            Err(err) => {
                warn!(year = work.year, day = work.day, error = %err, "could not set up solver");
                let err = Arc::new(err);
                let work = WorkItem {
                    parts,
                    ..work.clone()
                };
                return fail_parts(&work, tx, || PartFailure::Setup(err.clone()));
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in parts {
            let result = solve_part(&mut *solver, part, parse_duration.take());
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
        }
        Ok(())
    }
}

fn fail_parts<F>(work: &WorkItem, tx: &Sender<SolverResult>, failure: F) -> Result<(), ArcExecutorError>
where
    F: Fn() -> PartFailure,
{
    for part in work.parts.clone() {
        tx.send(SolverResult::failed(work.year, work.day, part, failure()))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

fn solve_part(
    solver: &mut dyn DynSolver,
    part: u8,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let puzzle = solver.puzzle();
    let (year, day) = (puzzle.year, puzzle.day);
    match solver.solve(part) {
        Ok(solved) => {
            info!(year, day, part, tags = ?puzzle.tags, elapsed = %solved.duration(), "solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration,
            }
        }
        Err(err) => {
            warn!(year, day, part, error = %err, "part failed");
            SolverResult {
                parse_duration,
                ..SolverResult::failed(year, day, part, err.into())
            }
        }
    }
}
