//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print one result: the bare answer when quiet, otherwise with timings
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(answer), false) => println!("{}", format_line(result, answer)),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Err(e), false) => eprintln!("{}: Error - {e}", prefix(result)),
        }
    }

    /// Totals after all results, skipped when quiet
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Parts: {successes} solved, {failures} failed");
        if failures > 0 {
            println!("Failed: {}", failed_days(results));
        }
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        match TimeDelta::from_std(elapsed) {
            Ok(elapsed) => println!("Elapsed wall-clock time: {}", format_duration(elapsed)),
            Err(_) => println!("Elapsed wall-clock time: N/A"),
        }
    }
}

/// Failed parts grouped by day, e.g. `2025/03 parts 1, 2; 2025/07 part 2`.
/// Expects `results` in output order.
fn failed_days(results: &[SolverResult]) -> String {
    results
        .iter()
        .filter(|r| r.answer.is_err())
        .chunk_by(|r| (r.year, r.day))
        .into_iter()
        .map(|((year, day), group)| {
            let parts = group.map(|r| r.part).collect_vec();
            let label = if parts.len() == 1 { "part" } else { "parts" };
            format!("{year}/{day:02} {label} {}", parts.iter().join(", "))
        })
        .join("; ")
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

fn format_line(result: &SolverResult, answer: &str) -> String {
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {answer} ({parse_timing}solve: {})",
        prefix(result),
        format_duration(result.solve_duration)
    )
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(12_340)), "12.34ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    fn result(day: u8, part: u8, ok: bool) -> SolverResult {
        let answer = if ok {
            Ok("1".to_string())
        } else {
            Err(advent_kit::SolveError::PartNotImplemented(part).into())
        };
        SolverResult {
            year: 2025,
            day,
            part,
            answer,
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_failed_days_grouped() {
        let results = [
            result(3, 1, false),
            result(3, 2, false),
            result(4, 1, true),
            result(7, 1, true),
            result(7, 2, false),
        ];
        assert_eq!(failed_days(&results), "2025/03 parts 1, 2; 2025/07 part 2");
        assert_eq!(failed_days(&results[2..4]), "");
    }

    #[test]
    fn test_format_line() {
        let mut result = SolverResult {
            year: 2025,
            day: 10,
            part: 2,
            answer: Ok("33".to_string()),
            parse_duration: Some(TimeDelta::microseconds(40)),
            solve_duration: TimeDelta::microseconds(1_500),
        };
        assert_eq!(
            format_line(&result, "33"),
            "2025/10 Part 2: 33 (parse: 40µs, solve: 1.50ms)"
        );

        result.parse_duration = None;
        assert_eq!(format_line(&result, "33"), "2025/10 Part 2: 33 (solve: 1.50ms)");
    }
}
