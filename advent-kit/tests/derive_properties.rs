//! Properties of `#[derive(Solver)]` dispatch through the registry

use advent_kit::{
    DynSolver, ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError, Solver,
};
use proptest::prelude::*;

/// Part 1 sums, part 2 multiplies, part 3 counts
#[derive(Solver)]
#[solver(parts = 3)]
struct Fold;

impl PuzzleParser for Fold {
    type Shared<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Fold {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Fold {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .try_fold(1i64, |acc, &n| acc.checked_mul(n))
            .map(|p| p.to_string())
            .ok_or_else(|| SolveError::failed(std::io::Error::other("overflow")))
    }
}

impl PartSolver<3> for Fold {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

fn render(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #[test]
    fn prop_registry_matches_direct_calls(numbers in prop::collection::vec(-50i64..50, 0..12)) {
        let input = render(&numbers);
        let registry = RegistryBuilder::new()
            .register_solver::<Fold>(2024, 12)
            .unwrap()
            .build();
        let mut solver = registry.create_solver(2024, 12, &input).unwrap();

        prop_assert_eq!(solver.parts(), 3);
        prop_assert_eq!(solver.solve(1).unwrap().answer, numbers.iter().sum::<i64>().to_string());
        prop_assert_eq!(solver.solve(3).unwrap().answer, numbers.len().to_string());
    }

    #[test]
    fn prop_parts_solvable_in_any_order(numbers in prop::collection::vec(1i64..5, 1..8), first in 1u8..=3) {
        let input = render(&numbers);
        let mut shared = Fold::parse(&input).unwrap();
        let early = Fold::solve_part(&mut shared, first).unwrap();

        for part in 1..=3 {
            Fold::solve_part(&mut shared, part).unwrap();
        }
        prop_assert_eq!(Fold::solve_part(&mut shared, first).unwrap(), early);
    }
}

#[test]
fn test_solve_failure_surfaces() {
    let mut shared = vec![i64::MAX, 2];
    assert!(matches!(
        Fold::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_parse_error_surfaces() {
    let registry = RegistryBuilder::new()
        .register_solver::<Fold>(2024, 12)
        .unwrap()
        .build();
    assert!(registry.create_solver(2024, 12, "1 two 3").is_err());
}

#[test]
fn test_timings_recorded() {
    let registry = RegistryBuilder::new()
        .register_solver::<Fold>(2024, 12)
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2024, 12, "1 2 3").unwrap();
    let result = solver.solve(2).unwrap();
    assert_eq!(result.answer, "6");
    assert!(result.timing.end >= result.timing.start);
    assert!(result.timing.start >= solver.parsed().end);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}
