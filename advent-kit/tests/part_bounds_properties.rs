//! Property tests for range-checked part dispatch

use advent_kit::{ParseError, PuzzleParser, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Echoes the part number; `N` sets how many parts it declares
struct Parts<const N: u8>;

impl<const N: u8> PuzzleParser for Parts<N> {
    type Shared<'a> = u32;

    fn parse(_input: &str) -> Result<Self::Shared<'_>, ParseError> {
        Ok(0)
    }
}

impl<const N: u8> Solver for Parts<N> {
    const PARTS: u8 = N;

    fn solve_part(calls: &mut Self::Shared<'_>, part: u8) -> Result<String, SolveError> {
        *calls += 1;
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, calls: &mut u32, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => Parts::<1>::solve_part_checked_range(calls, part),
        2 => Parts::<2>::solve_part_checked_range(calls, part),
        3 => Parts::<3>::solve_part_checked_range(calls, part),
        _ => Parts::<25>::solve_part_checked_range(calls, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_out_of_range_never_dispatches(parts in prop::sample::select(vec![1u8, 2, 3, 25]), part in any::<u8>()) {
        prop_assume!(part == 0 || part > parts);
        let mut calls = 0;
        let result = checked(parts, &mut calls, part);
        prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        prop_assert_eq!(calls, 0);
    }

    #[test]
    fn prop_in_range_matches_direct_dispatch(parts in prop::sample::select(vec![1u8, 2, 3, 25]), offset in any::<u8>()) {
        let part = offset % parts + 1;
        let mut calls = 0;
        let result = checked(parts, &mut calls, part).unwrap();
        prop_assert_eq!(result, format!("part{part}"));
        prop_assert_eq!(calls, 1);
    }
}

#[test]
fn test_zero_is_out_of_range() {
    let mut calls = 0;
    assert!(matches!(
        Parts::<2>::solve_part_checked_range(&mut calls, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}
