use advent_kit::{ParseError, PartSolver, PuzzleParser, SolveError, Solver};

/// Part 2 reuses the sorted list part 1 leaves behind
#[derive(Debug)]
struct Shared {
    numbers: Vec<i64>,
    sorted: bool,
}

#[derive(Solver)]
#[solver(parts = 2)]
struct Median;

impl PuzzleParser for Median {
    type Shared<'a> = Shared;

    fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|e| ParseError::InvalidFormat(format!("{line:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Shared {
            numbers,
            sorted: false,
        })
    }
}

impl PartSolver<1> for Median {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        shared.numbers.sort_unstable();
        shared.sorted = true;
        Ok(shared.numbers[0].to_string())
    }
}

impl PartSolver<2> for Median {
    fn solve(shared: &mut Self::Shared<'_>) -> Result<String, SolveError> {
        if !shared.sorted {
            shared.numbers.sort_unstable();
            shared.sorted = true;
        }
        Ok(shared.numbers[shared.numbers.len() / 2].to_string())
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(<Median as Solver>::PARTS, 2);
}

#[test]
fn test_part1_leaves_data_sorted() {
    let mut shared = Median::parse("5\n-2\n9").unwrap();
    assert_eq!(Median::solve_part(&mut shared, 1).unwrap(), "-2");
    assert!(shared.sorted);
    assert_eq!(shared.numbers, vec![-2, 5, 9]);
}

#[test]
fn test_part2_after_part1() {
    let mut shared = Median::parse("5\n-2\n9").unwrap();
    Median::solve_part(&mut shared, 1).unwrap();
    assert_eq!(Median::solve_part(&mut shared, 2).unwrap(), "5");
}

#[test]
fn test_part2_alone() {
    let mut shared = Median::parse("7\n1\n3\n2\n8").unwrap();
    assert_eq!(Median::solve_part(&mut shared, 2).unwrap(), "3");
}

#[test]
fn test_undeclared_part_not_implemented() {
    let mut shared = Median::parse("1").unwrap();
    assert!(matches!(
        Median::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}
