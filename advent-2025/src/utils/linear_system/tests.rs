//! End-to-end tests for the minimum-press solver.

use proptest::prelude::*;

use super::*;

fn machine(targets: &[u64], buttons: &[&[usize]]) -> Machine {
    Machine::new(
        targets.to_vec(),
        buttons.iter().map(|b| b.to_vec()).collect(),
    )
    .unwrap()
}

fn total(machine: &Machine) -> Option<u64> {
    solve_machine(machine).unwrap().total()
}

/// Smallest total over every press vector, found by trying each count for
/// each button in turn.
///
/// A branch is cut once a counter goes negative, or once a counter that no
/// later button touches is left non-zero. Every press vector that could
/// validate is still visited.
fn brute_force(machine: &Machine) -> Option<u64> {
    let buttons: Vec<Vec<usize>> = (0..machine.button_count())
        .map(|b| {
            (0..machine.counter_count())
                .filter(|&c| machine.affects(b, c))
                .collect()
        })
        .collect();
    // last button touching each counter
    let mut last_touch = vec![None; machine.counter_count()];
    for (b, counters) in buttons.iter().enumerate() {
        for &c in counters {
            last_touch[c] = Some(b);
        }
    }

    let mut best = None;
    let mut presses = vec![0u64; buttons.len()];
    let mut remaining: Vec<i64> = machine.targets().iter().map(|&t| t as i64).collect();
    if remaining.iter().zip(&last_touch).any(|(&r, l)| r != 0 && l.is_none()) {
        return None;
    }
    enumerate(machine, &buttons, &last_touch, 0, &mut presses, &mut remaining, &mut best);
    best
}

fn enumerate(
    machine: &Machine,
    buttons: &[Vec<usize>],
    last_touch: &[Option<usize>],
    button: usize,
    presses: &mut [u64],
    remaining: &mut [i64],
    best: &mut Option<u64>,
) {
    if button == buttons.len() {
        if machine.validate(presses) {
            let sum = presses.iter().sum();
            *best = Some(best.map_or(sum, |b: u64| b.min(sum)));
        }
        return;
    }

    let mut count = 0;
    loop {
        let settled = buttons[button]
            .iter()
            .all(|&c| last_touch[c] != Some(button) || remaining[c] == 0);
        if settled {
            presses[button] = count;
            enumerate(machine, buttons, last_touch, button + 1, presses, remaining, best);
        }

        if buttons[button].is_empty() || buttons[button].iter().any(|&c| remaining[c] == 0) {
            break;
        }
        for &c in &buttons[button] {
            remaining[c] -= 1;
        }
        count += 1;
    }
    for &c in &buttons[button] {
        remaining[c] += count as i64;
    }
    presses[button] = 0;
}

#[test]
fn test_puzzle_examples() {
    let machines = [
        machine(&[3, 5, 4, 7], &[&[3], &[1, 3], &[2], &[2, 3], &[0, 2], &[0, 1]]),
        machine(
            &[7, 5, 12, 7, 2],
            &[&[0, 2, 3, 4], &[2, 3], &[0, 4], &[0, 1, 2], &[1, 2, 3, 4]],
        ),
        machine(
            &[10, 11, 11, 5, 10, 5],
            &[&[0, 1, 2, 3, 4], &[0, 3, 4], &[0, 1, 2, 4, 5], &[1, 2]],
        ),
    ];

    let totals: Vec<_> = machines.iter().map(total).collect();
    assert_eq!(totals, vec![Some(10), Some(12), Some(11)]);
    assert_eq!(total_presses(&machines, UnsolvedPolicy::Reject).unwrap(), 33);
}

#[test]
fn test_shared_button() {
    assert_eq!(total(&machine(&[2, 1], &[&[0], &[0, 1]])), Some(2));
}

#[test]
fn test_independent_counters() {
    assert_eq!(total(&machine(&[3, 4], &[&[0], &[1]])), Some(7));
}

#[test]
fn test_empty_machine() {
    assert_eq!(total(&machine(&[], &[])), Some(0));
}

#[test]
fn test_all_zero_targets() {
    let m = machine(&[0, 0, 0], &[&[0, 1], &[2], &[1, 2]]);
    let MachineOutcome::Solved(solution) = solve_machine(&m).unwrap() else {
        panic!("zero targets are always reachable");
    };
    assert_eq!(solution.total, 0);
    assert_eq!(solution.presses, vec![0, 0, 0]);
}

#[test]
fn test_unreachable_counter() {
    let m = machine(&[5], &[]);
    assert_eq!(solve_machine(&m).unwrap(), MachineOutcome::Inconsistent);

    let machines = [machine(&[3, 4], &[&[0], &[1]]), m];
    assert_eq!(
        total_presses(&machines, UnsolvedPolicy::ContributeZero).unwrap(),
        7
    );
    assert!(matches!(
        total_presses(&machines, UnsolvedPolicy::Reject),
        Err(LinearSystemError::Unsolved {
            machine: 1,
            outcome: MachineOutcome::Inconsistent
        })
    ));
}

#[test]
fn test_only_rational_solution_exhausts() {
    let m = machine(&[1, 1, 1], &[&[0, 2], &[0, 1], &[1, 2]]);
    assert_eq!(solve_machine(&m).unwrap(), MachineOutcome::Exhausted);
}

#[test]
fn test_repeated_solves_agree() {
    let m = machine(
        &[7, 5, 12, 7, 2],
        &[&[0, 2, 3, 4], &[2, 3], &[0, 4], &[0, 1, 2], &[1, 2, 3, 4]],
    );
    let first = solve_machine(&m).unwrap();
    for _ in 0..3 {
        assert_eq!(solve_machine(&m).unwrap(), first);
    }
}

fn arb_machine() -> impl Strategy<Value = Machine> {
    (1usize..=5, 0usize..=8)
        .prop_flat_map(|(counters, buttons)| {
            let wiring = prop::collection::vec(
                prop::sample::subsequence((0..counters).collect::<Vec<_>>(), 1..=counters),
                buttons,
            );
            let presses = prop::collection::vec(0u64..=2, buttons);
            let random_targets = prop::collection::vec(0u64..=4, counters);
            (wiring, presses, random_targets, any::<bool>())
        })
        .prop_map(|(wiring, presses, random_targets, reachable)| {
            // half the cases are built from a known press vector
            let targets = if reachable {
                let mut targets = vec![0u64; random_targets.len()];
                for (counters, &count) in wiring.iter().zip(&presses) {
                    for &c in counters {
                        targets[c] += count;
                    }
                }
                targets
            } else {
                random_targets
            };
            Machine::new(targets, wiring).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]

    #[test]
    fn prop_minimum_matches_brute_force(m in arb_machine()) {
        prop_assert_eq!(total(&m), brute_force(&m));
    }

    #[test]
    fn prop_solution_valid(m in arb_machine()) {
        if let MachineOutcome::Solved(solution) = solve_machine(&m).unwrap() {
            prop_assert!(m.validate(&solution.presses));
            prop_assert_eq!(solution.presses.iter().sum::<u64>(), solution.total);
            for (presses, bound) in solution.presses.iter().zip(m.press_bounds()) {
                prop_assert!(*presses <= bound);
            }
        }
    }
}
