//! Forced-value propagation over reduced rows

use super::elimination::ReducedRow;

/// Per-button press counts; `None` is still unknown
pub type Assignment = Vec<Option<u64>>;

/// Result of one propagation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// No row is violated (some may still have unknowns)
    Consistent,
    /// A row can't be satisfied by the current assignment
    Infeasible,
}

/// One pass over `rows` in order, filling in any button a row forces.
///
/// Values solved by an earlier row are visible to later rows in the same
/// pass. A forced value must divide exactly, be non-negative and stay
/// within the button's bound. Rows with two or more unknowns are skipped.
pub fn propagate(rows: &[ReducedRow], bounds: &[u64], assignment: &mut Assignment) -> Propagation {
    for row in rows {
        let mut known: i128 = 0;
        let mut unknown = None;
        let mut unknowns = 0;

        for &(button, coef) in &row.terms {
            match assignment[button] {
                Some(value) => known += i128::from(coef) * i128::from(value),
                None => {
                    unknowns += 1;
                    unknown = Some((button, coef));
                }
            }
        }

        let rest = i128::from(row.target) - known;
        match (unknowns, unknown) {
            (0, _) if rest != 0 => return Propagation::Infeasible,
            (1, Some((button, coef))) => {
                let coef = i128::from(coef);
                if rest % coef != 0 {
                    return Propagation::Infeasible;
                }
                let value = rest / coef;
                if value < 0 || value > i128::from(bounds[button]) {
                    return Propagation::Infeasible;
                }
                // bounded by a u64 above, so the conversion can't fail
                assignment[button] = u64::try_from(value).ok();
            }
            _ => {}
        }
    }

    Propagation::Consistent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(terms: &[(usize, i64)], target: i64) -> ReducedRow {
        ReducedRow {
            terms: terms.to_vec(),
            target,
        }
    }

    #[test]
    fn test_chain_resolves_in_one_pass() {
        // the single-unknown row comes first, so its value feeds the second
        let rows = [row(&[(1, 1)], 1), row(&[(0, 1), (1, 1)], 2)];
        let mut assignment = vec![None, None];
        assert_eq!(propagate(&rows, &[5, 5], &mut assignment), Propagation::Consistent);
        assert_eq!(assignment, vec![Some(1), Some(1)]);
    }

    #[test]
    fn test_later_rows_do_not_feed_earlier_rows() {
        let rows = [row(&[(0, 1), (1, 1)], 2), row(&[(1, 1)], 1)];
        let mut assignment = vec![None, None];
        assert_eq!(propagate(&rows, &[5, 5], &mut assignment), Propagation::Consistent);
        assert_eq!(assignment, vec![None, Some(1)]);
    }

    #[test]
    fn test_inexact_division_infeasible() {
        let rows = [row(&[(0, 2)], 3)];
        let mut assignment = vec![None];
        assert_eq!(propagate(&rows, &[9], &mut assignment), Propagation::Infeasible);
    }

    #[test]
    fn test_negative_and_over_bound_infeasible() {
        let rows = [row(&[(0, 1), (1, 1)], 2)];

        let mut assignment = vec![Some(3), None];
        assert_eq!(propagate(&rows, &[5, 5], &mut assignment), Propagation::Infeasible);

        let rows = [row(&[(0, 1)], 4)];
        let mut assignment = vec![None];
        assert_eq!(propagate(&rows, &[3], &mut assignment), Propagation::Infeasible);
    }

    #[test]
    fn test_fully_known_row_checked() {
        let rows = [row(&[(0, 1), (1, -1)], 1)];
        assert_eq!(
            propagate(&rows, &[5, 5], &mut vec![Some(3), Some(2)]),
            Propagation::Consistent
        );
        assert_eq!(
            propagate(&rows, &[5, 5], &mut vec![Some(3), Some(3)]),
            Propagation::Infeasible
        );
    }

    #[test]
    fn test_two_unknowns_untouched() {
        let rows = [row(&[(0, 1), (1, 1)], 2)];
        let mut assignment = vec![None, None];
        assert_eq!(propagate(&rows, &[5, 5], &mut assignment), Propagation::Consistent);
        assert_eq!(assignment, vec![None, None]);
    }
}
