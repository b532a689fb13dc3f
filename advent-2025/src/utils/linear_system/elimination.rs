//! Fraction-free integer elimination of a machine's counter equations

use super::LinearSystemError;
use super::machine::Machine;

/// Greatest common divisor of two non-negative integers; `gcd(0, 0) == 0`
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn row_gcd(row: &[i64]) -> i64 {
    row.iter().fold(0, |g, &v| gcd(g, v))
}

/// A non-trivial equation left after elimination: `sum(coef * x[button]) = target`.
///
/// Only non-zero coefficients are stored. The row is divided by the gcd of
/// its entries and signed so `target >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedRow {
    pub terms: Vec<(usize, i64)>,
    pub target: i64,
}

/// What elimination leaves of a machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// The equations can hold; search runs over these rows
    Reduced(ReducedSystem),
    /// Some combination of equations demands `0 = c` with `c != 0`
    Inconsistent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedSystem {
    pub rows: Vec<ReducedRow>,
    /// Pivot column of each pivot row, in row order
    pub pivots: Vec<usize>,
    /// Columns without a pivot
    pub free: Vec<usize>,
}

impl ReducedSystem {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Buttons that occur in at least one row
    pub fn constrained(&self, buttons: usize) -> Vec<bool> {
        let mut seen = vec![false; buttons];
        for row in &self.rows {
            for &(button, _) in &row.terms {
                seen[button] = true;
            }
        }
        seen
    }
}

/// `counters x (buttons + 1)` integer matrix, last column the targets.
///
/// Each machine owns its matrix; elimination rewrites it in place.
#[derive(Debug, Clone)]
pub struct AugmentedMatrix {
    rows: Vec<Vec<i64>>,
    columns: usize,
}

impl AugmentedMatrix {
    pub fn from_machine(machine: &Machine) -> Result<Self, LinearSystemError> {
        let columns = machine.button_count();
        let rows = machine
            .targets()
            .iter()
            .enumerate()
            .map(|(counter, &target)| {
                let mut row: Vec<i64> = (0..columns)
                    .map(|button| i64::from(machine.affects(button, counter)))
                    .collect();
                row.push(i64::try_from(target).map_err(|_| LinearSystemError::Overflow)?);
                Ok(row)
            })
            .collect::<Result<_, LinearSystemError>>()?;

        Ok(Self { rows, columns })
    }

    /// Forward elimination column by column. Returns the pivot columns.
    ///
    /// A column with no non-zero entry at or below the current pivot row is
    /// free and the pivot row stays put. Every updated row is divided by the
    /// gcd of its entries to keep magnitudes small.
    fn forward(&mut self) -> Result<Vec<usize>, LinearSystemError> {
        let height = self.rows.len();
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..self.columns {
            if pivot_row >= height {
                break;
            }
            let Some(found) = (pivot_row..height).find(|&r| self.rows[r][col] != 0) else {
                continue;
            };
            self.rows.swap(pivot_row, found);
            pivots.push(col);

            let (upper, lower) = self.rows.split_at_mut(pivot_row + 1);
            let pivot = &upper[pivot_row];
            let p = pivot[col];
            for row in lower.iter_mut().filter(|row| row[col] != 0) {
                let e = row[col];
                let g = gcd(e, p);
                let (keep, take) = (p / g, e / g);
                for c in col..=self.columns {
                    row[c] = row[c]
                        .checked_mul(keep)
                        .zip(pivot[c].checked_mul(take))
                        .and_then(|(a, b)| a.checked_sub(b))
                        .ok_or(LinearSystemError::Overflow)?;
                }
                let g = row_gcd(row);
                if g > 1 {
                    row.iter_mut().for_each(|v| *v /= g);
                }
            }
            pivot_row += 1;
        }

        Ok(pivots)
    }

    /// Eliminate and reduce the system
    pub fn reduce(mut self) -> Result<Reduction, LinearSystemError> {
        let pivots = self.forward()?;
        let columns = self.columns;

        let inconsistent = self.rows[pivots.len()..]
            .iter()
            .any(|row| row[..columns].iter().all(|&v| v == 0) && row[columns] != 0);
        if inconsistent {
            return Ok(Reduction::Inconsistent);
        }

        let rows = self
            .rows
            .into_iter()
            .filter_map(|row| {
                let g = row_gcd(&row);
                if g == 0 {
                    return None;
                }
                let g = if row[columns] < 0 { -g } else { g };
                Some(ReducedRow {
                    terms: row[..columns]
                        .iter()
                        .enumerate()
                        .filter(|&(_, &v)| v != 0)
                        .map(|(button, &v)| (button, v / g))
                        .collect(),
                    target: row[columns] / g,
                })
            })
            .collect();

        let free = (0..columns).filter(|c| !pivots.contains(c)).collect();
        Ok(Reduction::Reduced(ReducedSystem { rows, pivots, free }))
    }
}
