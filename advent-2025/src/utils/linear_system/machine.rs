//! Counters, buttons and the press vectors that satisfy them

use super::LinearSystemError;

/// One machine: target counter values and the counters each button bumps.
///
/// Pressing button `j` once adds exactly 1 to every counter in
/// `buttons[j]`. A machine is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    targets: Vec<u64>,
    buttons: Vec<Vec<usize>>,
}

impl Machine {
    /// Build a machine, rejecting buttons wired to counters that don't
    /// exist. Repeated counter indices within one button collapse to one.
    pub fn new(targets: Vec<u64>, buttons: Vec<Vec<usize>>) -> Result<Self, LinearSystemError> {
        let mut wired = Vec::with_capacity(buttons.len());
        for (button, mut counters) in buttons.into_iter().enumerate() {
            if let Some(&counter) = counters.iter().find(|&&c| c >= targets.len()) {
                return Err(LinearSystemError::UnknownCounter {
                    button,
                    counter,
                    counters: targets.len(),
                });
            }
            counters.sort_unstable();
            counters.dedup();
            wired.push(counters);
        }

        Ok(Self {
            targets,
            buttons: wired,
        })
    }

    pub fn targets(&self) -> &[u64] {
        &self.targets
    }

    pub fn buttons(&self) -> &[Vec<usize>] {
        &self.buttons
    }

    pub fn counter_count(&self) -> usize {
        self.targets.len()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Whether pressing `button` bumps `counter`
    pub fn affects(&self, button: usize, counter: usize) -> bool {
        self.buttons
            .get(button)
            .is_some_and(|counters| counters.binary_search(&counter).is_ok())
    }

    /// Upper bound on useful presses per button.
    ///
    /// A button can't be pressed more often than the smallest target among
    /// the counters it bumps. A button wired to nothing is bounded by 0.
    pub fn press_bounds(&self) -> Vec<u64> {
        self.buttons
            .iter()
            .map(|counters| {
                counters
                    .iter()
                    .map(|&c| self.targets[c])
                    .min()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Check a full press vector against the wiring and targets directly.
    pub fn validate(&self, presses: &[u64]) -> bool {
        if presses.len() != self.buttons.len() {
            return false;
        }

        let mut counters = vec![0u64; self.targets.len()];
        for (counters_hit, &count) in self.buttons.iter().zip(presses) {
            for &c in counters_hit {
                counters[c] = counters[c].saturating_add(count);
            }
        }
        counters == self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_counter_rejected() {
        let err = Machine::new(vec![1, 2], vec![vec![0], vec![1, 2]]).unwrap_err();
        assert!(matches!(
            err,
            LinearSystemError::UnknownCounter {
                button: 1,
                counter: 2,
                counters: 2
            }
        ));
    }

    #[test]
    fn test_duplicate_wiring_collapses() {
        let machine = Machine::new(vec![3], vec![vec![0, 0]]).unwrap();
        assert_eq!(machine.buttons(), &[vec![0]]);
        assert!(machine.validate(&[3]));
    }

    #[test]
    fn test_press_bounds() {
        let machine = Machine::new(vec![4, 2, 9], vec![vec![0, 1], vec![2], vec![]]).unwrap();
        assert_eq!(machine.press_bounds(), vec![2, 9, 0]);
        assert!(machine.affects(0, 1));
        assert!(!machine.affects(1, 0));
        assert!(!machine.affects(7, 0));
    }

    #[test]
    fn test_validate() {
        let machine = Machine::new(vec![2, 1], vec![vec![0], vec![0, 1]]).unwrap();
        assert!(machine.validate(&[1, 1]));
        assert!(!machine.validate(&[2, 1]));
        assert!(!machine.validate(&[1]));
    }
}
