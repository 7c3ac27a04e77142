//! Reduction ratios for interval-shrinking searches.

use crate::search::SearchError;

/// (√5 - 1) / 2, the share of the bracket kept by a golden-section step.
pub const PHI1: f64 = 0.618_033_988_749_894_8;

/// (3 - √5) / 2 = 1 - PHI1, the offset of each probe from its nearest bound.
pub const PHI2: f64 = 0.381_966_011_250_105_1;

/// Ratio used for the first Fibonacci split of a bracket of size `width`
/// searched down to `epsilon`.
///
/// Returns fib_prev / fib_cur for the first Fibonacci term fib_cur with
/// width / fib_cur below epsilon.  Tends to PHI1 as epsilon shrinks.
pub fn first_lambda(width: f64, epsilon: f64) -> Result<f64, SearchError> {
    FibonacciSchedule::new(width, epsilon).map(|s| s.lambda())
}

/// Fibonacci step lengths, kept as exact integer terms times a unit length.
///
/// With terms (cur, prev) = (F_k, F_k-1) the step lengths are
/// delta = F_k*u, delta1 = F_k-1*u and delta2 = F_k-2*u.  Every probe of a
/// search lands on a whole multiple of u from the starting lower bound, so
/// positions are addressed by integer lattice index.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FibonacciSchedule {
    cur: u64,
    prev: u64,
    unit: f64,
}

impl FibonacciSchedule {
    /// Starts from the first term F_k whose unit width / F_k is below
    /// `epsilon`, which fixes the number of steps.
    pub(crate) fn new(width: f64, epsilon: f64) -> Result<FibonacciSchedule, SearchError> {
        let mut prev: u64 = 1;
        let mut cur: u64 = 1;

        while width / cur as f64 >= epsilon {
            let next = prev
                .checked_add(cur)
                .ok_or(SearchError::ScheduleOverflow {
                    ratio: width / epsilon,
                })?;
            prev = cur;
            cur = next;
        }

        Ok(FibonacciSchedule {
            cur,
            prev,
            unit: width / cur as f64,
        })
    }

    pub(crate) fn lambda(&self) -> f64 {
        self.prev as f64 / self.cur as f64
    }

    pub(crate) fn delta(&self) -> f64 {
        self.cur as f64 * self.unit
    }

    /// Current bracket width in lattice steps (F_k).
    pub(crate) fn span(&self) -> u64 {
        self.cur
    }

    /// Probe offset from the nearest bound in lattice steps (F_k-2).
    pub(crate) fn split(&self) -> u64 {
        self.cur - self.prev
    }

    /// Distance of lattice index `k` from the starting lower bound.
    pub(crate) fn at(&self, k: u64) -> f64 {
        k as f64 * self.unit
    }

    /// Shifts one Fibonacci step down.  Returns false once the terms are
    /// exhausted (F_2 = F_1 = 1), leaving the schedule untouched.
    pub(crate) fn advance(&mut self) -> bool {
        if self.cur <= 1 {
            return false;
        }
        let next = self.cur - self.prev;
        self.cur = self.prev;
        self.prev = next;
        true
    }
}
