//! Reference objective reported by the `minfind` binary.

use std::f64::consts::E;

use crate::interval::Interval;

/// f(x) = x^2 + 2 (x log10(x / e) - 2), defined for x > 0.
pub fn reference(x: f64) -> f64 {
    x * x + 2.0 * (x * (x / E).log10() - 2.0)
}

/// Bracket the reference objective is searched over.
pub fn reference_interval() -> Interval {
    Interval::new(1.5, 2.0)
}
