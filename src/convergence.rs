use crate::interval::Interval;
use crate::search::SearchError;

/// How many units of f64 spacing the tolerance must exceed at the bracket's
/// magnitude.  Below that the probe points stop moving.
const RESOLUTION_ULPS: f64 = 16.0;

/// Rounding allowance, in units of f64 spacing, for a bracket whose ends are
/// computed points rather than exact values.
const ROUNDING_ULPS: f64 = 8.0;

/// Width-based stopping rule shared by both searches: done once the bracket
/// is narrower than `epsilon`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Validated tolerance.  Rejects zero, negative and non-finite values.
    pub fn new(epsilon: f64) -> Result<Tolerance, SearchError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(SearchError::InvalidTolerance { epsilon });
        }
        Ok(Tolerance { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn is_converged(&self, width: f64) -> bool {
        width < self.epsilon
    }

    /// Checks that `bracket` can actually be narrowed below this tolerance.
    pub fn check_bracket(&self, bracket: &Interval) -> Result<(), SearchError> {
        if bracket.lo() >= bracket.hi() {
            return Err(SearchError::EmptyInterval {
                lo: bracket.lo(),
                hi: bracket.hi(),
            });
        }

        let resolution = resolution(bracket);
        if self.epsilon <= resolution {
            return Err(SearchError::ToleranceBelowResolution {
                epsilon: self.epsilon,
                resolution,
            });
        }
        Ok(())
    }

    /// Width a precomputed step schedule has to reach so that the bracket it
    /// produces, rounding included, still ends up narrower than epsilon.
    ///
    /// Stays positive for any bracket accepted by `check_bracket`.
    pub(crate) fn schedule_target(&self, bracket: &Interval) -> f64 {
        self.epsilon - ROUNDING_ULPS * f64::EPSILON * magnitude(bracket)
    }
}

/// Smallest width worth asking for around the bracket's magnitude.
fn resolution(bracket: &Interval) -> f64 {
    RESOLUTION_ULPS * f64::EPSILON * magnitude(bracket)
}

fn magnitude(bracket: &Interval) -> f64 {
    bracket.lo().abs().max(bracket.hi().abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_convergence() {
        let t = Tolerance::new(0.1).expect("valid");
        assert_eq!(t.epsilon(), 0.1);

        // strict: equal width keeps going
        assert!(!t.is_converged(0.1));
        assert!(!t.is_converged(0.5));
        assert!(t.is_converged(0.0999));
    }

    #[test]
    fn test_tolerance_rejects_bad_epsilon() {
        for &eps in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            match Tolerance::new(eps) {
                Err(SearchError::InvalidTolerance { .. }) => {}
                other => panic!("epsilon={} gave {:?}", eps, other),
            }
        }
    }

    #[test]
    fn test_tolerance_rejects_point_bracket() {
        let t = Tolerance::new(0.1).expect("valid");
        let err = t
            .check_bracket(&Interval::new(1.0, 1.0))
            .expect_err("empty bracket");
        assert_eq!(err, SearchError::EmptyInterval { lo: 1.0, hi: 1.0 });
    }

    #[test]
    fn test_tolerance_resolution_floor() {
        // 1e-12 is fine near the origin
        let t = Tolerance::new(1e-12).expect("valid");
        assert!(t.check_bracket(&Interval::new(0.0, 1.0)).is_ok());

        // but around 1e6 the f64 spacing is already ~1e-10
        match t.check_bracket(&Interval::new(1e6, 1e6 + 1.0)) {
            Err(SearchError::ToleranceBelowResolution { resolution, .. }) => {
                assert!(resolution > 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_schedule_target_below_epsilon() {
        let t = Tolerance::new(0.1).expect("valid");

        let target = t.schedule_target(&Interval::new(1.0, 2.3));
        assert!(target < 0.1);
        assert!(0.1 - target < 1e-14);

        // smallest accepted tolerance still leaves room
        let bracket = Interval::new(1e6, 1e6 + 1.0);
        let t = Tolerance::new(2.0 * resolution(&bracket)).expect("valid");
        assert!(t.check_bracket(&bracket).is_ok());
        assert!(t.schedule_target(&bracket) > 0.0);
    }
}
