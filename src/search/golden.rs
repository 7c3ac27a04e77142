use super::{Probes, SearchError};
use crate::convergence::Tolerance;
use crate::interval::Interval;
use crate::ratio::PHI2;
use crate::wrap::RealFnEval;

/// Minimization via golden-section search.
///
/// Each step keeps PHI1 of the bracket, so the iteration count follows from
/// log(epsilon / width) / log(PHI1).  Returns the final bracket, narrower
/// than `epsilon`, and the number of evaluations made after the two priming
/// ones.
pub fn golden_section<F>(
    f: &F,
    interval: &Interval,
    epsilon: f64,
) -> Result<(Interval, usize), SearchError>
where
    F: RealFnEval,
{
    run(f, interval, epsilon, |_, _| {})
}

/// Golden-section loop reporting the bracket and probes after every step.
fn run<F, O>(
    f: &F,
    interval: &Interval,
    epsilon: f64,
    mut observe: O,
) -> Result<(Interval, usize), SearchError>
where
    F: RealFnEval,
    O: FnMut(&Interval, &Probes),
{
    let finish = Tolerance::new(epsilon)?;
    finish.check_bracket(interval)?;

    let mut window = interval.clone();
    let offset = PHI2 * window.width();
    let mut probes = Probes::prime(f, window.lo() + offset, window.hi() - offset)?;
    let mut calls = 0;

    while !finish.is_converged(window.width()) {
        probes.step(
            f,
            &mut window,
            |w| w.lo() + PHI2 * w.width(),
            |w| w.hi() - PHI2 * w.width(),
        )?;
        calls += 1;

        tracing::trace!(
            a = window.lo(),
            b = window.hi(),
            y = probes.y,
            z = probes.z,
            "golden-section step"
        );
        observe(&window, &probes);
    }

    tracing::debug!(
        epsilon,
        a = window.lo(),
        b = window.hi(),
        calls,
        "golden-section search converged"
    );
    Ok((window, calls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::reference;
    use crate::ratio::PHI1;
    use crate::wrap::{Counted, RealFn};
    use approx::assert_relative_eq;

    #[test]
    fn test_golden_reference_counts() {
        let f = RealFn::new(&reference);
        let start = Interval::new(1.5, 2.0);

        for &(eps, want) in &[(0.1, 4), (0.01, 9), (0.001, 13)] {
            let (bracket, calls) = golden_section(&f, &start, eps).expect("bracket");
            assert_eq!(calls, want, "eps={}", eps);
            assert!(bracket.width() < eps);

            // objective increases on [1.5, 2]: the left end never moves
            assert_eq!(bracket.lo(), 1.5);
        }
    }

    #[test]
    fn test_golden_reference_bracket() {
        let f = RealFn::new(&reference);
        let (bracket, _) = golden_section(&f, &Interval::new(1.5, 2.0), 0.1).expect("bracket");

        // four right-drops from width 0.5 leave 0.5 * PHI1^4
        assert_relative_eq!(bracket.hi(), 1.5 + 0.5 * PHI1.powi(4), epsilon = 1e-12);
    }

    #[test]
    fn test_golden_probes_ordered_and_widths_shrink() {
        let in_f = |x: f64| (x - 0.3) * (x - 0.3);
        let f = RealFn::new(&in_f);

        let start = Interval::new(0.0, 1.0);
        let mut widths = vec![start.width()];
        let (_, calls) = run(&f, &start, 1e-6, |window, probes| {
            assert!(probes.is_ordered_within(window), "{:?} {:?}", window, probes);
            assert!(start.contains_interval(window));
            widths.push(window.width());
        })
        .expect("bracket");

        assert_eq!(widths.len(), calls + 1);
        for pair in widths.windows(2) {
            assert!(pair[1] < pair[0]);
            assert_relative_eq!(pair[1] / pair[0], PHI1, epsilon = 1e-6);
        }

        // exits as soon as the width first drops below epsilon
        let last = widths[widths.len() - 1];
        let second_last = widths[widths.len() - 2];
        assert!(last < 1e-6 && second_last >= 1e-6);
    }

    #[test]
    fn test_golden_counts_post_priming_evaluations() {
        let in_f = |x: f64| x.cos();
        let f = RealFn::new(&in_f);
        let counted = Counted::new(&f);

        let (_, calls) = golden_section(&counted, &Interval::new(2.0, 4.0), 1e-4).expect("bracket");
        assert_eq!(counted.calls(), calls + 2);
    }

    #[test]
    fn test_golden_coarse_epsilon() {
        let in_f = |x: f64| x * x;
        let f = RealFn::new(&in_f);
        let counted = Counted::new(&f);

        // bracket already narrower than epsilon: only the priming calls
        let start = Interval::new(-1.0, 5.0);
        let (bracket, calls) = golden_section(&counted, &start, 10.0).expect("bracket");
        assert_eq!(bracket, start);
        assert_eq!(calls, 0);
        assert_eq!(counted.calls(), 2);
    }

    #[test]
    fn test_golden_monotone_function_hits_edge() {
        let in_f = |x: f64| -x;
        let f = RealFn::new(&in_f);

        let (bracket, _) = golden_section(&f, &Interval::new(0.0, 1.0), 1e-6).expect("bracket");
        assert_eq!(bracket.hi(), 1.0);
        assert!(bracket.lo() > 1.0 - 1e-6);
    }
}
