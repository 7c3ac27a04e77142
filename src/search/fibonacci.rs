use super::{Dropped, Probes, SearchError};
use crate::convergence::Tolerance;
use crate::interval::Interval;
use crate::ratio::FibonacciSchedule;
use crate::wrap::RealFnEval;

/// Minimization via Fibonacci search.
///
/// The number of steps is fixed up front by the first Fibonacci term F_n with
/// width / F_n below epsilon; step lengths then walk down the sequence, so
/// the split ratio drifts away from PHI1 towards 1/2 on the last steps.
///
/// Returns the final bracket, narrower than `epsilon`, and the number of
/// evaluations.  Unlike `golden_section` this count includes the two priming
/// evaluations.
pub fn fibonacci<F>(
    f: &F,
    interval: &Interval,
    epsilon: f64,
) -> Result<(Interval, usize), SearchError>
where
    F: RealFnEval,
{
    run(f, interval, epsilon, |_, _| {})
}

/// Fibonacci loop reporting the bracket and probes after every step.
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
    let origin = window.lo();
    let mut schedule = FibonacciSchedule::new(window.width(), finish.schedule_target(&window))?;
    tracing::trace!(lambda = schedule.lambda(), "fibonacci first split");

    // lattice index of the lower end; the upper end sits span() steps above
    let mut lo_k: u64 = 0;
    let split = schedule.split();
    let mut probes = Probes::prime(
        f,
        origin + schedule.at(split),
        (origin + schedule.at(schedule.span() - split)).min(window.hi()),
    )?;
    let mut calls = 2;

    while !finish.is_converged(window.width()) {
        let hi_k = lo_k + schedule.span();
        let old_split = schedule.split();
        let advanced = schedule.advance();
        assert!(
            advanced,
            "fibonacci schedule exhausted with bracket {:?} wider than {}",
            window, epsilon
        );

        let split = schedule.split();
        let dropped = probes.step(
            f,
            &mut window,
            |_| origin + schedule.at(lo_k + split),
            |w| (origin + schedule.at(hi_k - split)).min(w.hi()),
        )?;
        if dropped == Dropped::Left {
            lo_k += old_split;
        }
        calls += 1;

        tracing::trace!(
            a = window.lo(),
            b = window.hi(),
            y = probes.y,
            z = probes.z,
            delta = schedule.delta(),
            "fibonacci step"
        );
        observe(&window, &probes);
    }

    tracing::debug!(
        epsilon,
        a = window.lo(),
        b = window.hi(),
        calls,
        "fibonacci search converged"
    );
    Ok((window, calls))
}
