use std::cell::Cell;

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps a RealFnEval and tallies every call made through it.
///
/// Unlike the counters returned by the searches, this one sees every
/// evaluation, priming ones included.
pub struct Counted<'a, F>
where
    F: 'a + RealFnEval,
{
    pub inner: &'a F,
    calls: Cell<usize>,
}

impl<'a, F> Counted<'a, F>
where
    F: 'a + RealFnEval,
{
    pub fn new(inner: &'a F) -> Counted<'a, F> {
        Counted {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of evaluations so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<'a, F> RealFnEval for Counted<'a, F>
where
    F: 'a + RealFnEval,
{
    fn eval_f(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.eval_f(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_fn_forwards() {
        let in_f = |x: f64| 3.0 * x - 1.0;
        let f = RealFn::new(&in_f);
        assert_eq!(f.eval_f(2.0), 5.0);
    }

    #[test]
    fn test_counted_tallies_calls() {
        let in_f = |x: f64| x * x;
        let f = RealFn::new(&in_f);
        let counted = Counted::new(&f);
        assert_eq!(counted.calls(), 0);

        assert_eq!(counted.eval_f(3.0), 9.0);
        assert_eq!(counted.eval_f(-1.0), 1.0);
        assert_eq!(counted.calls(), 2);
    }
}
