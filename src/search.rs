//! Interval-reduction minimizers.
//!
//! Both searches bracket the minimum of a unimodal function by keeping two
//! interior probes and discarding the part of the bracket beyond the worse
//! one.  Only one new evaluation is needed per step since the surviving probe
//! is reused.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for how to
//! do this.
//!
//! # Examples
//! Using golden-section search:
//!
//! ```
//! use minfind::interval::Interval;
//! use minfind::search::golden_section;
//! use minfind::wrap::RealFn;
//!
//! let in_f = |x: f64| (x - 2.0) * (x - 2.0) + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let (bracket, calls) = golden_section(&f, &Interval::new(-1.0, 5.0), 1e-3).expect("bracket");
//! assert!(bracket.width() < 1e-3);
//! assert!(bracket.contains(2.0));
//! assert_eq!(calls, 19);
//! ```
//!
//! Using Fibonacci search:
//!
//! ```
//! use minfind::interval::Interval;
//! use minfind::search::fibonacci;
//! use minfind::wrap::RealFn;
//!
//! let in_f = |x: f64| (x - 2.0) * (x - 2.0) + 1.0;
//! let f = RealFn::new(&in_f);
//!
//! let (bracket, calls) = fibonacci(&f, &Interval::new(-1.0, 5.0), 1e-3).expect("bracket");
//! assert!(bracket.width() < 1e-3);
//! assert!((bracket.middle() - 2.0).abs() < 1e-3);
//!
//! // the two priming evaluations are part of this count
//! assert_eq!(calls, 20);
//! ```

mod fibonacci;
mod golden;

pub use self::fibonacci::fibonacci;
pub use self::golden::golden_section;

use std::fmt;

use thiserror::Error;

use crate::interval::Interval;
use crate::wrap::RealFnEval;

/// Search error conditions.
///
/// These all come from arguments the searches cannot make progress on.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SearchError {
    /// Tolerance is zero, negative or not finite.
    #[error("tolerance must be finite and positive, got {epsilon}")]
    InvalidTolerance { epsilon: f64 },

    /// Bracket has no interior to search.
    #[error("bracket [{lo}, {hi}] is empty")]
    EmptyInterval { lo: f64, hi: f64 },

    /// Tolerance is finer than f64 can resolve around the bracket.
    #[error("tolerance {epsilon} is below the bracket's floating-point resolution {resolution}")]
    ToleranceBelowResolution { epsilon: f64, resolution: f64 },

    /// Fibonacci term for width/epsilon does not fit in a u64.
    #[error("fibonacci schedule overflows for width/epsilon = {ratio}")]
    ScheduleOverflow { ratio: f64 },

    /// Objective returned NaN at a probe point.
    #[error("objective evaluated to NaN at x = {x}")]
    EvaluatedToNaN { x: f64 },
}

/// Selects one of the searches at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    GoldenSection,
    Fibonacci,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::GoldenSection, Method::Fibonacci];

    pub fn name(&self) -> &'static str {
        match self {
            Method::GoldenSection => "Golden section search",
            Method::Fibonacci => "Fibonacci search",
        }
    }

    /// Runs the selected search.  Returns the final bracket and the
    /// method's evaluation count.
    pub fn minimize<F>(
        &self,
        f: &F,
        interval: &Interval,
        epsilon: f64,
    ) -> Result<(Interval, usize), SearchError>
    where
        F: RealFnEval,
    {
        match self {
            Method::GoldenSection => golden_section(f, interval, epsilon),
            Method::Fibonacci => fibonacci(f, interval, epsilon),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bracket end given up by a step.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Dropped {
    Left,
    Right,
}

/// Interior probes y <= z and their function values.
#[derive(Clone, Debug)]
struct Probes {
    y: f64,
    z: f64,
    f_y: f64,
    f_z: f64,
}

impl Probes {
    /// Evaluates both starting probes.
    fn prime<F>(f: &F, y: f64, z: f64) -> Result<Probes, SearchError>
    where
        F: RealFnEval,
    {
        Ok(Probes {
            y,
            z,
            f_y: evaluate(f, y)?,
            f_z: evaluate(f, z)?,
        })
    }

    /// Narrows `window` past the worse probe and evaluates one fresh probe.
    ///
    /// Ties drop the right end.  The fresh probe comes from `place_y` (after
    /// dropping the right end) or `place_z` (after dropping the left end),
    /// evaluated on the narrowed window, and is never allowed to cross the
    /// reused probe.  Returns the end that moved.
    fn step<F, PY, PZ>(
        &mut self,
        f: &F,
        window: &mut Interval,
        place_y: PY,
        place_z: PZ,
    ) -> Result<Dropped, SearchError>
    where
        F: RealFnEval,
        PY: FnOnce(&Interval) -> f64,
        PZ: FnOnce(&Interval) -> f64,
    {
        let dropped = if self.f_y <= self.f_z {
            window.shrink_right(self.z);
            self.z = self.y;
            self.f_z = self.f_y;
            self.y = place_y(window).min(self.z);
            self.f_y = evaluate(f, self.y)?;
            Dropped::Right
        } else {
            window.shrink_left(self.y);
            self.y = self.z;
            self.f_y = self.f_z;
            self.z = place_z(window).max(self.y);
            self.f_z = evaluate(f, self.z)?;
            Dropped::Left
        };

        debug_assert!(self.is_ordered_within(window));
        Ok(dropped)
    }

    /// a <= y <= z <= b
    fn is_ordered_within(&self, window: &Interval) -> bool {
        window.lo() <= self.y && self.y <= self.z && self.z <= window.hi()
    }
}

fn evaluate<F>(f: &F, x: f64) -> Result<f64, SearchError>
where
    F: RealFnEval,
{
    let f_x = f.eval_f(x);
    if f_x.is_nan() {
        return Err(SearchError::EvaluatedToNaN { x });
    }
    Ok(f_x)
}
