//! Derivative-free minimization of unimodal functions of one variable.
//!
//! Two searches are provided, both narrowing a bracket around the minimizer
//! with one new function evaluation per step:
//!
//! * `search::golden_section` shrinks the bracket by the fixed ratio PHI1.
//! * `search::fibonacci` fixes the number of steps up front from the
//!   requested precision and walks a Fibonacci ratio schedule.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for how to
//! do this.
//!
//! # Examples
//!
//! ```
//! use minfind::interval::Interval;
//! use minfind::search::Method;
//! use minfind::wrap::RealFn;
//!
//! // minimum at x = pi
//! let in_f = |x: f64| x.cos();
//! let f = RealFn::new(&in_f);
//!
//! for method in Method::ALL.iter() {
//!     let (bracket, _calls) = method
//!         .minimize(&f, &Interval::new(2.0, 4.0), 1e-6)
//!         .expect("bracket");
//!     assert!((bracket.middle() - std::f64::consts::PI).abs() < 2e-6);
//! }
//! ```

pub mod convergence;
pub mod interval;
pub mod objective;
pub mod ratio;
pub mod report;
pub mod search;
pub mod wrap;
