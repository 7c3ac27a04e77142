//! Plain-text result table in the layout of the original command-line tool.

use std::fmt;

use crate::interval::Interval;
use crate::search::{Method, SearchError};
use crate::wrap::RealFnEval;

const RULE: &str = "---------------------------------";

/// Default significant digits, as for printf's bare `%g`.
pub const DEFAULT_DIGITS: usize = 6;

/// Formats `x` like printf's `%.{digits}g`.
///
/// Rounds to `digits` significant digits, picks fixed or exponent notation
/// by the rounded decimal exponent and strips trailing zeros.
pub fn format_g(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);

    // rounding first fixes the exponent, e.g. 9.99 at 2 digits is 10
    let sci = format!("{:.*e}", digits - 1, x);
    let (mantissa, exp) = sci.split_once('e').expect("exponent notation has an 'e'");
    let exp: i32 = exp.parse().expect("exponent notation has an integer exponent");

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        strip_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// One tolerance's outcome for one method.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub epsilon: f64,
    /// Significant digits for the bracket bounds.
    pub digits: usize,
    pub bracket: Interval,
    pub f_lo: f64,
    pub f_hi: f64,
    pub calls: usize,
}

impl Row {
    /// Runs `method` and evaluates the objective at both final bounds.
    pub fn evaluate<F>(
        method: Method,
        f: &F,
        interval: &Interval,
        epsilon: f64,
        digits: usize,
    ) -> Result<Row, SearchError>
    where
        F: RealFnEval,
    {
        let (bracket, calls) = method.minimize(f, interval, epsilon)?;
        Ok(Row {
            epsilon,
            digits,
            f_lo: f.eval_f(bracket.lo()),
            f_hi: f.eval_f(bracket.hi()),
            bracket,
            calls,
        })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "epsilon      | {}", format_g(self.epsilon, DEFAULT_DIGITS))?;
        writeln!(
            f,
            "[a; b]       | [{}; {}]",
            format_g(self.bracket.lo(), self.digits),
            format_g(self.bracket.hi(), self.digits)
        )?;
        writeln!(
            f,
            "[f(a); f(b)] | [{}; {}]",
            format_g(self.f_lo, DEFAULT_DIGITS),
            format_g(self.f_hi, DEFAULT_DIGITS)
        )?;
        writeln!(f, "f(x) calls   | {}", self.calls)
    }
}

/// Renders a method's rows under its title, separated by rules.
pub fn render(method: Method, rows: &[Row]) -> String {
    let mut out = format!("{} method\n", method);
    for row in rows {
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&row.to_string());
    }
    out
}
