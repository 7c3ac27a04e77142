/// Interval represents the closed bracket [a,b] holding a minimizer.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Interval {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Interval { a, b }
    }

    /// Lower bound.
    pub fn lo(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    pub fn hi(&self) -> f64 {
        self.b
    }

    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    pub fn middle(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }

    /// Whether `other` lies entirely inside this interval.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.a <= other.a && other.b <= self.b
    }

    /// Discards [b_new,b].
    pub(crate) fn shrink_right(&mut self, b_new: f64) {
        debug_assert!(self.a <= b_new && b_new <= self.b);
        self.b = b_new;
    }

    /// Discards [a,a_new].
    pub(crate) fn shrink_left(&mut self, a_new: f64) {
        debug_assert!(self.a <= a_new && a_new <= self.b);
        self.a = a_new;
    }
}
