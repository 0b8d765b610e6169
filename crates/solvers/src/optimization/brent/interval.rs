use super::Error;

/// The golden-section fraction: (3 - √5) / 2 = 1 - φ⁻¹.
pub(super) const GOLDEN: f64 = 0.381_966_011_250_105_1;

/// Search interval `[lower, upper]` that contains the optimum.
#[derive(Debug, Clone, Copy)]
pub(super) struct Interval {
    pub(super) lower: f64,
    pub(super) upper: f64,
}

impl Interval {
    /// Creates an interval from bounds given in either order.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite or the bounds coincide.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = bracket;
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::NonFiniteBracket { lower: a, upper: b });
        }
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        if upper - lower <= 0.0 {
            return Err(Error::DegenerateBracket { at: lower });
        }
        Ok(Self { lower, upper })
    }

    pub(super) fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub(super) fn mid(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns the starting point, one golden section from `lower`.
    pub(super) fn golden_point(&self) -> f64 {
        self.lower + GOLDEN * self.width()
    }
}
