/// Extrapolation strategy.
///
/// Controls what happens if the query point lies outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Extend the first and last segments linearly beyond the grid.
    Enable,

    /// Return an error when the query point is beyond the grid limits.
    #[default]
    Error,
}

impl From<Extrapolate> for ninterp::interpolator::Extrapolate<f64> {
    fn from(value: Extrapolate) -> Self {
        match value {
            Extrapolate::Enable => ninterp::interpolator::Extrapolate::Enable,
            Extrapolate::Error => ninterp::interpolator::Extrapolate::Error,
        }
    }
}
