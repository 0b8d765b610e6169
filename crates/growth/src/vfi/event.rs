/// Event emitted after each completed sweep.
///
/// Borrows the freshly computed snapshot, so observers that keep history
/// must copy what they need.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Number of completed sweeps, starting at 1.
    pub iter: usize,

    /// Sup-norm distance between this snapshot and the previous one.
    pub distance: f64,

    /// Value at each grid point.
    pub values: &'a [f64],

    /// Optimal consumption at each grid point.
    pub policy: &'a [f64],
}
