/// Whether the search looks for the lowest or the highest objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Goal {
    Minimize,
    Maximize,
}

impl Goal {
    /// Maps an objective onto a score where lower is always better.
    pub(super) fn score(self, objective: f64) -> f64 {
        match self {
            Self::Minimize => objective,
            Self::Maximize => -objective,
        }
    }
}
