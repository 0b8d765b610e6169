use crate::optimization::evaluate::Evaluation;

/// An abscissa paired with the objective the problem reported there.
///
/// Objectives keep their original sign whether the search minimizes or
/// maximizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub objective: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        let [x] = eval.x;
        Self::new(x, eval.objective)
    }
}
