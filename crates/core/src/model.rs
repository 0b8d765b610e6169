/// A deterministic map from a typed input to a typed output.
///
/// Calling a model twice with the same input must give the same result;
/// repeated solves with one configuration reproduce the same value function
/// only if this holds.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns the model's own error when the input is outside its domain.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input of one model call and the output it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
