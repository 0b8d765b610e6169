/// An observer's answer to a Brent [`Event`](super::Event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the search and report the best point so far.
    StopEarly,

    /// Score the trial as worse than anything seen, whether or not it
    /// evaluated.
    ///
    /// The interval shrinks away from the trial and it never becomes the
    /// best point. Answering a failure event this way lets the search
    /// continue past regions where the model cannot be evaluated.
    AssumeWorse,
}
