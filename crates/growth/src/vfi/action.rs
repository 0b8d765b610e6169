/// Control actions an observer can return after a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating and return the current snapshot.
    StopEarly,
}
