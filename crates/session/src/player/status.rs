/// Indicates how auto-play ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the last step.
    Finished,

    /// Paused due to an observer action.
    PausedByObserver,
}
