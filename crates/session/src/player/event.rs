/// Event emitted by [`Player::run`] for each step reached.
///
/// [`Player::run`]: super::Player::run
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// Index of the step within the trace.
    pub index: usize,

    /// Copy of the step at `index`.
    pub step: S,
}
