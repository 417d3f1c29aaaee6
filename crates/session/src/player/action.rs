/// Control actions an observer can request during auto-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pause playback at the step just observed.
    Pause,
}
