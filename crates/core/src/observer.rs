/// Watches trace playback one step at a time and may ask it to pause.
///
/// A player hands the observer an event for every step it reaches, in order,
/// before moving on. Returning `Some(action)` asks the player to act on the
/// step just seen (for example, pause on it), and `None` lets playback
/// advance to the next step.
///
/// Closures automatically implement `Observer`, and `()` is an observer that
/// watches every step without ever acting.
pub trait Observer<E, A> {
    /// Sees the step event `event` and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Any `FnMut(&E) -> Option<A>` closure observes steps.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Plays through without ever acting.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
