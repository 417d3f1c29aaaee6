use std::ops::Index;

/// A self-contained snapshot of algorithm state at one instant.
///
/// Every step owns its data, so no two steps share a mutable container and
/// changing one step can never alter another.
pub trait TraceStep {
    /// Human-readable explanation of what happened at this step.
    fn description(&self) -> &str;
}

/// An ordered, non-empty sequence of steps.
///
/// Index 0 is the unmodified input and the last index is the completed
/// computation. A trace is only produced by [`Recorder::finish`], which
/// guarantees at least one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    /// Returns the first step, before any work was done.
    #[must_use]
    pub fn initial(&self) -> &S {
        &self.steps[0]
    }

    /// Returns the last step, after the computation completed.
    #[must_use]
    pub fn terminal(&self) -> &S {
        &self.steps[self.steps.len() - 1]
    }

    /// Returns the step at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// Returns the number of steps. Always at least one.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the index of the terminal step.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Returns the steps as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Consumes the trace and returns its steps.
    #[must_use]
    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S: TraceStep> Trace<S> {
    /// Iterates over the step descriptions in order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(TraceStep::description)
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<S> IntoIterator for Trace<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Append-only builder for a [`Trace`].
///
/// The initial step is required up front, so every finished trace is
/// non-empty.
#[derive(Debug, Clone)]
pub struct Recorder<S> {
    steps: Vec<S>,
}

impl<S> Recorder<S> {
    /// Starts a recording with the step that shows the unmodified input.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            steps: vec![initial],
        }
    }

    /// Appends a step.
    pub fn record(&mut self, step: S) {
        self.steps.push(step);
    }

    /// Returns the most recently recorded step.
    #[must_use]
    pub fn last(&self) -> &S {
        &self.steps[self.steps.len() - 1]
    }

    /// Returns the number of steps recorded so far.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Finishes the recording.
    #[must_use]
    pub fn finish(self) -> Trace<S> {
        Trace { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Test fixtures ---

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        count: Vec<u32>,
        description: String,
    }

    impl Counter {
        fn new(count: &[u32], description: &str) -> Self {
            Self {
                count: count.to_vec(),
                description: description.to_owned(),
            }
        }
    }

    impl TraceStep for Counter {
        fn description(&self) -> &str {
            &self.description
        }
    }

    fn three_steps() -> Trace<Counter> {
        let mut recorder = Recorder::new(Counter::new(&[], "start"));
        recorder.record(Counter::new(&[1], "one"));
        recorder.record(Counter::new(&[1, 2], "two"));
        recorder.finish()
    }

    // --- Tests ---

    #[test]
    fn single_step_trace_is_both_initial_and_terminal() {
        let trace = Recorder::new(Counter::new(&[], "only")).finish();

        assert_eq!(trace.step_count(), 1);
        assert_eq!(trace.last_index(), 0);
        assert_eq!(trace.initial(), trace.terminal());
    }

    #[test]
    fn steps_keep_recording_order() {
        let trace = three_steps();

        assert_eq!(trace.initial().description, "start");
        assert_eq!(trace.terminal().description, "two");
        assert_eq!(trace[1].count, vec![1]);
        assert_eq!(
            trace.descriptions().collect::<Vec<_>>(),
            vec!["start", "one", "two"]
        );
    }

    #[test]
    fn get_out_of_range_is_none() {
        let trace = three_steps();

        assert!(trace.get(2).is_some());
        assert!(trace.get(3).is_none());
    }

    #[test]
    fn mutating_an_extracted_step_leaves_the_trace_untouched() {
        let trace = three_steps();

        let mut steps = trace.clone().into_steps();
        steps[2].count.push(99);

        assert_eq!(trace[2].count, vec![1, 2]);
    }

    #[test]
    fn recorder_tracks_last_step() {
        let mut recorder = Recorder::new(Counter::new(&[], "start"));
        assert_eq!(recorder.last().description, "start");

        recorder.record(Counter::new(&[7], "next"));
        assert_eq!(recorder.last().count, vec![7]);
        assert_eq!(recorder.step_count(), 2);
    }
}
