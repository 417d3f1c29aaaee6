//! Linear search trace generator.
//!
//! Emits the initial array, one step per examined index, and a terminal step
//! that either marks the first matching index or reports that the target is
//! absent.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

/// Snapshot of a linear search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LinearSearchStep {
    /// The array being searched.
    pub array: Vec<Element>,

    /// The value being searched for.
    pub target: i64,

    /// Index currently being compared with the target.
    pub current_index: Option<usize>,

    /// Index where the target was found.
    pub found_index: Option<usize>,

    /// Whether the search has finished (found or exhausted).
    pub search_complete: bool,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for LinearSearchStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of a linear search for `target` in `array`.
///
/// Duplicates resolve to the first occurrence. An empty array yields the
/// initial step followed by a not-found step.
#[must_use]
pub fn generate(array: &[i64], target: i64) -> Trace<LinearSearchStep> {
    let elements = Element::sequence("ls", array);

    let step = |description: String| LinearSearchStep {
        array: elements.clone(),
        target,
        current_index: None,
        found_index: None,
        search_complete: false,
        description,
    };

    let mut recorder = Recorder::new(step(format!(
        "Initial array for Linear Search. Target: {target}."
    )));

    let mut found = None;
    for (i, element) in elements.iter().enumerate() {
        recorder.record(LinearSearchStep {
            current_index: Some(i),
            ..step(format!(
                "Comparing target {target} with element {} at index {i}.",
                element.value
            ))
        });

        if element.value == target {
            found = Some(i);
            break;
        }
    }

    match found {
        Some(i) => recorder.record(LinearSearchStep {
            current_index: Some(i),
            found_index: Some(i),
            search_complete: true,
            ..step(format!("Target {target} found at index {i}!"))
        }),
        None => recorder.record(LinearSearchStep {
            search_complete: true,
            ..step(format!("Target {target} not found in the array."))
        }),
    }

    let trace = recorder.finish();
    log::debug!(
        "linear search over {} elements produced {} steps",
        array.len(),
        trace.step_count()
    );
    trace
}
