//! Selection sort trace generator.
//!
//! Pass `i` scans the unsorted suffix for its minimum and swaps it into
//! index `i`, growing a sorted prefix by one element per pass.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

use super::format_values;

/// Snapshot of selection sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SelectionSortStep {
    /// The array in its current arrangement.
    pub array: Vec<Element>,

    /// Index the current pass fills.
    pub current_index: usize,

    /// Index of the smallest value seen so far in this pass.
    pub min_index: usize,

    /// Index compared against the current minimum.
    pub comparing_index: Option<usize>,

    /// Indices about to be swapped.
    pub swapping: Option<(usize, usize)>,

    /// Indices that were just swapped.
    pub swapped: Option<(usize, usize)>,

    /// Indices in their final sorted positions, ascending.
    pub sorted_indices: Vec<usize>,

    /// Zero-based pass that just completed.
    pub pass_completed: Option<usize>,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for SelectionSortStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of selection sort over `array`.
#[must_use]
pub fn generate(array: &[i64]) -> Trace<SelectionSortStep> {
    let mut elements = Element::sequence("sel", array);
    let mut sorted: Vec<usize> = Vec::new();
    let n = elements.len();

    let snapshot = |elements: &[Element],
                    sorted: &[usize],
                    current: usize,
                    min: usize,
                    description: String| SelectionSortStep {
        array: elements.to_vec(),
        current_index: current,
        min_index: min,
        comparing_index: None,
        swapping: None,
        swapped: None,
        sorted_indices: sorted.to_vec(),
        pass_completed: None,
        description,
    };

    let mut recorder = Recorder::new(snapshot(
        &elements,
        &sorted,
        0,
        0,
        "Initial array for Selection Sort.".to_owned(),
    ));

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        recorder.record(snapshot(
            &elements,
            &sorted,
            i,
            min,
            format!(
                "Pass {}: Finding the minimum element in the unsorted part (from index {i}). \
                 Current minimum is {} at index {min}.",
                i + 1,
                elements[min].value
            ),
        ));

        for j in i + 1..n {
            recorder.record(SelectionSortStep {
                comparing_index: Some(j),
                ..snapshot(
                    &elements,
                    &sorted,
                    i,
                    min,
                    format!(
                        "Comparing current minimum {} (at index {min}) with {} (at index {j}).",
                        elements[min].value, elements[j].value
                    ),
                )
            });

            if elements[j].value < elements[min].value {
                let old = elements[min].value;
                min = j;
                recorder.record(SelectionSortStep {
                    comparing_index: Some(j),
                    ..snapshot(
                        &elements,
                        &sorted,
                        i,
                        min,
                        format!(
                            "New minimum found: {} (at index {min}). Old minimum was {old}.",
                            elements[min].value
                        ),
                    )
                });
            }
        }

        if min == i {
            recorder.record(snapshot(
                &elements,
                &sorted,
                i,
                min,
                format!(
                    "Element {} (at index {i}) is already in its correct sorted position \
                     for this pass. No swap needed.",
                    elements[i].value
                ),
            ));
        } else {
            recorder.record(SelectionSortStep {
                swapping: Some((i, min)),
                ..snapshot(
                    &elements,
                    &sorted,
                    i,
                    min,
                    format!(
                        "Minimum for pass {} is {} (at index {min}). Swapping with element {} \
                         (at index {i}).",
                        i + 1,
                        elements[min].value,
                        elements[i].value
                    ),
                )
            });

            elements.swap(i, min);

            recorder.record(SelectionSortStep {
                swapped: Some((i, min)),
                ..snapshot(
                    &elements,
                    &sorted,
                    i,
                    i,
                    format!(
                        "Swap complete. Element {} is now at index {i}. Array: {}.",
                        elements[i].value,
                        format_values(&elements)
                    ),
                )
            });
        }

        sorted.push(i);
        let next = if i + 1 < n - 1 { i + 1 } else { i };
        recorder.record(SelectionSortStep {
            pass_completed: Some(i),
            ..snapshot(
                &elements,
                &sorted,
                next,
                next,
                format!("Pass {} complete. Element {} is sorted.", i + 1, elements[i].value),
            )
        });
    }

    // The last element is in place once every earlier one is.
    sorted = (0..n).collect();
    let last = n.saturating_sub(1);
    recorder.record(snapshot(
        &elements,
        &sorted,
        last,
        last,
        "Selection Sort complete. All elements are sorted.".to_owned(),
    ));

    let trace = recorder.finish();
    log::debug!(
        "selection sort over {n} elements produced {} steps",
        trace.step_count()
    );
    trace
}
