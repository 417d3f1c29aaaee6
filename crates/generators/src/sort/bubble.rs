//! Bubble sort trace generator.
//!
//! Each pass compares adjacent pairs left to right and swaps out-of-order
//! neighbors, settling the largest remaining value at the end. A pass without
//! any swap proves the prefix is sorted and ends the sort early.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

use super::format_values;

/// Snapshot of bubble sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BubbleSortStep {
    /// The array in its current arrangement.
    pub array: Vec<Element>,

    /// Adjacent indices being compared.
    pub comparing: Option<(usize, usize)>,

    /// Adjacent indices about to be swapped.
    pub swapping: Option<(usize, usize)>,

    /// Adjacent indices that were just swapped.
    pub swapped: Option<(usize, usize)>,

    /// Indices in their final sorted positions, ascending.
    pub sorted_indices: Vec<usize>,

    /// Zero-based pass that just completed.
    pub pass_completed: Option<usize>,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for BubbleSortStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of bubble sort over `array`.
#[must_use]
pub fn generate(array: &[i64]) -> Trace<BubbleSortStep> {
    let mut elements = Element::sequence("bubble", array);
    let mut sorted: Vec<usize> = Vec::new();
    let n = elements.len();

    let snapshot = |elements: &[Element], sorted: &[usize], description: String| BubbleSortStep {
        array: elements.to_vec(),
        comparing: None,
        swapping: None,
        swapped: None,
        sorted_indices: sorted.to_vec(),
        pass_completed: None,
        description,
    };

    let mut recorder = Recorder::new(snapshot(
        &elements,
        &sorted,
        "Initial array for Bubble Sort.".to_owned(),
    ));

    for pass in 0..n.saturating_sub(1) {
        let mut swapped_in_pass = false;

        for j in 0..n - pass - 1 {
            let (a, b) = (elements[j].value, elements[j + 1].value);
            recorder.record(BubbleSortStep {
                comparing: Some((j, j + 1)),
                ..snapshot(
                    &elements,
                    &sorted,
                    format!(
                        "Comparing {a} (at index {j}) and {b} (at index {}).",
                        j + 1
                    ),
                )
            });

            if a > b {
                recorder.record(BubbleSortStep {
                    comparing: Some((j, j + 1)),
                    swapping: Some((j, j + 1)),
                    ..snapshot(
                        &elements,
                        &sorted,
                        format!("{a} > {b}. Swapping elements."),
                    )
                });

                elements.swap(j, j + 1);
                swapped_in_pass = true;

                recorder.record(BubbleSortStep {
                    swapped: Some((j, j + 1)),
                    ..snapshot(
                        &elements,
                        &sorted,
                        format!("Elements swapped. Array is now {}.", format_values(&elements)),
                    )
                });
            } else {
                recorder.record(BubbleSortStep {
                    comparing: Some((j, j + 1)),
                    ..snapshot(
                        &elements,
                        &sorted,
                        format!("{a} <= {b}. No swap needed."),
                    )
                });
            }
        }

        let settled = n - 1 - pass;
        sorted.insert(0, settled);
        recorder.record(BubbleSortStep {
            pass_completed: Some(pass),
            ..snapshot(
                &elements,
                &sorted,
                format!(
                    "Pass {} complete. Element {} is in its sorted position.",
                    pass + 1,
                    elements[settled].value
                ),
            )
        });

        if !swapped_in_pass {
            sorted = (0..n).collect();
            recorder.record(snapshot(
                &elements,
                &sorted,
                "Array is sorted (no swaps in the last pass). All elements are in final positions."
                    .to_owned(),
            ));
            break;
        }
    }

    if sorted.len() < n || n == 0 {
        sorted = (0..n).collect();
        recorder.record(snapshot(
            &elements,
            &sorted,
            "Sorting complete. All elements are in their final sorted positions.".to_owned(),
        ));
    }

    let trace = recorder.finish();
    log::debug!(
        "bubble sort over {n} elements produced {} steps",
        trace.step_count()
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample_array() {
        let trace = generate(&[7, 2, 8, 1, 4, 6, 3, 5]);

        let terminal = trace.terminal();
        assert_eq!(Element::values(&terminal.array), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(terminal.sorted_indices, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn already_sorted_input_exits_after_one_pass() {
        let trace = generate(&[1, 2, 3, 4]);

        let passes = trace
            .iter()
            .filter(|step| step.pass_completed.is_some())
            .count();
        assert_eq!(passes, 1);
        assert!(trace.iter().all(|step| step.swapping.is_none()));
        assert_eq!(trace.terminal().sorted_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn swap_is_announced_then_applied() {
        let trace = generate(&[2, 1]);

        let announce = trace
            .iter()
            .position(|step| step.swapping.is_some())
            .expect("a swap");
        assert_eq!(Element::values(&trace[announce].array), vec![2, 1]);
        assert_eq!(trace[announce + 1].swapped, Some((0, 1)));
        assert_eq!(Element::values(&trace[announce + 1].array), vec![1, 2]);
    }

    #[test]
    fn empty_and_single_element_arrays_end_with_completion_step() {
        let empty = generate(&[]);
        assert_eq!(empty.step_count(), 2);
        assert!(empty.terminal().sorted_indices.is_empty());

        let single = generate(&[9]);
        assert_eq!(single.step_count(), 2);
        assert_eq!(single.terminal().sorted_indices, vec![0]);
    }
}
