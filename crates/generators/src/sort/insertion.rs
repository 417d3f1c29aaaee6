//! Insertion sort trace generator.
//!
//! The sorted prefix grows by one element per pass. The key sinks into place
//! through adjacent swaps, so every element keeps its identity at every step
//! (no element is ever shown twice while a gap is open).

use algotrace_core::{Element, Recorder, Trace, TraceStep};

/// Snapshot of insertion sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct InsertionSortStep {
    /// The array in its current arrangement.
    pub array: Vec<Element>,

    /// Current position of the key being inserted.
    pub key_index: Option<usize>,

    /// Index of the sorted element compared against the key.
    pub compare_index: Option<usize>,

    /// Index where the key was just inserted.
    pub just_inserted_index: Option<usize>,

    /// Whether a larger element is being shifted right past the key.
    pub is_shifting: bool,

    /// Length of the sorted prefix.
    pub sorted_len: usize,

    /// Pass that just completed.
    pub pass_completed: Option<usize>,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for InsertionSortStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of insertion sort over `array`.
#[must_use]
pub fn generate(array: &[i64]) -> Trace<InsertionSortStep> {
    let mut elements = Element::sequence("ins", array);
    let n = elements.len();

    let snapshot = |elements: &[Element], sorted_len: usize, description: String| {
        InsertionSortStep {
            array: elements.to_vec(),
            key_index: None,
            compare_index: None,
            just_inserted_index: None,
            is_shifting: false,
            sorted_len,
            pass_completed: None,
            description,
        }
    };

    let mut recorder = Recorder::new(snapshot(
        &elements,
        n.min(1),
        "Initial array. The first element is considered sorted.".to_owned(),
    ));

    for i in 1..n {
        let key = elements[i].value;
        recorder.record(InsertionSortStep {
            key_index: Some(i),
            ..snapshot(
                &elements,
                i,
                format!(
                    "Pass {i}: Picking element {key} (at index {i}) as the key to insert into the sorted portion."
                ),
            )
        });

        let mut position = i;
        while position > 0 && elements[position - 1].value > key {
            let j = position - 1;
            let larger = elements[j].value;

            recorder.record(InsertionSortStep {
                key_index: Some(position),
                compare_index: Some(j),
                is_shifting: true,
                ..snapshot(
                    &elements,
                    i,
                    format!(
                        "Comparing key {key} with {larger} (at index {j}). Since {larger} > {key}, shift {larger} to the right."
                    ),
                )
            });

            elements.swap(j, position);

            recorder.record(InsertionSortStep {
                key_index: Some(j),
                compare_index: Some(position),
                is_shifting: true,
                ..snapshot(
                    &elements,
                    i,
                    format!("Element {larger} shifted to index {position}. Key {key} moves to index {j}."),
                )
            });

            position = j;
        }

        recorder.record(InsertionSortStep {
            just_inserted_index: Some(position),
            pass_completed: Some(i),
            ..snapshot(
                &elements,
                i + 1,
                format!(
                    "Key {key} inserted at index {position}. Sorted portion now extends to index {i}."
                ),
            )
        });
    }

    recorder.record(snapshot(
        &elements,
        n,
        "Insertion Sort complete. All elements are sorted.".to_owned(),
    ));

    let trace = recorder.finish();
    log::debug!(
        "insertion sort over {n} elements produced {} steps",
        trace.step_count()
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample_array() {
        let trace = generate(&[5, 3, 9, 1, 4, 6, 2, 8, 7]);

        let terminal = trace.terminal();
        assert_eq!(
            Element::values(&terminal.array),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
        assert_eq!(terminal.sorted_len, 9);
    }

    #[test]
    fn prefix_is_sorted_after_every_pass() {
        let trace = generate(&[4, 3, 2, 10, 12, 1, 5, 6]);

        for step in trace.iter().filter(|step| step.pass_completed.is_some()) {
            let values = Element::values(&step.array);
            let prefix = &values[..step.sorted_len];
            assert!(prefix.windows(2).all(|w| w[0] <= w[1]), "{}", step.description);
        }
    }

    #[test]
    fn shifting_never_duplicates_an_element() {
        let trace = generate(&[3, 2, 1]);

        for step in &trace {
            let mut ids: Vec<_> = step.array.iter().map(|el| el.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 3);
        }
    }

    #[test]
    fn key_index_follows_the_key() {
        let trace = generate(&[2, 1]);

        // initial, pick key at 1, compare, shifted (key now at 0), inserted, complete
        assert_eq!(trace.step_count(), 6);
        assert_eq!(trace[1].key_index, Some(1));
        assert_eq!(trace[3].key_index, Some(0));
        assert_eq!(trace[3].array[0].id, "ins-el-1-1");
        assert_eq!(trace[4].just_inserted_index, Some(0));
    }

    #[test]
    fn empty_array_has_initial_and_completion_steps() {
        let trace = generate(&[]);

        assert_eq!(trace.step_count(), 2);
        assert_eq!(trace.initial().sorted_len, 0);
        assert_eq!(trace.terminal().sorted_len, 0);
    }
}
