//! Heap sort trace generator.
//!
//! # Algorithm
//!
//! 1. **Build**: sift down every parent, from the last parent to the root,
//!    turning the whole array into a max-heap.
//! 2. **Extract**: repeatedly swap the root with the last heap element,
//!    shrink the heap boundary by one, and sift the new root down.
//!
//! Sift-down is iterative. Each round emits an "inspect subtree" step and a
//! "largest decision" step, then either a swap (announced and completed) that
//! continues at the child, or an "already largest" step that ends the round.
//!
//! Every step carries `heap_size`: indices below it are still in the heap,
//! indices at or above it form the finalized sorted suffix.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

/// The phase of heap sort a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeapPhase {
    /// The unmodified input.
    Initial,

    /// Building the max-heap.
    BuildHeap,

    /// Extracting the maximum into the sorted suffix.
    Extract,

    /// The array is sorted.
    Complete,
}

/// Snapshot of heap sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HeapSortStep {
    /// The array in its current arrangement.
    pub array: Vec<Element>,

    /// Number of leading elements that still form the heap.
    pub heap_size: usize,

    /// Which phase produced this step.
    pub phase: HeapPhase,

    /// Root of the subtree being sifted down.
    pub root_index: Option<usize>,

    /// Left child of the root, when inside the heap.
    pub left_index: Option<usize>,

    /// Right child of the root, when inside the heap.
    pub right_index: Option<usize>,

    /// Index of the largest among root and children.
    pub largest_index: Option<usize>,

    /// The pair of indices being swapped.
    pub swapping: Option<(usize, usize)>,

    /// Indices in their final sorted positions, ascending.
    pub sorted_indices: Vec<usize>,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for HeapSortStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of heap sort over `array`.
///
/// The terminal step holds the input values in non-decreasing order with
/// every index marked sorted and `heap_size == 0`.
#[must_use]
pub fn generate(array: &[i64]) -> Trace<HeapSortStep> {
    let mut sorter = HeapSorter::new(Element::sequence("heap", array));
    let n = sorter.elements.len();

    sorter.phase = HeapPhase::BuildHeap;
    sorter.emit(sorter.snapshot(n, "Building max heap...".to_owned()));
    for i in (0..n / 2).rev() {
        sorter.sift_down(n, i);
    }

    sorter.phase = HeapPhase::Extract;
    sorter.emit(sorter.snapshot(n, "Max heap built. Now extracting elements.".to_owned()));

    for i in (1..n).rev() {
        let step = HeapSortStep {
            swapping: Some((0, i)),
            ..sorter.snapshot(
                i + 1,
                format!(
                    "Extracting max element {} (root). Swapping with last element of heap {} (at index {i}).",
                    sorter.elements[0].value, sorter.elements[i].value
                ),
            )
        };
        sorter.emit(step);

        sorter.elements.swap(0, i);
        // Indices settle from the back, so the newest is always the smallest.
        sorter.sorted.insert(0, i);

        let step = HeapSortStep {
            root_index: Some(0),
            ..sorter.snapshot(
                i,
                format!(
                    "Element {} moved to sorted position {i}. Heap size reduced to {i}. Heapifying root.",
                    sorter.elements[i].value
                ),
            )
        };
        sorter.emit(step);

        sorter.sift_down(i, 0);
    }

    if n > 0 {
        sorter.sorted.insert(0, 0);
    }

    sorter.phase = HeapPhase::Complete;
    sorter.emit(sorter.snapshot(0, "Heap Sort complete. Array is sorted.".to_owned()));

    let trace = sorter.recorder.finish();
    log::debug!(
        "heap sort over {n} elements produced {} steps",
        trace.step_count()
    );
    trace
}

/// Mutable working state threaded through the sort.
struct HeapSorter {
    elements: Vec<Element>,
    sorted: Vec<usize>,
    phase: HeapPhase,
    recorder: Recorder<HeapSortStep>,
}

impl HeapSorter {
    fn new(elements: Vec<Element>) -> Self {
        let initial = HeapSortStep {
            array: elements.clone(),
            heap_size: elements.len(),
            phase: HeapPhase::Initial,
            root_index: None,
            left_index: None,
            right_index: None,
            largest_index: None,
            swapping: None,
            sorted_indices: Vec::new(),
            description: "Initial array for Heap Sort.".to_owned(),
        };

        Self {
            elements,
            sorted: Vec::new(),
            phase: HeapPhase::Initial,
            recorder: Recorder::new(initial),
        }
    }

    /// A fresh copy of the current state with no role markers set.
    fn snapshot(&self, heap_size: usize, description: String) -> HeapSortStep {
        HeapSortStep {
            array: self.elements.clone(),
            heap_size,
            phase: self.phase,
            root_index: None,
            left_index: None,
            right_index: None,
            largest_index: None,
            swapping: None,
            sorted_indices: self.sorted.clone(),
            description,
        }
    }

    fn emit(&mut self, step: HeapSortStep) {
        self.recorder.record(step);
    }

    /// Restores the max-heap property for the subtree rooted at `root`,
    /// considering only the first `heap_size` elements.
    fn sift_down(&mut self, heap_size: usize, mut root: usize) {
        loop {
            let left = 2 * root + 1;
            let right = 2 * root + 2;
            let left_index = (left < heap_size).then_some(left);
            let right_index = (right < heap_size).then_some(right);

            let step = HeapSortStep {
                root_index: Some(root),
                left_index,
                right_index,
                ..self.snapshot(
                    heap_size,
                    format!(
                        "Heapifying subtree rooted at index {root}. Heap size: {heap_size}. Comparing root ({}) with children.",
                        self.elements[root].value
                    ),
                )
            };
            self.emit(step);

            let (largest, reason) = self.largest_of(root, left_index, right_index);
            let step = HeapSortStep {
                root_index: Some(root),
                left_index,
                right_index,
                largest_index: Some(largest),
                ..self.snapshot(heap_size, reason)
            };
            self.emit(step);

            if largest == root {
                let step = HeapSortStep {
                    root_index: Some(root),
                    largest_index: Some(root),
                    ..self.snapshot(
                        heap_size,
                        format!(
                            "Root ({} at index {root}) is already the largest. Subtree is heapified.",
                            self.elements[root].value
                        ),
                    )
                };
                self.emit(step);
                return;
            }

            let step = HeapSortStep {
                root_index: Some(root),
                largest_index: Some(largest),
                swapping: Some((root, largest)),
                ..self.snapshot(
                    heap_size,
                    format!(
                        "Largest is not root. Swapping root {} (at {root}) with {} (at {largest}).",
                        self.elements[root].value, self.elements[largest].value
                    ),
                )
            };
            self.emit(step);

            self.elements.swap(root, largest);

            let step = HeapSortStep {
                root_index: Some(root),
                largest_index: Some(largest),
                ..self.snapshot(
                    heap_size,
                    format!(
                        "Swap complete. Continue heapifying the affected subtree rooted at {largest}."
                    ),
                )
            };
            self.emit(step);

            root = largest;
        }
    }

    /// Picks the largest of root and children, with a description of each
    /// comparison. Ties keep the earlier candidate.
    fn largest_of(
        &self,
        root: usize,
        left: Option<usize>,
        right: Option<usize>,
    ) -> (usize, String) {
        let mut largest = root;
        let mut sentences = Vec::new();

        for (side, child) in [("Left", left), ("Right", right)] {
            let Some(child) = child else { continue };
            let current = self.elements[largest].value;
            let value = self.elements[child].value;

            if value > current {
                sentences.push(format!(
                    "{side} child {value} (at {child}) > current largest {current}. New largest is {value}."
                ));
                largest = child;
            } else {
                sentences.push(format!(
                    "{side} child {value} (at {child}) <= current largest {current}. Largest remains {current}."
                ));
            }
        }

        if sentences.is_empty() {
            sentences.push(format!(
                "Root ({} at index {root}) has no children in the heap and is the largest.",
                self.elements[root].value
            ));
        }

        (largest, sentences.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(step: &HeapSortStep) -> Vec<i64> {
        Element::values(&step.array)
    }

    #[test]
    fn sorts_sample_array() {
        let trace = generate(&[4, 10, 3, 5, 1]);

        let terminal = trace.terminal();
        assert_eq!(values(terminal), vec![1, 3, 4, 5, 10]);
        assert_eq!(terminal.sorted_indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(terminal.heap_size, 0);
        assert_eq!(terminal.phase, HeapPhase::Complete);
    }

    #[test]
    fn initial_step_is_unmodified_input() {
        let trace = generate(&[4, 10, 3, 5, 1]);

        let initial = trace.initial();
        assert_eq!(values(initial), vec![4, 10, 3, 5, 1]);
        assert_eq!(initial.phase, HeapPhase::Initial);
        assert_eq!(initial.heap_size, 5);
        assert!(initial.sorted_indices.is_empty());
    }

    #[test]
    fn build_phase_produces_a_max_heap() {
        let trace = generate(&[4, 10, 3, 5, 1]);

        let built = trace
            .iter()
            .find(|step| step.description.starts_with("Max heap built"))
            .expect("build phase ends");
        let heap = values(built);
        for i in 0..heap.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < heap.len() {
                    assert!(heap[i] >= heap[child], "heap property at {i}");
                }
            }
        }
        assert_eq!(heap[0], 10);
    }

    #[test]
    fn sorted_suffix_dominates_the_heap() {
        let trace = generate(&[7, 2, 9, 2, 5, 11, 0, 3]);

        for step in &trace {
            let array = values(step);
            let (heap, suffix) = array.split_at(step.heap_size.min(array.len()));
            if let (Some(heap_max), Some(suffix_min)) = (heap.iter().max(), suffix.iter().min()) {
                assert!(suffix_min >= heap_max, "{}", step.description);
            }
        }
    }

    #[test]
    fn children_outside_heap_are_not_marked() {
        let trace = generate(&[3, 1, 2]);

        for step in &trace {
            for child in [step.left_index, step.right_index].into_iter().flatten() {
                assert!(child < step.heap_size);
            }
        }
    }

    #[test]
    fn swap_steps_mark_both_indices() {
        let trace = generate(&[1, 2, 3]);

        let swaps: Vec<_> = trace.iter().filter_map(|step| step.swapping).collect();
        assert!(!swaps.is_empty());
        // Building [1, 2, 3] swaps the root with its right child first.
        assert_eq!(swaps[0], (0, 2));
    }

    #[test]
    fn element_identities_are_preserved() {
        let trace = generate(&[5, 5, 1, 9]);

        let mut initial_ids: Vec<_> = trace.initial().array.iter().map(|el| el.id.clone()).collect();
        initial_ids.sort();
        for step in &trace {
            let mut ids: Vec<_> = step.array.iter().map(|el| el.id.clone()).collect();
            ids.sort();
            assert_eq!(ids, initial_ids);
        }
    }

    #[test]
    fn empty_and_single_element_arrays() {
        let empty = generate(&[]);
        assert!(values(empty.terminal()).is_empty());
        assert_eq!(empty.terminal().phase, HeapPhase::Complete);

        let single = generate(&[42]);
        assert_eq!(values(single.terminal()), vec![42]);
        assert_eq!(single.terminal().sorted_indices, vec![0]);
    }
}
