//! Quick sort trace generator.
//!
//! Lomuto partitioning with the last element of each range as the pivot.
//! Ranges are processed depth-first, left before right, from an explicit work
//! stack rather than by recursion.
//!
//! Range bounds are `isize`: the empty range left of a pivot at index 0 is
//! `(0, -1)`, and the left pointer starts one before the range.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

use super::format_values;

/// Snapshot of quick sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct QuickSortStep {
    /// The array in its current arrangement.
    pub array: Vec<Element>,

    /// Index of the pivot, while a partition is in progress or just placed.
    pub pivot_index: Option<usize>,

    /// Value of the pivot being partitioned around.
    pub pivot_value: Option<i64>,

    /// Last index of the "less than pivot" region (`i`).
    pub left_pointer: Option<isize>,

    /// Index being compared against the pivot (`j`).
    pub right_pointer: Option<usize>,

    /// Inclusive range being partitioned or recursed into.
    pub partition_range: Option<(isize, isize)>,

    /// Indices about to be swapped.
    pub swapping: Option<(usize, usize)>,

    /// Indices in their final sorted positions, ascending.
    pub sorted_indices: Vec<usize>,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for QuickSortStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of quick sort over `array`.
#[must_use]
pub fn generate(array: &[i64]) -> Trace<QuickSortStep> {
    let elements = Element::sequence("quick", array);
    let n = elements.len();

    let mut sort = QuickSort {
        recorder: Recorder::new(QuickSortStep {
            array: elements.clone(),
            pivot_index: None,
            pivot_value: None,
            left_pointer: None,
            right_pointer: None,
            partition_range: None,
            swapping: None,
            sorted_indices: Vec::new(),
            description: "Initial array for Quick Sort.".to_owned(),
        }),
        elements,
        sorted: Vec::new(),
    };

    let mut work = vec![Task::Sort {
        low: 0,
        high: len_to_isize(n) - 1,
    }];

    while let Some(task) = work.pop() {
        match task {
            Task::Sort { low, high } if low < high => {
                sort.range(
                    low,
                    high,
                    format!("Recursive call for Quick Sort on subarray from index {low} to {high}."),
                );

                // `0 <= low < high` here, so both bounds index the array.
                let pivot = sort.partition(low.unsigned_abs(), high.unsigned_abs());
                let pivot = len_to_isize(pivot);

                sort.range(
                    low,
                    pivot - 1,
                    format!(
                        "Pivot placed. Recursively sorting left subarray (indices {low} to {}).",
                        pivot - 1
                    ),
                );
                work.push(Task::SortRight { pivot, high });
                work.push(Task::Sort {
                    low,
                    high: pivot - 1,
                });
            }
            Task::Sort { low, high } if low == high => {
                let index = low.unsigned_abs();
                if let Err(at) = sort.sorted.binary_search(&index) {
                    sort.sorted.insert(at, index);
                }
                sort.range(
                    low,
                    high,
                    format!("Subarray from index {low} to {high} has 1 element, considered sorted."),
                );
            }
            Task::Sort { low, high } => {
                sort.range(
                    low,
                    high,
                    format!("Subarray from index {low} to {high} is empty, considered sorted."),
                );
            }
            Task::SortRight { pivot, high } => {
                sort.range(
                    pivot + 1,
                    high,
                    format!(
                        "Recursively sorting right subarray (indices {} to {high}).",
                        pivot + 1
                    ),
                );
                work.push(Task::Sort {
                    low: pivot + 1,
                    high,
                });
            }
        }
    }

    sort.sorted = (0..n).collect();
    let step = sort.snapshot("Quick Sort complete. Array is sorted.".to_owned());
    sort.recorder.record(step);

    let trace = sort.recorder.finish();
    log::debug!(
        "quick sort over {n} elements produced {} steps",
        trace.step_count()
    );
    trace
}

/// Pending work, popped last-in first-out.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Sort the inclusive range `low..=high`.
    Sort { low: isize, high: isize },
    /// Announce and then sort the range right of a placed pivot.
    SortRight { pivot: isize, high: isize },
}

struct QuickSort {
    elements: Vec<Element>,
    sorted: Vec<usize>,
    recorder: Recorder<QuickSortStep>,
}

impl QuickSort {
    /// Partitions `low..=high` around `elements[high]` and returns the
    /// pivot's final index.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.elements[high].value;
        let range = Some((len_to_isize(low), len_to_isize(high)));
        // One past the last index known to hold a value below the pivot.
        let mut boundary = low;

        let partitioning = |this: &Self, boundary: usize, description: String| QuickSortStep {
            pivot_index: Some(high),
            pivot_value: Some(pivot),
            left_pointer: Some(len_to_isize(boundary) - 1),
            partition_range: range,
            ..this.snapshot(description)
        };

        let step = partitioning(
            self,
            boundary,
            format!(
                "Partitioning subarray from index {low} to {high}. Pivot is {pivot} (at index {high})."
            ),
        );
        self.recorder.record(step);

        for j in low..high {
            let value = self.elements[j].value;
            let step = QuickSortStep {
                right_pointer: Some(j),
                ..partitioning(
                    self,
                    boundary,
                    format!(
                        "Comparing element {value} (at index {j}) with pivot {pivot}. \
                         Left pointer (i) is at {}.",
                        len_to_isize(boundary) - 1
                    ),
                )
            };
            self.recorder.record(step);

            if value < pivot {
                let i = boundary;
                boundary += 1;
                let step = QuickSortStep {
                    right_pointer: Some(j),
                    swapping: Some((i, j)),
                    ..partitioning(
                        self,
                        boundary,
                        format!(
                            "{value} < {pivot}. Incrementing left pointer (i) to {i}. \
                             Swapping {} and {value}.",
                            self.elements[i].value
                        ),
                    )
                };
                self.recorder.record(step);

                self.elements.swap(i, j);

                let step = QuickSortStep {
                    right_pointer: Some(j),
                    ..partitioning(
                        self,
                        boundary,
                        format!("Swap complete. Array: {}", format_values(&self.elements)),
                    )
                };
                self.recorder.record(step);
            } else {
                let step = QuickSortStep {
                    right_pointer: Some(j),
                    ..partitioning(
                        self,
                        boundary,
                        format!(
                            "{value} >= {pivot}. No swap needed for {value}. \
                             Left pointer (i) remains {}.",
                            len_to_isize(boundary) - 1
                        ),
                    )
                };
                self.recorder.record(step);
            }
        }

        let step = QuickSortStep {
            left_pointer: Some(len_to_isize(boundary)),
            swapping: Some((boundary, high)),
            ..partitioning(
                self,
                boundary,
                format!(
                    "Placing pivot {pivot}. Swapping with element {} (at index {boundary}).",
                    self.elements[boundary].value
                ),
            )
        };
        self.recorder.record(step);

        self.elements.swap(boundary, high);
        if let Err(at) = self.sorted.binary_search(&boundary) {
            self.sorted.insert(at, boundary);
        }

        let step = QuickSortStep {
            pivot_index: Some(boundary),
            partition_range: range,
            ..self.snapshot(format!(
                "Pivot {pivot} is now in its sorted position at index {boundary}."
            ))
        };
        self.recorder.record(step);

        boundary
    }

    /// Records a step that only highlights an inclusive range.
    fn range(&mut self, low: isize, high: isize, description: String) {
        let step = QuickSortStep {
            partition_range: Some((low, high)),
            ..self.snapshot(description)
        };
        self.recorder.record(step);
    }

    fn snapshot(&self, description: String) -> QuickSortStep {
        QuickSortStep {
            array: self.elements.clone(),
            pivot_index: None,
            pivot_value: None,
            left_pointer: None,
            right_pointer: None,
            partition_range: None,
            swapping: None,
            sorted_indices: self.sorted.clone(),
            description,
        }
    }
}

/// Converts an index or length to `isize`; slices never exceed `isize::MAX`.
fn len_to_isize(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}
