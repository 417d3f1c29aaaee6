//! Merge sort trace generator.
//!
//! Top-down merge sort, `m = l + (r - l) / 2`, left half first. Merging is
//! stable: on equal values the left run's element is taken.
//!
//! While a merge is in progress the array shows the merged prefix followed by
//! the unconsumed rest of both runs, so every element id appears exactly once
//! at every step.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

use super::format_values;

/// Snapshot of merge sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MergeSortStep {
    /// The array in its current arrangement.
    pub array: Vec<Element>,

    /// Whether a merge is in progress.
    pub is_merging: bool,

    /// `(left, mid, right)` of the merge in progress.
    pub merge_range: Option<(usize, usize, usize)>,

    /// Copy of the left run being merged.
    pub left_subarray: Vec<Element>,

    /// Copy of the right run being merged.
    pub right_subarray: Vec<Element>,

    /// Highlighted position in the left run.
    pub left_cursor: Option<usize>,

    /// Highlighted position in the right run.
    pub right_cursor: Option<usize>,

    /// Elements placed so far by the merge in progress.
    pub merged: Vec<Element>,

    /// Whether a merged range was just written back.
    pub copying_back: bool,

    /// Inclusive range in focus. `(0, -1)` for an empty array.
    pub highlight_range: Option<(isize, isize)>,

    /// Indices in their final sorted positions, ascending. Filled only on
    /// the terminal step.
    pub sorted_indices: Vec<usize>,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for MergeSortStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of merge sort over `array`.
#[must_use]
pub fn generate(array: &[i64]) -> Trace<MergeSortStep> {
    let elements = Element::sequence("merge", array);
    let n = elements.len();

    let mut sort = MergeSort {
        recorder: Recorder::new(MergeSortStep {
            array: elements.clone(),
            is_merging: false,
            merge_range: None,
            left_subarray: Vec::new(),
            right_subarray: Vec::new(),
            left_cursor: None,
            right_cursor: None,
            merged: Vec::new(),
            copying_back: false,
            highlight_range: None,
            sorted_indices: Vec::new(),
            description: "Initial array for Merge Sort.".to_owned(),
        }),
        elements,
    };

    let last = isize::try_from(n).unwrap_or(isize::MAX) - 1;
    let mut work = vec![Task::Sort { l: 0, r: last }];

    while let Some(task) = work.pop() {
        match task {
            Task::Sort { l, r } if l >= r => {
                sort.focus(
                    l,
                    r,
                    format!(
                        "Base Case Reached for range [{l}, {r}].\n\
                         Subarray has 1 or 0 elements, which is inherently sorted."
                    ),
                );
            }
            Task::Sort { l, r } => {
                let m = l + (r - l) / 2;
                sort.focus(
                    l,
                    m,
                    format!("Recursive Call: MergeSort for the left part.\nRange: indices {l} to {m}."),
                );
                work.push(Task::SortRight { l, m, r });
                work.push(Task::Sort { l, r: m });
            }
            Task::SortRight { l, m, r } => {
                sort.focus(
                    m + 1,
                    r,
                    format!("Dividing: Right part from index {} to {r}.", m + 1),
                );
                // `0 <= l <= m < r` for any range that was split.
                work.push(Task::Merge {
                    l: l.unsigned_abs(),
                    m: m.unsigned_abs(),
                    r: r.unsigned_abs(),
                });
                work.push(Task::Sort { l: m + 1, r });
            }
            Task::Merge { l, m, r } => sort.merge(l, m, r),
        }
    }

    let step = MergeSortStep {
        sorted_indices: (0..n).collect(),
        ..sort.snapshot("Merge Sort complete. Array is sorted.".to_owned())
    };
    sort.recorder.record(step);

    let trace = sort.recorder.finish();
    log::debug!(
        "merge sort over {n} elements produced {} steps",
        trace.step_count()
    );
    trace
}

/// Pending work, popped last-in first-out.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Sort the inclusive range `l..=r`.
    Sort { l: isize, r: isize },
    /// Announce and sort the right half, then merge both halves.
    SortRight { l: isize, m: isize, r: isize },
    /// Merge the sorted runs `l..=m` and `m + 1..=r`.
    Merge { l: usize, m: usize, r: usize },
}

struct MergeSort {
    elements: Vec<Element>,
    recorder: Recorder<MergeSortStep>,
}

impl MergeSort {
    fn merge(&mut self, l: usize, m: usize, r: usize) {
        let left = self.elements[l..=m].to_vec();
        let right = self.elements[m + 1..=r].to_vec();
        let mut merged: Vec<Element> = Vec::with_capacity(r - l + 1);
        let (mut i, mut j) = (0, 0);

        let merging = |this: &Self, merged: &[Element], description: String| MergeSortStep {
            is_merging: true,
            merge_range: Some((l, m, r)),
            left_subarray: left.clone(),
            right_subarray: right.clone(),
            merged: merged.to_vec(),
            highlight_range: Some(inclusive(l, r)),
            ..this.snapshot(description)
        };

        let step = merging(
            self,
            &merged,
            format!(
                "Preparing to merge subarrays.\nLeft: {} (indices {l}-{m}).\nRight: {} (indices {}-{r}).",
                format_values(&left),
                format_values(&right),
                m + 1
            ),
        );
        self.recorder.record(step);

        while i < left.len() && j < right.len() {
            let step = MergeSortStep {
                left_cursor: Some(i),
                right_cursor: Some(j),
                ..merging(
                    self,
                    &merged,
                    format!(
                        "Comparing elements:\nLeft subarray's current: {}.\n\
                         Right subarray's current: {}.",
                        left[i].value, right[j].value
                    ),
                )
            };
            self.recorder.record(step);

            let k = l + merged.len();
            let (left_cursor, right_cursor) = if left[i].value <= right[j].value {
                merged.push(left[i].clone());
                i += 1;
                (Some(i - 1), None)
            } else {
                merged.push(right[j].clone());
                j += 1;
                (None, Some(j - 1))
            };
            self.lay_out(l, &merged, &left[i..], &right[j..]);

            let step = MergeSortStep {
                left_cursor,
                right_cursor,
                highlight_range: Some(inclusive(k, k)),
                ..merging(
                    self,
                    &merged,
                    format!(
                        "{} is smaller (or equal).\n\
                         Placing it into the main array at current merge position.",
                        self.elements[k].value
                    ),
                )
            };
            self.recorder.record(step);
        }

        while i < left.len() {
            let k = l + merged.len();
            merged.push(left[i].clone());
            self.lay_out(l, &merged, &left[i + 1..], &right[j..]);
            let step = MergeSortStep {
                left_cursor: Some(i),
                highlight_range: Some(inclusive(k, k)),
                ..merging(
                    self,
                    &merged,
                    format!("Copying remaining element {} from left subarray.", left[i].value),
                )
            };
            self.recorder.record(step);
            i += 1;
        }

        while j < right.len() {
            let k = l + merged.len();
            merged.push(right[j].clone());
            self.lay_out(l, &merged, &left[i..], &right[j + 1..]);
            let step = MergeSortStep {
                right_cursor: Some(j),
                highlight_range: Some(inclusive(k, k)),
                ..merging(
                    self,
                    &merged,
                    format!("Copying remaining element {} from right subarray.", right[j].value),
                )
            };
            self.recorder.record(step);
            j += 1;
        }

        let step = MergeSortStep {
            copying_back: true,
            highlight_range: Some(inclusive(l, r)),
            ..self.snapshot(format!(
                "Finished merging for range {l}-{r}. Result: {}.",
                format_values(&self.elements[l..=r])
            ))
        };
        self.recorder.record(step);
    }

    /// Writes the merged prefix and the unconsumed runs back from index `l`.
    fn lay_out(&mut self, l: usize, merged: &[Element], left: &[Element], right: &[Element]) {
        let run = merged.iter().chain(left).chain(right).cloned();
        for (slot, element) in self.elements[l..].iter_mut().zip(run) {
            *slot = element;
        }
    }

    /// Records a step that only highlights an inclusive range.
    fn focus(&mut self, l: isize, r: isize, description: String) {
        let step = MergeSortStep {
            highlight_range: Some((l, r)),
            ..self.snapshot(description)
        };
        self.recorder.record(step);
    }

    fn snapshot(&self, description: String) -> MergeSortStep {
        MergeSortStep {
            array: self.elements.clone(),
            is_merging: false,
            merge_range: None,
            left_subarray: Vec::new(),
            right_subarray: Vec::new(),
            left_cursor: None,
            right_cursor: None,
            merged: Vec::new(),
            copying_back: false,
            highlight_range: None,
            sorted_indices: Vec::new(),
            description,
        }
    }
}

fn inclusive(l: usize, r: usize) -> (isize, isize) {
    (
        isize::try_from(l).unwrap_or(isize::MAX),
        isize::try_from(r).unwrap_or(isize::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sample_array() {
        let trace = generate(&[8, 3, 5, 1, 9, 2, 7, 4, 6]);

        let terminal = trace.terminal();
        assert_eq!(Element::values(&terminal.array), (1..=9).collect::<Vec<_>>());
        assert_eq!(terminal.sorted_indices, (0..9).collect::<Vec<_>>());
        assert_eq!(terminal.description, "Merge Sort complete. Array is sorted.");
    }

    #[test]
    fn step_order_for_two_elements() {
        let trace = generate(&[2, 1]);

        let descriptions: Vec<&str> = trace.descriptions().collect();
        assert_eq!(
            descriptions,
            vec![
                "Initial array for Merge Sort.",
                "Recursive Call: MergeSort for the left part.\nRange: indices 0 to 0.",
                "Base Case Reached for range [0, 0].\nSubarray has 1 or 0 elements, which is inherently sorted.",
                "Dividing: Right part from index 1 to 1.",
                "Base Case Reached for range [1, 1].\nSubarray has 1 or 0 elements, which is inherently sorted.",
                "Preparing to merge subarrays.\nLeft: [2] (indices 0-0).\nRight: [1] (indices 1-1).",
                "Comparing elements:\nLeft subarray's current: 2.\nRight subarray's current: 1.",
                "1 is smaller (or equal).\nPlacing it into the main array at current merge position.",
                "Copying remaining element 2 from left subarray.",
                "Finished merging for range 0-1. Result: [1, 2].",
                "Merge Sort complete. Array is sorted.",
            ]
        );
    }

    #[test]
    fn placing_keeps_every_element_once() {
        let trace = generate(&[2, 1]);

        let placed = &trace[7];
        assert_eq!(placed.highlight_range, Some((0, 0)));
        assert_eq!(placed.right_cursor, Some(0));
        assert_eq!(Element::values(&placed.array), vec![1, 2]);
        assert_eq!(placed.array[0].id, "merge-el-1-1");
        assert_eq!(placed.array[1].id, "merge-el-0-2");
    }

    #[test]
    fn equal_values_keep_input_order() {
        let trace = generate(&[3, 1, 3, 1]);

        let ids: Vec<&str> = trace.terminal().array.iter().map(|el| el.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["merge-el-1-1", "merge-el-3-1", "merge-el-0-3", "merge-el-2-3"]
        );
    }

    #[test]
    fn merged_buffer_grows_by_one_per_placement() {
        let trace = generate(&[4, 3, 2, 1]);

        for pair in trace.as_slice().windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if after.is_merging && before.is_merging && after.merge_range == before.merge_range {
                assert!(after.merged.len() - before.merged.len() <= 1);
            }
        }
        let finished = trace
            .iter()
            .filter(|step| step.copying_back)
            .map(|step| step.highlight_range)
            .collect::<Vec<_>>();
        assert_eq!(finished, vec![Some((0, 1)), Some((2, 3)), Some((0, 3))]);
    }

    #[test]
    fn empty_and_single_element_arrays() {
        let empty = generate(&[]);
        let descriptions: Vec<&str> = empty.descriptions().collect();
        assert_eq!(
            descriptions,
            vec![
                "Initial array for Merge Sort.",
                "Base Case Reached for range [0, -1].\nSubarray has 1 or 0 elements, which is inherently sorted.",
                "Merge Sort complete. Array is sorted.",
            ]
        );

        let single = generate(&[9]);
        assert_eq!(single.step_count(), 3);
        assert_eq!(single.terminal().sorted_indices, vec![0]);
    }
}
