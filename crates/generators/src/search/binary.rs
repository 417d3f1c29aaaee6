//! Binary search trace generator.
//!
//! # Algorithm
//!
//! Standard `low`/`high`/`mid` narrowing over an ascending array:
//!
//! - `array[mid] == target` ends the search with `found_index = mid`
//! - `array[mid] < target` moves `low` to `mid + 1`
//! - `array[mid] > target` moves `high` to `mid - 1`
//!
//! The search reports not-found once `low > high`.
//!
//! # Preconditions
//!
//! The array must already be sorted ascending. This is not verified; an
//! unsorted array yields whatever index the narrowing happens to reach.

use algotrace_core::{Element, Recorder, Trace, TraceStep};

/// Snapshot of a binary search.
///
/// `low` and `high` are signed because `high` drops to `-1` when the range
/// empties at the left edge (and for an empty array).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BinarySearchStep {
    /// The sorted array being searched.
    pub array: Vec<Element>,

    /// The value being searched for.
    pub target: i64,

    /// Lower bound of the remaining range (inclusive).
    pub low: isize,

    /// Upper bound of the remaining range (inclusive).
    pub high: isize,

    /// Midpoint inspected in the current iteration.
    pub mid: Option<usize>,

    /// Index where the target was found.
    pub found_index: Option<usize>,

    /// Whether the search has finished (found or exhausted).
    pub search_complete: bool,

    /// What happened at this step.
    pub description: String,
}

impl TraceStep for BinarySearchStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of a binary search for `target` in `sorted`.
///
/// Each iteration emits a step exposing `low`, `high`, and `mid`, followed by
/// either the found step or a narrowing step. Narrowing steps show the bound
/// as it was before the update; the description names the new bound.
#[must_use]
pub fn generate(sorted: &[i64], target: i64) -> Trace<BinarySearchStep> {
    let elements = Element::sequence("bs", sorted);

    let step = |low: isize, high: isize, description: String| BinarySearchStep {
        array: elements.clone(),
        target,
        low,
        high,
        mid: None,
        found_index: None,
        search_complete: false,
        description,
    };

    let mut low: isize = 0;
    let mut high = isize::try_from(elements.len()).unwrap_or(isize::MAX) - 1;

    let mut recorder = Recorder::new(step(
        low,
        high,
        format!("Initial state for Binary Search. Target: {target}. Range: [{low}, {high}]."),
    ));

    let mut found = None;
    while low <= high {
        // low >= 0 throughout, so the midpoint is a valid index.
        let mid_signed = low + (high - low) / 2;
        let mid = mid_signed.unsigned_abs();
        let value = elements[mid].value;

        recorder.record(BinarySearchStep {
            mid: Some(mid),
            ..step(
                low,
                high,
                format!(
                    "Calculating middle: mid = floor(({low} + {high}) / 2) = {mid}. Value at mid ({value})."
                ),
            )
        });

        if value == target {
            found = Some(mid);
            recorder.record(BinarySearchStep {
                mid: Some(mid),
                found_index: Some(mid),
                search_complete: true,
                ..step(low, high, format!("Target {target} found at index {mid}!"))
            });
            break;
        }

        if value < target {
            let old_low = low;
            low = mid_signed + 1;
            recorder.record(BinarySearchStep {
                mid: Some(mid),
                ..step(
                    old_low,
                    high,
                    format!(
                        "{value} < {target}. Target might be in the right half. New low: {low}."
                    ),
                )
            });
        } else {
            let old_high = high;
            high = mid_signed - 1;
            recorder.record(BinarySearchStep {
                mid: Some(mid),
                ..step(
                    low,
                    old_high,
                    format!(
                        "{value} > {target}. Target might be in the left half. New high: {high}."
                    ),
                )
            });
        }

        if low > high {
            recorder.record(BinarySearchStep {
                search_complete: true,
                ..step(
                    low,
                    high,
                    format!(
                        "Low ({low}) is now greater than High ({high}). Target {target} not found."
                    ),
                )
            });
        }
    }

    if found.is_none() && !recorder.last().search_complete {
        recorder.record(BinarySearchStep {
            search_complete: true,
            ..step(
                low,
                high,
                format!("Target {target} not found in the array. Search range exhausted."),
            )
        });
    }

    let trace = recorder.finish();
    log::debug!(
        "binary search over {} elements produced {} steps",
        sorted.len(),
        trace.step_count()
    );
    trace
}
