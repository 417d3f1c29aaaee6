//! Sort trace generators.
//!
//! Every sort works on [`Element`]s, so values keep their identities while
//! they move. Elements are only ever moved, never duplicated or dropped, and
//! the terminal step marks every index as sorted.
//!
//! # Generators
//!
//! - [`heap`]: Build a max-heap, then repeatedly extract the root
//! - [`bubble`]: Adjacent compare-and-swap passes with early exit
//! - [`insertion`]: Grow a sorted prefix by sinking each key into place
//! - [`selection`]: Swap the minimum of the unsorted suffix into place
//! - [`quick`]: Lomuto partitioning around the last element of each range
//! - [`merge`]: Top-down, stable merge of sorted halves
//!
//! [`Element`]: algotrace_core::Element

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSortStep;
pub use heap::{HeapPhase, HeapSortStep};
pub use insertion::InsertionSortStep;
pub use merge::MergeSortStep;
pub use quick::QuickSortStep;
pub use selection::SelectionSortStep;

/// Formats element values as `"[a, b, c]"` for descriptions.
fn format_values(elements: &[algotrace_core::Element]) -> String {
    let values: Vec<String> = elements.iter().map(|el| el.value.to_string()).collect();
    format!("[{}]", values.join(", "))
}
