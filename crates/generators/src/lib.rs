//! Step-trace generators for canonical algorithms.
//!
//! Each generator is a pure function of its inputs that simulates an
//! algorithm and returns a [`Trace`] of immutable snapshots, one per decision
//! point, instead of only the final result. Generation is eager: the whole
//! trace is computed before the call returns.
//!
//! # Modules
//!
//! - [`search`]: Linear scan and binary search
//! - [`sort`]: Heap, bubble, insertion, selection, quick and merge sort
//! - [`graph`]: Breadth-first and depth-first traversal of a directed graph
//! - [`memo`]: Top-down Fibonacci with a visible result cache, 0/1 knapsack
//! - [`greedy`]: Activity selection by earliest finish time
//!
//! # Preconditions
//!
//! Generators trust their inputs. A precondition violation, such as an
//! unsorted array passed to binary search or a start node missing from the
//! graph, produces a well-defined trace rather than an error.
//!
//! [`Trace`]: algotrace_core::Trace

pub mod graph;
pub mod greedy;
pub mod memo;
pub mod search;
pub mod sort;
