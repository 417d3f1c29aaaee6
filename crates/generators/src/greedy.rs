//! Greedy selection trace generators.
//!
//! # Generators
//!
//! - [`activity`]: Interval scheduling by earliest finish time

pub mod activity;

pub use activity::{Activity, ActivitySelectionStep};
