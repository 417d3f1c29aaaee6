//! Search trace generators.
//!
//! # Generators
//!
//! - [`linear`]: Examines each index in order until the target is found
//! - [`binary`]: Narrows a `low..=high` range over an ascending array

pub mod binary;
pub mod linear;

pub use binary::BinarySearchStep;
pub use linear::LinearSearchStep;
