//! Memoization and tabulation trace generators.
//!
//! # Generators
//!
//! - [`fibonacci`]: Top-down Fibonacci with a cache shown at every step
//! - [`knapsack`]: Bottom-up 0/1 knapsack table with backtracking

pub mod fibonacci;
pub mod knapsack;

pub use fibonacci::FibonacciStep;
pub use knapsack::{KnapsackItem, KnapsackPhase, KnapsackStep};
