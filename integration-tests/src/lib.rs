//! Shared helpers for the algotrace integration tests.
//!
//! The helpers compute expected results independently of the generators, so
//! tests compare traces against a second opinion rather than themselves.

use std::collections::{BTreeSet, VecDeque};

use algotrace_generators::{
    graph::{Edge, Node},
    memo::KnapsackItem,
};

/// Builds nodes `n0..n{count}` laid out on a line.
#[must_use]
pub fn numbered_nodes(count: usize) -> Vec<Node> {
    (0..count)
        .map(|i| Node::new(format!("n{i}"), i as f64 * 10.0, 0.0))
        .collect()
}

/// Builds directed edges between numbered nodes from index pairs.
#[must_use]
pub fn numbered_edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (from, to))| Edge::new(format!("e{i}"), format!("n{from}"), format!("n{to}")))
        .collect()
}

/// Node ids reachable from `start` along directed edges, `start` included.
///
/// Edges naming undeclared nodes are ignored; an undeclared `start` reaches
/// nothing.
#[must_use]
pub fn reachable(nodes: &[Node], edges: &[Edge], start: &str) -> BTreeSet<String> {
    let declared: BTreeSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let mut seen = BTreeSet::new();
    if !declared.contains(start) {
        return seen;
    }

    let mut pending = VecDeque::from([start.to_owned()]);
    seen.insert(start.to_owned());
    while let Some(u) = pending.pop_front() {
        for edge in edges.iter().filter(|edge| edge.from == u) {
            if declared.contains(edge.to.as_str()) && seen.insert(edge.to.clone()) {
                pending.push_back(edge.to.clone());
            }
        }
    }
    seen
}

/// The `n`th Fibonacci number, computed iteratively.
#[must_use]
pub fn fibonacci(n: u32) -> u64 {
    let (mut a, mut b) = (0_u64, 1_u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

/// Best 0/1 knapsack value by trying every subset of `items`.
#[must_use]
pub fn knapsack_best(items: &[KnapsackItem], capacity: usize) -> u64 {
    (0_u32..1 << items.len())
        .filter_map(|mask| {
            let chosen = items.iter().enumerate().filter(|(i, _)| mask & (1 << i) != 0);
            let (weight, value) = chosen.fold((0, 0), |(w, v), (_, item)| {
                (w + item.weight, v + item.value)
            });
            (weight <= capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}
