//! Graph traversal trace generators.
//!
//! Graphs are given as a node list and a directed edge list. Each traversal
//! derives an adjacency projection once per call; only the node and edge
//! lists appear in steps, for rendering.
//!
//! Edges are directed. An undirected traversal needs the caller to supply the
//! reciprocal edges. Neighbors are visited in edge-list order, and an edge
//! whose endpoint is not a declared node is ignored.
//!
//! # Generators
//!
//! - [`bfs`]: Breadth-first traversal with an explicit FIFO queue
//! - [`dfs`]: Depth-first traversal with an explicit frame stack

pub mod bfs;
pub mod dfs;

pub use bfs::BfsStep;
pub use dfs::DfsStep;

use std::collections::{BTreeMap, HashMap};

/// A graph node with a 2-D layout position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Stable identifier referenced by edges.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Horizontal layout position.
    pub x: f64,

    /// Vertical layout position.
    pub y: f64,
}

impl Node {
    /// Creates a node whose label equals its id.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            x,
            y,
        }
    }
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Unique edge identifier.
    pub id: String,

    /// Source node id.
    pub from: String,

    /// Target node id.
    pub to: String,
}

impl Edge {
    /// Creates a directed edge.
    #[must_use]
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Predecessor map: each node id maps to the node it was discovered from.
///
/// Every declared node has an entry; undiscovered nodes and the start node
/// map to `None`.
pub type Predecessors = BTreeMap<String, Option<String>>;

/// Reconstructs the discovery path from `start` to `target`.
///
/// Returns `None` when `target` was never discovered from `start`.
#[must_use]
pub fn path_to(predecessors: &Predecessors, start: &str, target: &str) -> Option<Vec<String>> {
    if !predecessors.contains_key(start) || !predecessors.contains_key(target) {
        return None;
    }

    let mut path = vec![target.to_owned()];
    let mut current = target;

    // A path never revisits a node, which bounds the walk.
    for _ in 0..predecessors.len() {
        if current == start {
            path.reverse();
            return Some(path);
        }
        let parent = predecessors.get(current)?.as_deref()?;
        path.push(parent.to_owned());
        current = parent;
    }

    None
}

/// Directed adjacency projection derived from a node and edge list.
struct Adjacency<'a> {
    neighbors: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Adjacency<'a> {
    fn new(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut neighbors: HashMap<&str, Vec<&str>> = nodes
            .iter()
            .map(|node| (node.id.as_str(), Vec::new()))
            .collect();

        for edge in edges {
            if !neighbors.contains_key(edge.to.as_str()) {
                continue;
            }
            if let Some(list) = neighbors.get_mut(edge.from.as_str()) {
                list.push(edge.to.as_str());
            }
        }

        Self { neighbors }
    }

    fn contains(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }

    fn neighbors(&self, id: &str) -> &[&'a str] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Predecessor map with an empty entry for every node.
fn empty_predecessors(nodes: &[Node]) -> Predecessors {
    nodes.iter().map(|node| (node.id.clone(), None)).collect()
}
