//! Depth-first traversal trace generator.
//!
//! The traversal runs on an explicit stack of frames, one per node whose
//! neighbors are still being explored. A frame remembers how far through its
//! neighbor list it has advanced, so popping back to it resumes exactly where
//! the descent left off.
//!
//! Steps leaving a finished subtree carry `is_backtracking`, which lets a
//! renderer tell ascent from descent.

use std::collections::HashSet;

use algotrace_core::{Recorder, Trace, TraceStep};

use super::{Adjacency, Edge, Node, Predecessors, empty_predecessors, path_to};

/// Snapshot of a depth-first traversal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DfsStep {
    /// What happened at this step.
    pub description: String,

    /// The node the traversal started from.
    pub start_node: String,

    /// Nodes on the active descent path, outermost first.
    pub stack: Vec<String>,

    /// Visited node ids, in discovery order.
    pub visited: Vec<String>,

    /// Node currently being processed.
    pub current_node: Option<String>,

    /// Neighbor being checked, or the child just returned from.
    pub current_neighbor: Option<String>,

    /// Discovery predecessor of every node.
    pub predecessors: Predecessors,

    /// Whether this step returns from a completed subtree.
    pub is_backtracking: bool,

    /// Graph nodes, for rendering.
    pub nodes: Vec<Node>,

    /// Graph edges, for rendering.
    pub edges: Vec<Edge>,
}

impl DfsStep {
    /// Returns the discovery path from the start node to `target`, as known
    /// at this step.
    #[must_use]
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        path_to(&self.predecessors, &self.start_node, target)
    }
}

impl TraceStep for DfsStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of a depth-first traversal from `start`.
///
/// Neighbors are explored in edge-list order. If `start` is not among
/// `nodes`, the trace is a single step and no traversal occurs.
#[must_use]
pub fn generate(nodes: &[Node], edges: &[Edge], start: &str) -> Trace<DfsStep> {
    let adjacency = Adjacency::new(nodes, edges);
    let mut dfs = Dfs::new(nodes, edges, start);

    if !adjacency.contains(start) {
        log::trace!("dfs start node {start:?} is not in the graph");
        return Recorder::new(dfs.snapshot(format!(
            "Start node {start} is not in the graph. Nothing to traverse."
        )))
        .finish();
    }

    let mut recorder = Recorder::new(dfs.snapshot(format!(
        "Starting DFS from node {start}. Initializing visited set."
    )));

    dfs.enter(start, None);
    recorder.record(dfs.at(start, None, format!(
        "Visiting node {start}. Added to visited set and recursion stack."
    )));

    while let Some(frame) = dfs.frames.last_mut() {
        let u = frame.node;

        if let Some(&v) = adjacency.neighbors(u).get(frame.next) {
            frame.next += 1;

            recorder.record(dfs.at(u, Some(v), format!("Checking neighbor {v} of node {u}.")));

            if dfs.seen.contains(v) {
                recorder.record(dfs.at(
                    u,
                    Some(v),
                    format!("Neighbor {v} already visited. Skipping."),
                ));
            } else {
                recorder.record(dfs.at(
                    u,
                    Some(v),
                    format!("Neighbor {v} not visited. Recursively calling DFS on {v}."),
                ));
                dfs.enter(v, Some(u));
                recorder.record(dfs.at(v, None, format!(
                    "Visiting node {v}. Added to visited set and recursion stack."
                )));
            }
            continue;
        }

        dfs.frames.pop();
        recorder.record(DfsStep {
            is_backtracking: true,
            ..dfs.at(u, None, format!(
                "Finished exploring neighbors of {u}. Popping {u} from recursion stack."
            ))
        });

        if let Some(parent) = dfs.frames.last().map(|frame| frame.node) {
            recorder.record(DfsStep {
                is_backtracking: true,
                ..dfs.at(parent, Some(u), format!(
                    "Returned from DFS({u}). Backtracking to {parent}."
                ))
            });
        }
    }

    recorder.record(dfs.snapshot("DFS complete.".to_owned()));

    let trace = recorder.finish();
    log::debug!(
        "dfs over {} nodes and {} edges visited {} nodes in {} steps",
        nodes.len(),
        edges.len(),
        trace.terminal().visited.len(),
        trace.step_count()
    );
    trace
}

/// A node whose neighbor list is partly explored.
struct Frame<'a> {
    node: &'a str,
    next: usize,
}

/// Mutable traversal state threaded through the loop.
struct Dfs<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
    start: &'a str,
    frames: Vec<Frame<'a>>,
    seen: HashSet<&'a str>,
    visited: Vec<String>,
    predecessors: Predecessors,
}

impl<'a> Dfs<'a> {
    fn new(nodes: &'a [Node], edges: &'a [Edge], start: &'a str) -> Self {
        Self {
            nodes,
            edges,
            start,
            frames: Vec::new(),
            seen: HashSet::new(),
            visited: Vec::new(),
            predecessors: empty_predecessors(nodes),
        }
    }

    /// Marks `node` visited and pushes its frame.
    fn enter(&mut self, node: &'a str, parent: Option<&'a str>) {
        self.seen.insert(node);
        self.visited.push(node.to_owned());
        self.frames.push(Frame { node, next: 0 });
        if let Some(parent) = parent {
            self.predecessors
                .insert(node.to_owned(), Some(parent.to_owned()));
        }
    }

    /// A snapshot focused on `node` and, optionally, one of its neighbors.
    fn at(&self, node: &str, neighbor: Option<&str>, description: String) -> DfsStep {
        DfsStep {
            current_node: Some(node.to_owned()),
            current_neighbor: neighbor.map(str::to_owned),
            ..self.snapshot(description)
        }
    }

    /// A fresh copy of the current state with no focus markers set.
    fn snapshot(&self, description: String) -> DfsStep {
        DfsStep {
            description,
            start_node: self.start.to_owned(),
            stack: self.frames.iter().map(|frame| frame.node.to_owned()).collect(),
            visited: self.visited.clone(),
            current_node: None,
            current_neighbor: None,
            predecessors: self.predecessors.clone(),
            is_backtracking: false,
            nodes: self.nodes.to_vec(),
            edges: self.edges.to_vec(),
        }
    }
}
