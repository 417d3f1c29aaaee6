//! Breadth-first traversal trace generator.
//!
//! # Algorithm
//!
//! An explicit FIFO queue drives the traversal. A node is marked visited at
//! the moment it is enqueued, not when it is dequeued, so no node enters the
//! queue twice. Each discovery records its predecessor and its hop distance
//! from the start.
//!
//! Steps, in order: initial state, start enqueued, then per dequeued node a
//! "dequeued" step, a "checking" step plus an "enqueued" or "skipped" step per
//! neighbor, and a "finished" step. The terminal step reports completion.

use std::collections::{BTreeMap, HashSet, VecDeque};

use algotrace_core::{Recorder, Trace, TraceStep};

use super::{Adjacency, Edge, Node, Predecessors, empty_predecessors, path_to};

/// Snapshot of a breadth-first traversal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BfsStep {
    /// What happened at this step.
    pub description: String,

    /// The node the traversal started from.
    pub start_node: String,

    /// Node ids waiting in the queue, front first.
    pub queue: Vec<String>,

    /// Visited node ids, in discovery order.
    pub visited: Vec<String>,

    /// Node currently being processed.
    pub current_node: Option<String>,

    /// Neighbor of the current node being checked.
    pub current_neighbor: Option<String>,

    /// Discovery predecessor of every node.
    pub predecessors: Predecessors,

    /// Hop distance from the start for every discovered node.
    pub levels: BTreeMap<String, usize>,

    /// Graph nodes, for rendering.
    pub nodes: Vec<Node>,

    /// Graph edges, for rendering.
    pub edges: Vec<Edge>,
}

impl BfsStep {
    /// Returns the discovery path from the start node to `target`, as known
    /// at this step.
    #[must_use]
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        path_to(&self.predecessors, &self.start_node, target)
    }
}

impl TraceStep for BfsStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of a breadth-first traversal from `start`.
///
/// If `start` is not among `nodes`, the trace is a single step and no
/// traversal occurs. Nodes unreachable from `start` are never visited.
#[must_use]
pub fn generate(nodes: &[Node], edges: &[Edge], start: &str) -> Trace<BfsStep> {
    let adjacency = Adjacency::new(nodes, edges);
    let mut bfs = Bfs::new(nodes, edges, start);

    if !adjacency.contains(start) {
        log::trace!("bfs start node {start:?} is not in the graph");
        return Recorder::new(bfs.snapshot(format!(
            "Start node {start} is not in the graph. Nothing to traverse."
        )))
        .finish();
    }

    let mut recorder = Recorder::new(bfs.snapshot(format!(
        "Starting BFS from node {start}. Initializing queue and visited set."
    )));

    bfs.discover(start, None);
    recorder.record(bfs.snapshot(format!(
        "Added start node {start} to queue. Marked as visited."
    )));

    while let Some(u) = bfs.queue.pop_front() {
        recorder.record(BfsStep {
            current_node: Some(u.to_owned()),
            ..bfs.snapshot(format!("Dequeued node {u}. Processing its neighbors."))
        });

        for &v in adjacency.neighbors(u) {
            let focus = |step: BfsStep| BfsStep {
                current_node: Some(u.to_owned()),
                current_neighbor: Some(v.to_owned()),
                ..step
            };

            recorder.record(focus(
                bfs.snapshot(format!("Checking neighbor {v} of node {u}.")),
            ));

            if bfs.seen.contains(v) {
                recorder.record(focus(
                    bfs.snapshot(format!("Neighbor {v} already visited. Skipping.")),
                ));
            } else {
                bfs.discover(v, Some(u));
                recorder.record(focus(bfs.snapshot(format!(
                    "Neighbor {v} not visited. Added to queue and marked as visited. Path to {v} via {u}."
                ))));
            }
        }

        recorder.record(BfsStep {
            current_node: Some(u.to_owned()),
            ..bfs.snapshot(format!("Finished processing neighbors of node {u}."))
        });
    }

    recorder.record(bfs.snapshot("BFS complete. Queue is empty.".to_owned()));

    let trace = recorder.finish();
    log::debug!(
        "bfs over {} nodes and {} edges visited {} nodes in {} steps",
        nodes.len(),
        edges.len(),
        trace.terminal().visited.len(),
        trace.step_count()
    );
    trace
}

/// Mutable traversal state threaded through the loop.
struct Bfs<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
    start: &'a str,
    queue: VecDeque<&'a str>,
    seen: HashSet<&'a str>,
    visited: Vec<String>,
    predecessors: Predecessors,
    levels: BTreeMap<String, usize>,
}

impl<'a> Bfs<'a> {
    fn new(nodes: &'a [Node], edges: &'a [Edge], start: &'a str) -> Self {
        Self {
            nodes,
            edges,
            start,
            queue: VecDeque::new(),
            seen: HashSet::new(),
            visited: Vec::new(),
            predecessors: empty_predecessors(nodes),
            levels: BTreeMap::new(),
        }
    }

    /// Marks `node` visited and enqueues it.
    fn discover(&mut self, node: &'a str, parent: Option<&'a str>) {
        let level = parent.map_or(0, |p| self.levels.get(p).map_or(0, |l| l + 1));

        self.seen.insert(node);
        self.visited.push(node.to_owned());
        self.queue.push_back(node);
        self.levels.insert(node.to_owned(), level);
        if let Some(parent) = parent {
            self.predecessors
                .insert(node.to_owned(), Some(parent.to_owned()));
        }
    }

    /// A fresh copy of the current state with no focus markers set.
    fn snapshot(&self, description: String) -> BfsStep {
        BfsStep {
            description,
            start_node: self.start.to_owned(),
            queue: self.queue.iter().map(|&id| id.to_owned()).collect(),
            visited: self.visited.clone(),
            current_node: None,
            current_neighbor: None,
            predecessors: self.predecessors.clone(),
            levels: self.levels.clone(),
            nodes: self.nodes.to_vec(),
            edges: self.edges.to_vec(),
        }
    }
}
