//! Unweighted shortest paths.
//!
//! # Algorithm
//!
//! Every edge costs one hop, so a breadth-first search from the source
//! settles nodes in non-decreasing distance order:
//!
//! 1. `dist[source] = 0`, every other distance unknown.
//! 2. Pop the closest unsettled node from the FIFO frontier. Stop if it is
//!    the target.
//! 3. Give each neighbor with an unknown distance `dist + 1`, record the
//!    current node as its predecessor, and enqueue it.
//! 4. Walk predecessors back from the target to rebuild the path.
//!
//! # Output
//!
//! A [`Path`] from source to target inclusive, or an empty [`Path`] when the
//! query has no meaningful answer: an unknown id, `source == target`, or a
//! target in another component. None of these are errors.
//!
//! When several shortest paths exist, which one is returned depends on
//! neighbor iteration order; its length does not.

use std::collections::VecDeque;

use netpath_core::NetworkGraph;
use petgraph::{graph::NodeIndex, visit::NodeIndexable};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::AdjacencyGraph;

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// Node ids from source to target inclusive. Empty means "no path".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    /// The "no path" value.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of nodes on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of edges traversed (0 for an empty path).
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }

    /// Return `true` if the path walks the edge `a -- b` in either direction.
    #[must_use]
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.0.iter().any(|n| n == id)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Path> for Vec<String> {
    fn from(path: Path) -> Self {
        path.0
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Find a shortest path between two node ids.
///
/// Returns an empty [`Path`] if either id is unknown, the ids are equal, or
/// the target is unreachable.
#[must_use]
#[instrument(skip(graph))]
pub fn find_shortest_path(graph: &NetworkGraph, source: &str, target: &str) -> Path {
    if source == target || !graph.contains(source) || !graph.contains(target) {
        debug!("invalid path query");
        return Path::empty();
    }
    let adj = AdjacencyGraph::from_network(graph);
    shortest_path_in(&adj, source, target)
}

/// Same as [`find_shortest_path`], over a prebuilt adjacency view.
#[must_use]
pub fn shortest_path_in(adj: &AdjacencyGraph, source: &str, target: &str) -> Path {
    let (Some(s), Some(t)) = (adj.node_index(source), adj.node_index(target)) else {
        return Path::empty();
    };
    if s == t {
        return Path::empty();
    }

    let g = &adj.graph;
    let n = g.node_count();

    // dist[v]: hops from s to v (None = not reached yet).
    let mut dist: Vec<Option<usize>> = vec![None; n];
    dist[g.to_index(s)] = Some(0);

    // previous[v]: the node that first reached v.
    let mut previous: Vec<Option<NodeIndex>> = vec![None; n];

    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        if v == t {
            break;
        }
        let Some(d) = dist[g.to_index(v)] else {
            continue;
        };

        for w in adj.neighbors(v) {
            let wi = g.to_index(w);
            if dist[wi].is_none() {
                dist[wi] = Some(d + 1);
                previous[wi] = Some(v);
                queue.push_back(w);
            }
        }
    }

    if dist[g.to_index(t)].is_none() {
        debug!(source, target, "target unreachable");
        return Path::empty();
    }

    let mut nodes: Vec<String> = Vec::new();
    let mut current = Some(t);
    while let Some(c) = current {
        if let Some(id) = adj.node_id(c) {
            nodes.push(id.to_string());
        }
        current = previous[g.to_index(c)];
    }
    nodes.reverse();

    if nodes.len() < 2 || nodes.first().map(String::as_str) != Some(source) {
        return Path::empty();
    }

    debug!(source, target, hops = nodes.len() - 1, "shortest path found");
    Path(nodes)
}

/// Hop distance between two nodes.
///
/// `Some(0)` when `source == target` and the node exists; `None` when either
/// id is unknown or no path exists.
#[must_use]
pub fn hop_distance(graph: &NetworkGraph, source: &str, target: &str) -> Option<usize> {
    if source == target {
        return graph.contains(source).then_some(0);
    }
    let path = find_shortest_path(graph, source, target);
    (!path.is_empty()).then(|| path.hop_count())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
