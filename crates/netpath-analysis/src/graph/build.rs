//! Undirected adjacency construction from a [`NetworkGraph`].
//!
//! # Overview
//!
//! Every stated edge `(a, b)` becomes one undirected petgraph edge, so it is
//! traversable from both endpoints. Repeated pairs (`(a, b)` twice, or
//! `(a, b)` and `(b, a)`) collapse to a single adjacency entry; degree is
//! not affected by this because degrees live on the model and are counted
//! per stated edge.
//!
//! ## Node Indices
//!
//! Nodes are inserted in stated order, so `NodeIndex::new(i)` is the node at
//! position `i` of [`NetworkGraph::nodes`]. Community detection relies on
//! this to label components in discovery order.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeSet, HashMap};

use netpath_core::NetworkGraph;
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::instrument;

// ---------------------------------------------------------------------------
// AdjacencyGraph
// ---------------------------------------------------------------------------

/// An undirected adjacency view over a [`NetworkGraph`].
///
/// Nodes are ids (strings). Built fresh for each analysis call; it shares no
/// state with the model it was built from.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Undirected graph: nodes = ids, edges = deduplicated connections.
    pub graph: UnGraph<String, ()>,
    /// Mapping from node id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the node list and edge set.
    pub content_hash: String,
}

impl AdjacencyGraph {
    /// Build the adjacency view of `network`.
    ///
    /// The model guarantees every edge endpoint resolves, so no edge is
    /// dropped here except exact undirected duplicates.
    #[must_use]
    #[instrument(skip(network), fields(nodes = network.node_count(), edges = network.edge_count()))]
    pub fn from_network(network: &NetworkGraph) -> Self {
        let mut graph =
            UnGraph::<String, ()>::with_capacity(network.node_count(), network.edge_count());
        let mut node_map: HashMap<String, NodeIndex> =
            HashMap::with_capacity(network.node_count());

        for node in network.nodes() {
            let idx = graph.add_node(node.id.clone());
            node_map.insert(node.id.clone(), idx);
        }

        for edge in network.edges() {
            let (Some(&a), Some(&b)) = (node_map.get(&edge.source), node_map.get(&edge.target))
            else {
                continue;
            };

            // Undirected `contains_edge` checks both orientations.
            if !graph.contains_edge(a, b) {
                graph.add_edge(a, b, ());
            }
        }

        let content_hash = compute_content_hash(network);

        Self {
            graph,
            node_map,
            content_hash,
        }
    }

    /// Return the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of distinct undirected connections.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a node id.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Return the id label for a node.
    #[must_use]
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Neighbors of `idx` in either direction.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Hash the node ids in order, then the normalized, sorted edge set.
fn compute_content_hash(network: &NetworkGraph) -> String {
    let mut hasher = blake3::Hasher::new();
    for node in network.nodes() {
        hasher.update(node.id.as_bytes());
        hasher.update(b"\x00");
    }
    hasher.update(b"\x01");

    let edges: BTreeSet<(&str, &str)> = network
        .edges()
        .iter()
        .map(|e| {
            let (s, t) = (e.source.as_str(), e.target.as_str());
            if s <= t { (s, t) } else { (t, s) }
        })
        .collect();

    for (a, b) in edges {
        hasher.update(a.as_bytes());
        hasher.update(b"\x00");
        hasher.update(b.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn net(nodes: &[&str], edges: &[(&str, &str)]) -> NetworkGraph {
        let pairs: Vec<(&str, &str)> = nodes.iter().map(|id| (*id, *id)).collect();
        NetworkGraph::from_pairs(&pairs, edges).expect("valid graph")
    }

    #[test]
    fn empty_network_produces_empty_graph() {
        let adj = AdjacencyGraph::from_network(&NetworkGraph::empty());
        assert_eq!(adj.node_count(), 0);
        assert_eq!(adj.edge_count(), 0);
        assert!(adj.content_hash.starts_with("blake3:"));
    }

    #[test]
    fn node_index_matches_stated_position() {
        let adj = AdjacencyGraph::from_network(&net(&["c", "a", "b"], &[]));
        assert_eq!(adj.node_index("c"), Some(NodeIndex::new(0)));
        assert_eq!(adj.node_index("b"), Some(NodeIndex::new(2)));
        assert_eq!(adj.node_id(NodeIndex::new(1)), Some("a"));
        assert_eq!(adj.node_index("zz"), None);
    }

    #[test]
    fn edges_are_traversable_both_ways() {
        let adj = AdjacencyGraph::from_network(&net(&["a", "b"], &[("a", "b")]));
        let a = adj.node_index("a").expect("a");
        let b = adj.node_index("b").expect("b");
        assert_eq!(adj.neighbors(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(adj.neighbors(b).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn reversed_duplicate_is_one_adjacency_entry() {
        let adj = AdjacencyGraph::from_network(&net(&["a", "b"], &[("a", "b"), ("b", "a")]));
        assert_eq!(adj.edge_count(), 1);
    }

    #[test]
    fn content_hash_ignores_edge_orientation_and_order() {
        let h1 = AdjacencyGraph::from_network(&net(&["a", "b", "c"], &[("a", "b"), ("b", "c")]))
            .content_hash;
        let h2 = AdjacencyGraph::from_network(&net(&["a", "b", "c"], &[("c", "b"), ("b", "a")]))
            .content_hash;
        assert_eq!(h1, h2);
    }

    #[test]
    fn content_hash_changes_with_edges() {
        let without = AdjacencyGraph::from_network(&net(&["a", "b"], &[])).content_hash;
        let with = AdjacencyGraph::from_network(&net(&["a", "b"], &[("a", "b")])).content_hash;
        assert_ne!(without, with, "hash must change when edges added");
    }
}
