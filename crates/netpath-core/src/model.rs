//! Network model: nodes, undirected edges, and the validated graph snapshot.
//!
//! # Overview
//!
//! A [`NetworkGraph`] is built once per network selection and never mutated
//! afterwards. Construction validates the input and derives every node's
//! degree from the edge list:
//!
//! - Node ids must be unique ([`GraphError::DuplicateNode`]).
//! - Both endpoints of every edge must name a declared node
//!   ([`GraphError::UnknownEndpoint`]). Dangling edges are rejected, never
//!   silently skipped.
//! - Any `connections` value supplied on an input [`Node`] is discarded and
//!   recomputed.
//!
//! ## Degree
//!
//! Edges are undirected. A stated edge `(a, b)` adds one to the degree of
//! `a` and one to the degree of `b`; it is never counted twice for being
//! traversable in both directions. A self-loop `(a, a)` adds one to `a`.
//! Repeated edges in the list are counted once per occurrence.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Node / Edge
// ---------------------------------------------------------------------------

/// A person or role in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique, stable identifier.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Degree, derived from the edge list when the graph is built.
    #[serde(default)]
    pub connections: usize,
}

impl Node {
    /// Create a node with no derived degree yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            connections: 0,
        }
    }
}

/// An undirected connection between two nodes.
///
/// `source` and `target` carry no direction; `(a, b)` and `(b, a)` describe
/// the same relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Return `true` if this edge joins `a` and `b`, in either order.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Return `true` if `id` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

// ---------------------------------------------------------------------------
// NetworkGraph
// ---------------------------------------------------------------------------

/// A validated, immutable network snapshot.
///
/// Nodes and edges keep their stated order. Node order matters to the
/// analysis engine: community labels are assigned in the order components
/// are first discovered while walking nodes front to back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl NetworkGraph {
    /// Build a graph from nodes and edges, recomputing every node's degree.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if two nodes share an id, or
    /// [`GraphError::UnknownEndpoint`] for the first edge whose endpoint is
    /// not a declared node.
    #[instrument(skip_all)]
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut nodes: Vec<Node> = nodes.into_iter().collect();
        let edges: Vec<Edge> = edges.into_iter().collect();

        let mut index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter_mut().enumerate() {
            if index.insert(node.id.clone(), pos).is_some() {
                return Err(GraphError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
            node.connections = 0;
        }

        for (i, edge) in edges.iter().enumerate() {
            let resolve = |id: &str| {
                index
                    .get(id)
                    .copied()
                    .ok_or_else(|| GraphError::UnknownEndpoint {
                        index: i,
                        from: edge.source.clone(),
                        to: edge.target.clone(),
                        missing: id.to_string(),
                    })
            };
            let s = resolve(&edge.source)?;
            let t = resolve(&edge.target)?;

            nodes[s].connections += 1;
            if s != t {
                nodes[t].connections += 1;
            }
        }

        debug!(nodes = nodes.len(), edges = edges.len(), "network graph built");

        Ok(Self {
            nodes,
            edges,
            index,
        })
    }

    /// Build a graph from `(id, name)` node pairs and `(source, target)` edges.
    ///
    /// # Errors
    ///
    /// Same as [`NetworkGraph::new`].
    pub fn from_pairs(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> Result<Self, GraphError> {
        Self::new(
            nodes.iter().map(|(id, name)| Node::new(*id, *name)),
            edges.iter().map(|(s, t)| Edge::new(*s, *t)),
        )
    }

    /// A graph with no nodes and no edges.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Nodes in stated order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in stated order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&pos| &self.nodes[pos])
    }

    /// Position of a node in stated order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Derived degree of a node, or `None` if the id is unknown.
    #[must_use]
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.node(id).map(|n| n.connections)
    }

    /// Largest degree in the graph (0 for an empty or edgeless graph).
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.nodes.iter().map(|n| n.connections).max().unwrap_or(0)
    }

    /// Return `true` if some stated edge joins `a` and `b`.
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::empty()
    }
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// A named network: display metadata plus its graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network {
    pub name: String,
    pub description: String,
    pub graph: NetworkGraph,
}

impl Network {
    pub fn new(name: impl Into<String>, description: impl Into<String>, graph: NetworkGraph) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            graph,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
