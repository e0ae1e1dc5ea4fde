//! Community detection.
//!
//! # Overview
//!
//! The primary partition is connected components: nodes that can reach each
//! other share a label, nodes that cannot do not. Labels start at 0 and are
//! handed out in discovery order while scanning nodes in stated order (see
//! [`components`]).
//!
//! A single component carries no information, so in that case the detector
//! switches to degree-rank bucketing (see [`fallback`]). The result records
//! which [`Strategy`] produced it.
//!
//! Labels are opaque: only equality between them is meaningful.

pub mod components;
pub mod fallback;

use std::collections::HashMap;

use netpath_core::NetworkGraph;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::AdjacencyGraph;

/// Node id → community label.
pub type CommunityMap = HashMap<String, usize>;

/// How a [`Partition`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One community per connected component.
    ConnectedComponents,
    /// The network is one component; nodes were bucketed by degree rank.
    DegreeBuckets,
}

/// A total assignment of nodes to communities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub strategy: Strategy,
    /// Number of distinct labels in use.
    pub community_count: usize,
    /// `(node id, label)` in stated node order.
    pub assignments: Vec<(String, usize)>,
}

impl Partition {
    /// Label of `id`, if the node exists.
    #[must_use]
    pub fn label_of(&self, id: &str) -> Option<usize> {
        self.assignments
            .iter()
            .find(|(node, _)| node == id)
            .map(|&(_, label)| label)
    }

    /// Node ids carrying `label`, in stated order.
    #[must_use]
    pub fn members(&self, label: usize) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|&&(_, l)| l == label)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Members of every community, indexed by label.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<&str>> {
        (0..self.community_count).map(|l| self.members(l)).collect()
    }

    #[must_use]
    pub fn to_map(&self) -> CommunityMap {
        self.assignments.iter().cloned().collect()
    }
}

/// Partition `graph` into communities, reporting the strategy used.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn partition(graph: &NetworkGraph) -> Partition {
    let adj = AdjacencyGraph::from_network(graph);
    let comps = components::connected_components(&adj);

    let (strategy, labels, community_count) = if comps.count == 1 {
        let k = fallback::bucket_count(graph.node_count());
        (Strategy::DegreeBuckets, fallback::degree_buckets(graph), k)
    } else {
        (Strategy::ConnectedComponents, comps.labels, comps.count)
    };

    debug!(?strategy, community_count, "communities detected");

    let assignments = graph
        .nodes()
        .iter()
        .zip(labels)
        .map(|(node, label)| (node.id.clone(), label))
        .collect();

    Partition {
        strategy,
        community_count,
        assignments,
    }
}

/// Map every node id to a community label.
///
/// Connected components when the network has more than one; otherwise
/// degree-rank buckets. An empty network yields an empty map.
#[must_use]
pub fn detect_communities(graph: &NetworkGraph) -> CommunityMap {
    partition(graph).to_map()
}
