//! Whole-network statistics.
//!
//! The summary shown next to a network: size, density, average number of
//! connections per node, and how fragmented it is. Computed from stated
//! edges, so a repeated edge counts twice here just as it does for degree.

use netpath_core::NetworkGraph;
use serde::Serialize;
use tracing::instrument;

use crate::community::components::connected_components;
use crate::graph::build::AdjacencyGraph;

/// Summary statistics for one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// `2E / (N (N - 1))`; 0 when there are fewer than two nodes.
    pub density: f64,
    /// `2E / N`; 0 for an empty network.
    pub average_connections: f64,
    pub max_degree: usize,
    pub component_count: usize,
    /// Nodes with no connections at all.
    pub isolated_count: usize,
    pub content_hash: String,
}

impl NetworkStats {
    #[must_use]
    #[instrument(skip(graph))]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(graph: &NetworkGraph) -> Self {
        let adj = AdjacencyGraph::from_network(graph);
        let n = graph.node_count();
        let e = graph.edge_count();

        let density = if n < 2 {
            0.0
        } else {
            (2 * e) as f64 / (n * (n - 1)) as f64
        };

        let average_connections = if n == 0 {
            0.0
        } else {
            (2 * e) as f64 / n as f64
        };

        let isolated_count = graph
            .nodes()
            .iter()
            .filter(|node| node.connections == 0)
            .count();

        Self {
            node_count: n,
            edge_count: e,
            density,
            average_connections,
            max_degree: graph.max_degree(),
            component_count: connected_components(&adj).count,
            isolated_count,
            content_hash: adj.content_hash,
        }
    }
}
