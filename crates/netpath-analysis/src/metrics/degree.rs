//! Normalized degree centrality.
//!
//! Each node's score is its degree divided by the largest degree in the
//! network, so scores lie in `[0, 1]` and every best-connected node scores
//! exactly `1.0`. Degrees come from the model, which counts one per stated
//! incident edge (a self-loop counts once).
//!
//! If no node has any connection the maximum degree is 0 and every score is
//! defined as `0.0`.

use std::collections::HashMap;

use netpath_core::NetworkGraph;
use serde::Serialize;
use tracing::instrument;

/// Node id → normalized degree centrality.
pub type CentralityMap = HashMap<String, f64>;

/// One row of a centrality ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub id: String,
    pub name: String,
    pub degree: usize,
    pub score: f64,
}

#[allow(clippy::cast_precision_loss)]
fn normalize(degree: usize, max_degree: usize) -> f64 {
    if max_degree == 0 {
        0.0
    } else {
        degree as f64 / max_degree as f64
    }
}

/// Compute normalized degree centrality for every node.
///
/// An empty network yields an empty map.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn calculate_centrality(graph: &NetworkGraph) -> CentralityMap {
    let max_degree = graph.max_degree();
    graph
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), normalize(n.connections, max_degree)))
        .collect()
}

/// Nodes sorted by descending centrality; ties keep stated order.
#[must_use]
pub fn ranked_by_centrality(graph: &NetworkGraph) -> Vec<RankedNode> {
    let max_degree = graph.max_degree();
    let mut ranked: Vec<RankedNode> = graph
        .nodes()
        .iter()
        .map(|n| RankedNode {
            id: n.id.clone(),
            name: n.name.clone(),
            degree: n.connections,
            score: normalize(n.connections, max_degree),
        })
        .collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree));
    ranked
}
