//! Degree-rank bucketing for single-component networks.
//!
//! When every node is reachable from every other, component labeling puts
//! the whole network in one group, which tells the viewer nothing. The
//! fallback ranks nodes by descending degree (ties keep stated order) and
//! deals them round-robin into `k = min(4, ceil(n / 5))` buckets.
//!
//! This is an approximation with no modularity meaning: bucket `0` holds the
//! best-connected node, the `k+1`-th best-connected, and so on. Nodes that
//! share a bucket need not be adjacent.

use netpath_core::NetworkGraph;

/// Upper bound on the number of buckets.
pub const MAX_BUCKETS: usize = 4;

/// Nodes per bucket used to size `k`.
pub const NODES_PER_BUCKET: usize = 5;

/// Bucket count for a network of `node_count` nodes (at least 1).
#[must_use]
pub fn bucket_count(node_count: usize) -> usize {
    node_count.div_ceil(NODES_PER_BUCKET).clamp(1, MAX_BUCKETS)
}

/// Bucket label per node position.
#[must_use]
pub fn degree_buckets(graph: &NetworkGraph) -> Vec<usize> {
    let nodes = graph.nodes();
    let k = bucket_count(nodes.len());

    let mut order: Vec<usize> = (0..nodes.len()).collect();
    // Stable: equal degrees keep stated order.
    order.sort_by(|&a, &b| nodes[b].connections.cmp(&nodes[a].connections));

    let mut labels = vec![0; nodes.len()];
    for (rank, pos) in order.into_iter().enumerate() {
        labels[pos] = rank % k;
    }
    labels
}
