//! Connected-component labeling with an explicit work-list.
//!
//! Nodes are scanned in stated order. The first unlabeled node seeds a new
//! component; a stack-driven traversal then labels everything reachable
//! from it before the scan moves on. Labels are therefore `0, 1, 2, …` in
//! order of first discovery, and no recursion depth depends on the input.

use petgraph::visit::NodeIndexable;

use crate::graph::AdjacencyGraph;

const UNLABELED: usize = usize::MAX;

/// Component label per node position, plus the number of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// `labels[i]` is the component of the node at stated position `i`.
    pub labels: Vec<usize>,
    /// Number of distinct components.
    pub count: usize,
}

impl Components {
    /// Number of nodes in each component, indexed by label.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }
}

/// Label every node with its connected component.
#[must_use]
pub fn connected_components(adj: &AdjacencyGraph) -> Components {
    let g = &adj.graph;
    let mut labels = vec![UNLABELED; g.node_count()];
    let mut count = 0;
    let mut stack = Vec::new();

    for start in g.node_indices() {
        if labels[g.to_index(start)] != UNLABELED {
            continue;
        }

        labels[g.to_index(start)] = count;
        stack.push(start);

        while let Some(v) = stack.pop() {
            for w in adj.neighbors(v) {
                let wi = g.to_index(w);
                if labels[wi] == UNLABELED {
                    labels[wi] = count;
                    stack.push(w);
                }
            }
        }

        count += 1;
    }

    Components { labels, count }
}
