//! Adjacency view and whole-network statistics.
//!
//! # Overview
//!
//! The analysis engine walks an undirected petgraph view of a
//! [`netpath_core::NetworkGraph`]:
//!
//! ```text
//! NetworkGraph (validated nodes + stated edges)
//!        ↓  build::AdjacencyGraph::from_network()
//! AdjacencyGraph (UnGraph, node index == stated position)
//!        ↓  stats::NetworkStats::compute()
//! NetworkStats (density, average connections, component count, …)
//! ```
//!
//! [`AdjacencyGraph::content_hash`] is a BLAKE3 hash of the node ids (in
//! stated order) and the undirected edge set. Compare it against a stored
//! value to tell whether cached results still apply.

pub mod build;
pub mod stats;

pub use build::AdjacencyGraph;
pub use stats::NetworkStats;
