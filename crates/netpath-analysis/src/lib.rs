#![forbid(unsafe_code)]
//! netpath-analysis library.
//!
//! The graph analysis engine: shortest paths, degree centrality, and
//! community detection over a [`NetworkGraph`] snapshot. Every entry point
//! is a pure function: it borrows the graph, allocates its own working
//! state, and never mutates its input, so calls may run concurrently from
//! independent call sites.
//!
//! ```rust,ignore
//! use netpath_analysis::{calculate_centrality, detect_communities, find_shortest_path};
//! use netpath_core::SampleNetwork;
//!
//! let star = SampleNetwork::Star.load()?;
//! let path = find_shortest_path(&star.graph, "node1", "node3");
//! assert_eq!(path.nodes(), ["node1", "hub", "node3"]);
//!
//! let scores = calculate_centrality(&star.graph);
//! let communities = detect_communities(&star.graph);
//! ```
//!
//! # Conventions
//!
//! - **Errors**: queries never fail. Invalid or unanswerable queries yield
//!   empty results; malformed graphs are rejected by `netpath-core`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod community;
pub mod graph;
pub mod metrics;
pub mod path;

pub use community::{CommunityMap, Partition, Strategy, detect_communities, partition};
pub use graph::{AdjacencyGraph, NetworkStats};
pub use metrics::degree::{CentralityMap, RankedNode, calculate_centrality, ranked_by_centrality};
pub use path::{Path, find_shortest_path, hop_distance, shortest_path_in};

#[doc(no_inline)]
pub use netpath_core::NetworkGraph;
