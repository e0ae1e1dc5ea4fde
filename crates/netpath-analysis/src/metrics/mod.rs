//! Node importance metrics.
//!
//! - **Degree centrality** (`degree`): how many connections a node has,
//!   relative to the best-connected node. High scorers are the network's
//!   hubs and likely influencers.
//!
//! ```rust,ignore
//! use netpath_analysis::metrics::degree::{calculate_centrality, ranked_by_centrality};
//!
//! let scores = calculate_centrality(&graph);
//! let top = ranked_by_centrality(&graph).into_iter().take(5);
//! ```

pub mod degree;
