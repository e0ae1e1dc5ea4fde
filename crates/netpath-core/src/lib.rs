#![forbid(unsafe_code)]
//! netpath-core library.
//!
//! Holds the static network description consumed by the analysis engine:
//! nodes, undirected edges, construction-time validation, the canned sample
//! networks, and loading of network definition files.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums for model validation ([`GraphError`]),
//!   `anyhow::Result` for file loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

pub use catalog::SampleNetwork;
pub use error::{ErrorCode, GraphError};
pub use model::{Edge, Network, NetworkGraph, Node};
