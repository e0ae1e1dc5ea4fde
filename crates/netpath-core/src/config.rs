//! Network definition files.
//!
//! A definition file describes one network in TOML or JSON, chosen by file
//! extension:
//!
//! ```toml
//! name = "Book club"
//! description = "Who recommends books to whom"
//!
//! [[nodes]]
//! id = "ana"
//! name = "Ana"
//!
//! [[nodes]]
//! id = "ben"
//! name = "Ben"
//!
//! [[edges]]
//! source = "ana"
//! target = "ben"
//! ```
//!
//! `connections` may appear on nodes but is always recomputed from the
//! edge list.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ErrorCode;
use crate::model::{Edge, Network, NetworkGraph, Node};

/// On-disk shape of a network definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl NetworkDefinition {
    /// Validate and build the network.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GraphError`] for duplicate ids or dangling edges.
    pub fn into_network(self) -> Result<Network, crate::GraphError> {
        let graph = NetworkGraph::new(self.nodes, self.edges)?;
        Ok(Network::new(self.name, self.description, graph))
    }
}

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Toml,
    Json,
}

impl DefinitionFormat {
    /// Pick a format from the file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Errors specific to reading definition files.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("unsupported definition format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl DefinitionError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            Self::Parse { .. } => ErrorCode::DefinitionParseError,
        }
    }
}

/// Parse definition text in the given format.
///
/// # Errors
///
/// Returns [`DefinitionError::Parse`] (attributed to `path`) when the text
/// is not a valid definition.
pub fn parse_definition(
    content: &str,
    format: DefinitionFormat,
    path: &Path,
) -> std::result::Result<NetworkDefinition, DefinitionError> {
    let parsed: std::result::Result<NetworkDefinition, String> = match format {
        DefinitionFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        DefinitionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| DefinitionError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Read, parse and validate a network definition file.
///
/// # Errors
///
/// Fails if the file cannot be read, has an unsupported extension, does not
/// parse, or describes a malformed graph.
#[instrument]
pub fn load_network(path: &Path) -> Result<Network> {
    let format = DefinitionFormat::from_path(path)
        .ok_or_else(|| DefinitionError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let definition = parse_definition(&content, format, path)?;
    let network = definition
        .into_network()
        .with_context(|| format!("Invalid network in {}", path.display()))?;

    debug!(
        name = %network.name,
        nodes = network.graph.node_count(),
        edges = network.graph.edge_count(),
        "loaded network definition"
    );
    Ok(network)
}
