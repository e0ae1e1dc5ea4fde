//! Canned sample networks.
//!
//! Three small networks ship with netpath as static, immutable data:
//!
//! | Key            | Name                  | Nodes | Edges |
//! |----------------|-----------------------|-------|-------|
//! | `social`       | Social Media Network  | 20    | 51    |
//! | `organization` | Corporate Hierarchy   | 14    | 22    |
//! | `star`         | Star Network Topology | 11    | 14    |
//!
//! Each [`SampleNetwork::load`] call builds a fresh [`Network`], so callers
//! never share mutable state through the catalog.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;
use crate::model::{Network, NetworkGraph};

/// `(id, name)` node rows or `(source, target)` edge rows.
type Pairs = &'static [(&'static str, &'static str)];

/// One of the built-in networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleNetwork {
    /// Multiple communities and influencer hubs.
    Social,
    /// Management structure with cross-functional links.
    Organization,
    /// One hub connected to every other node.
    Star,
}

impl SampleNetwork {
    /// Every sample network, in catalog order.
    pub const ALL: [Self; 3] = [Self::Social, Self::Organization, Self::Star];

    /// Short key used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Organization => "organization",
            Self::Star => "star",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Social => "Social Media Network",
            Self::Organization => "Corporate Hierarchy",
            Self::Star => "Star Network Topology",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Social => {
                "A complex social network with multiple communities and influencer hubs"
            }
            Self::Organization => {
                "A hierarchical organization network with clear management structures"
            }
            Self::Star => "A centralized network where one node connects to all others",
        }
    }

    const fn data(self) -> (Pairs, Pairs) {
        match self {
            Self::Social => (SOCIAL_NODES, SOCIAL_EDGES),
            Self::Organization => (ORGANIZATION_NODES, ORGANIZATION_EDGES),
            Self::Star => (STAR_NODES, STAR_EDGES),
        }
    }

    /// Build the network.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from graph construction. The static data is
    /// covered by tests, so this only fails if that data is edited badly.
    pub fn load(self) -> Result<Network, GraphError> {
        let (nodes, edges) = self.data();
        let graph = NetworkGraph::from_pairs(nodes, edges)?;
        Ok(Network::new(self.name(), self.description(), graph))
    }
}

impl fmt::Display for SampleNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SampleNetwork {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.key() == wanted)
            .ok_or_else(|| GraphError::UnknownNetwork(s.to_string()))
    }
}

/// Load every sample network in catalog order.
///
/// # Errors
///
/// Returns the first construction error encountered.
pub fn sample_networks() -> Result<Vec<Network>, GraphError> {
    SampleNetwork::ALL.into_iter().map(SampleNetwork::load).collect()
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

const SOCIAL_NODES: Pairs = &[
    ("alice", "Alice Johnson"),
    ("bob", "Bob Smith"),
    ("charlie", "Charlie Brown"),
    ("diana", "Diana Prince"),
    ("eve", "Eve Wilson"),
    ("frank", "Frank Miller"),
    ("grace", "Grace Lee"),
    ("henry", "Henry Davis"),
    ("iris", "Iris Chen"),
    ("jack", "Jack Taylor"),
    ("kate", "Kate Williams"),
    ("liam", "Liam Anderson"),
    ("mia", "Mia Garcia"),
    ("noah", "Noah Martinez"),
    ("olivia", "Olivia Rodriguez"),
    ("paul", "Paul Thompson"),
    ("quinn", "Quinn White"),
    ("ruby", "Ruby Harris"),
    ("sam", "Sam Clark"),
    ("tina", "Tina Lewis"),
];

const SOCIAL_EDGES: Pairs = &[
    ("alice", "bob"),
    ("alice", "charlie"),
    ("alice", "diana"),
    ("alice", "eve"),
    ("alice", "frank"),
    ("bob", "charlie"),
    ("bob", "grace"),
    ("bob", "henry"),
    ("bob", "paul"),
    ("charlie", "diana"),
    ("charlie", "iris"),
    ("charlie", "jack"),
    ("charlie", "quinn"),
    ("diana", "kate"),
    ("diana", "liam"),
    ("diana", "ruby"),
    ("eve", "frank"),
    ("eve", "grace"),
    ("eve", "mia"),
    ("eve", "sam"),
    ("frank", "grace"),
    ("frank", "noah"),
    ("frank", "tina"),
    ("grace", "henry"),
    ("grace", "mia"),
    ("grace", "olivia"),
    ("henry", "iris"),
    ("henry", "noah"),
    ("iris", "jack"),
    ("iris", "olivia"),
    ("jack", "kate"),
    ("jack", "paul"),
    ("kate", "liam"),
    ("kate", "quinn"),
    ("liam", "mia"),
    ("liam", "ruby"),
    ("mia", "noah"),
    ("mia", "sam"),
    ("noah", "olivia"),
    ("noah", "tina"),
    ("olivia", "paul"),
    ("paul", "quinn"),
    ("quinn", "ruby"),
    ("ruby", "sam"),
    ("sam", "tina"),
    ("olivia", "quinn"),
    ("tina", "alice"),
    ("jack", "frank"),
    ("henry", "kate"),
    ("iris", "mia"),
    ("paul", "ruby"),
];

const ORGANIZATION_NODES: Pairs = &[
    ("ceo", "CEO Sarah"),
    ("cto", "CTO Mike"),
    ("cfo", "CFO Lisa"),
    ("hr", "HR Director"),
    ("dev1", "Senior Dev"),
    ("dev2", "Dev Team Lead"),
    ("dev3", "Frontend Dev"),
    ("dev4", "Backend Dev"),
    ("qa1", "QA Manager"),
    ("qa2", "QA Tester"),
    ("pm", "Product Manager"),
    ("designer", "UI Designer"),
    ("analyst", "Data Analyst"),
    ("support", "Support Manager"),
];

const ORGANIZATION_EDGES: Pairs = &[
    ("ceo", "cto"),
    ("ceo", "cfo"),
    ("ceo", "hr"),
    ("ceo", "pm"),
    ("cto", "dev1"),
    ("cto", "dev2"),
    ("cto", "qa1"),
    ("dev1", "dev2"),
    ("dev2", "dev3"),
    ("dev2", "dev4"),
    ("dev1", "qa1"),
    ("qa1", "qa2"),
    ("qa2", "dev3"),
    ("qa2", "dev4"),
    ("pm", "dev1"),
    ("pm", "designer"),
    ("pm", "analyst"),
    ("designer", "dev3"),
    ("analyst", "cfo"),
    ("support", "dev2"),
    ("support", "qa1"),
    ("hr", "support"),
];

const STAR_NODES: Pairs = &[
    ("hub", "Central Hub"),
    ("node1", "Node 1"),
    ("node2", "Node 2"),
    ("node3", "Node 3"),
    ("node4", "Node 4"),
    ("node5", "Node 5"),
    ("node6", "Node 6"),
    ("node7", "Node 7"),
    ("node8", "Node 8"),
    ("node9", "Node 9"),
    ("node10", "Node 10"),
];

const STAR_EDGES: Pairs = &[
    ("hub", "node1"),
    ("hub", "node2"),
    ("hub", "node3"),
    ("hub", "node4"),
    ("hub", "node5"),
    ("hub", "node6"),
    ("hub", "node7"),
    ("hub", "node8"),
    ("hub", "node9"),
    ("hub", "node10"),
    ("node1", "node2"),
    ("node3", "node4"),
    ("node5", "node6"),
    ("node7", "node8"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
