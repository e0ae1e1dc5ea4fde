use std::fmt;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DuplicateNode,
    UnknownEndpoint,
    UnknownNetwork,
    DefinitionParseError,
    UnsupportedFormat,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DuplicateNode => "E1001",
            Self::UnknownEndpoint => "E1002",
            Self::UnknownNetwork => "E2001",
            Self::DefinitionParseError => "E3001",
            Self::UnsupportedFormat => "E3002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DuplicateNode => "Duplicate node id",
            Self::UnknownEndpoint => "Edge references unknown node",
            Self::UnknownNetwork => "Unknown sample network",
            Self::DefinitionParseError => "Network definition parse error",
            Self::UnsupportedFormat => "Unsupported definition file format",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::DuplicateNode => Some("Give every node a unique `id`."),
            Self::UnknownEndpoint => {
                Some("Declare both endpoints in `nodes` before referencing them in `edges`.")
            }
            Self::UnknownNetwork => Some("Run `netpath networks` to list available networks."),
            Self::DefinitionParseError => Some("Fix syntax in the definition file and retry."),
            Self::UnsupportedFormat => Some("Use a `.toml` or `.json` definition file."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while constructing a [`crate::NetworkGraph`].
///
/// Malformed input is rejected up front so the analysis engine never has
/// to decide what a dangling edge means.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Two nodes share the same id.
    #[error("duplicate node id '{id}'")]
    DuplicateNode {
        /// The repeated id.
        id: String,
    },

    /// An edge endpoint does not name any declared node.
    ///
    /// The endpoint fields are not called `source`: thiserror reserves that
    /// name for the underlying cause.
    #[error("edge #{index} ({from} -- {to}) references unknown node '{missing}'")]
    UnknownEndpoint {
        /// Position of the offending edge in the edge list.
        index: usize,
        /// Stated source of the edge.
        from: String,
        /// Stated target of the edge.
        to: String,
        /// The endpoint that could not be resolved.
        missing: String,
    },

    /// A sample network key did not match the catalog.
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),
}

impl GraphError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateNode { .. } => ErrorCode::DuplicateNode,
            Self::UnknownEndpoint { .. } => ErrorCode::UnknownEndpoint,
            Self::UnknownNetwork(_) => ErrorCode::UnknownNetwork,
        }
    }
}
