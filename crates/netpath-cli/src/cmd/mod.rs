//! Subcommand handlers and the shared network selection they rely on.

pub mod centrality;
pub mod communities;
pub mod networks;
pub mod path;
pub mod stats;

use std::path::PathBuf;

use clap::Args;
use netpath_core::config::{DefinitionError, load_network};
use netpath_core::{GraphError, Network, SampleNetwork};
use tracing::debug;

use crate::output::{CliError, OutputMode, render_error};

/// Which network a command operates on.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Sample network key (`social`, `organization`, `star`). Default: social.
    #[arg(short, long, global = true, conflicts_with = "file")]
    pub network: Option<String>,

    /// Load a network definition file (.toml or .json) instead.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

impl NetworkArgs {
    /// Load the selected network, rendering a structured error on failure.
    pub fn load(&self, output: OutputMode) -> anyhow::Result<Network> {
        let loaded = match (&self.file, &self.network) {
            (Some(path), _) => load_network(path),
            (None, key) => key
                .as_deref()
                .unwrap_or(SampleNetwork::Social.key())
                .parse::<SampleNetwork>()
                .and_then(SampleNetwork::load)
                .map_err(anyhow::Error::from),
        };

        match loaded {
            Ok(network) => {
                debug!(name = %network.name, "network selected");
                Ok(network)
            }
            Err(err) => {
                render_error(output, &describe_load_error(&err))?;
                Err(err)
            }
        }
    }
}

/// Map a load failure to a [`CliError`] carrying the stable error code.
fn describe_load_error(err: &anyhow::Error) -> CliError {
    let code = err
        .downcast_ref::<GraphError>()
        .map(GraphError::code)
        .or_else(|| err.downcast_ref::<DefinitionError>().map(DefinitionError::code));

    match code {
        Some(code) => CliError::with_details(
            format!("{err:#}"),
            code.hint().unwrap_or(code.message()),
            code.code(),
        ),
        None => CliError::new(format!("{err:#}")),
    }
}

/// Report an id that is not part of the selected network.
pub fn unknown_node(output: OutputMode, network: &Network, id: &str) -> anyhow::Result<()> {
    render_error(
        output,
        &CliError::with_details(
            format!("node '{id}' is not in {}", network.name),
            "run `netpath centrality` to list node ids",
            "unknown_node",
        ),
    )?;
    anyhow::bail!("unknown node '{id}'")
}
