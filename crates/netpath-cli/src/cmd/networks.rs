//! `netpath networks`: list the built-in sample networks.

use std::io::{self, Write};

use clap::Args;
use netpath_core::SampleNetwork;
use serde::Serialize;

use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `netpath networks`.
#[derive(Args, Debug, Default)]
pub struct NetworksArgs {}

#[derive(Debug, Serialize)]
pub struct NetworkSummary {
    pub key: &'static str,
    pub name: String,
    pub description: String,
    pub nodes: usize,
    pub edges: usize,
}

/// Execute `netpath networks`.
pub fn run_networks(_args: &NetworksArgs, output: OutputMode) -> anyhow::Result<()> {
    let mut summaries = Vec::with_capacity(SampleNetwork::ALL.len());
    for sample in SampleNetwork::ALL {
        let network = sample.load()?;
        summaries.push(NetworkSummary {
            key: sample.key(),
            nodes: network.graph.node_count(),
            edges: network.graph.edge_count(),
            name: network.name,
            description: network.description,
        });
    }

    render_mode(output, &summaries, render_text, render_pretty)
}

#[allow(clippy::ptr_arg)]
fn render_text(rows: &Vec<NetworkSummary>, w: &mut dyn Write) -> io::Result<()> {
    for row in rows {
        writeln!(w, "{}\t{}\t{}\t{}", row.key, row.nodes, row.edges, row.name)?;
    }
    Ok(())
}

#[allow(clippy::ptr_arg)]
fn render_pretty(rows: &Vec<NetworkSummary>, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Sample networks")?;
    for row in rows {
        writeln!(
            w,
            "{:<14} {:<24} {:>3} nodes, {:>3} edges",
            row.key, row.name, row.nodes, row.edges
        )?;
        writeln!(w, "{:<14} {}", "", row.description)?;
    }
    Ok(())
}
