//! `netpath path`: shortest path between two nodes.

use std::io::{self, Write};

use clap::Args;
use netpath_analysis::{Path, find_shortest_path};
use serde::Serialize;

use super::{NetworkArgs, unknown_node};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `netpath path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Starting node id.
    pub source: String,

    /// Destination node id.
    pub target: String,
}

/// Report payload for `netpath path`.
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub network: String,
    pub source: String,
    pub target: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    pub path: Path,
    /// Display names, parallel to `path`.
    pub names: Vec<String>,
}

/// Execute `netpath path`.
pub fn run_path(args: &PathArgs, selection: &NetworkArgs, output: OutputMode) -> anyhow::Result<()> {
    let network = selection.load(output)?;

    for id in [&args.source, &args.target] {
        if !network.graph.contains(id) {
            return unknown_node(output, &network, id);
        }
    }

    let path = find_shortest_path(&network.graph, &args.source, &args.target);
    let names = path
        .nodes()
        .iter()
        .filter_map(|id| network.graph.node(id))
        .map(|n| n.name.clone())
        .collect();

    let report = PathReport {
        network: network.name,
        source: args.source.clone(),
        target: args.target.clone(),
        found: !path.is_empty(),
        hops: (!path.is_empty()).then(|| path.hop_count()),
        path,
        names,
    };

    render_mode(output, &report, render_text, render_pretty)
}

fn render_text(report: &PathReport, w: &mut dyn Write) -> io::Result<()> {
    if report.found {
        writeln!(
            w,
            "{} ({} hops)",
            report.path.nodes().join(" -> "),
            report.path.hop_count()
        )
    } else {
        writeln!(w, "no path between {} and {}", report.source, report.target)
    }
}

fn render_pretty(report: &PathReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Shortest path in {}", report.network))?;

    if !report.found {
        writeln!(
            w,
            "No path connects {} and {}.",
            report.source, report.target
        )?;
        return Ok(());
    }

    for (step, (id, name)) in report.path.nodes().iter().zip(&report.names).enumerate() {
        writeln!(w, "{:>3}. {name} ({id})", step + 1)?;
    }
    writeln!(w)?;
    pretty_kv(w, "Path length", format!("{} steps", report.path.hop_count()))
}
