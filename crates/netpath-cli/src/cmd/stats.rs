//! `netpath stats`: network summary.

use std::io::{self, Write};

use clap::Args;
use netpath_analysis::NetworkStats;
use serde::Serialize;

use super::NetworkArgs;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `netpath stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub network: String,
    pub description: String,
    #[serde(flatten)]
    pub stats: NetworkStats,
}

/// Execute `netpath stats`.
pub fn run_stats(_args: &StatsArgs, selection: &NetworkArgs, output: OutputMode) -> anyhow::Result<()> {
    let network = selection.load(output)?;
    let report = StatsReport {
        stats: NetworkStats::compute(&network.graph),
        network: network.name,
        description: network.description,
    };
    render_mode(output, &report, render_text, render_pretty)
}

fn render_text(report: &StatsReport, w: &mut dyn Write) -> io::Result<()> {
    let s = &report.stats;
    writeln!(w, "nodes\t{}", s.node_count)?;
    writeln!(w, "edges\t{}", s.edge_count)?;
    writeln!(w, "density\t{:.3}", s.density)?;
    writeln!(w, "avg_connections\t{:.1}", s.average_connections)?;
    writeln!(w, "max_degree\t{}", s.max_degree)?;
    writeln!(w, "components\t{}", s.component_count)?;
    writeln!(w, "isolated\t{}", s.isolated_count)
}

fn render_pretty(report: &StatsReport, w: &mut dyn Write) -> io::Result<()> {
    let s = &report.stats;
    pretty_section(w, &report.network)?;
    if !report.description.is_empty() {
        writeln!(w, "{}", report.description)?;
        writeln!(w)?;
    }
    pretty_kv(w, "Nodes", s.node_count.to_string())?;
    pretty_kv(w, "Edges", s.edge_count.to_string())?;
    pretty_kv(w, "Density", format!("{:.3}", s.density))?;
    pretty_kv(w, "Avg conn.", format!("{:.1}", s.average_connections))?;
    pretty_kv(w, "Max degree", s.max_degree.to_string())?;
    pretty_kv(w, "Components", s.component_count.to_string())?;
    pretty_kv(w, "Isolated", s.isolated_count.to_string())?;
    pretty_kv(w, "Content hash", &s.content_hash)
}
