//! `netpath communities`: community partition of the network.

use std::io::{self, Write};

use clap::Args;
use netpath_analysis::{Partition, Strategy, partition};
use serde::Serialize;

use super::NetworkArgs;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `netpath communities`.
#[derive(Args, Debug, Default)]
pub struct CommunitiesArgs {}

#[derive(Debug, Serialize)]
pub struct CommunitiesReport {
    pub network: String,
    #[serde(flatten)]
    pub partition: Partition,
}

/// Execute `netpath communities`.
pub fn run_communities(
    _args: &CommunitiesArgs,
    selection: &NetworkArgs,
    output: OutputMode,
) -> anyhow::Result<()> {
    let network = selection.load(output)?;
    let report = CommunitiesReport {
        partition: partition(&network.graph),
        network: network.name,
    };
    render_mode(output, &report, render_text, render_pretty)
}

const fn strategy_label(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::ConnectedComponents => "connected components",
        Strategy::DegreeBuckets => "degree-rank buckets (single component)",
    }
}

fn render_text(report: &CommunitiesReport, w: &mut dyn Write) -> io::Result<()> {
    for (label, members) in report.partition.groups().iter().enumerate() {
        writeln!(w, "{label}\t{}", members.join(" "))?;
    }
    Ok(())
}

fn render_pretty(report: &CommunitiesReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Communities in {}", report.network))?;
    pretty_kv(w, "Strategy", strategy_label(report.partition.strategy))?;
    pretty_kv(w, "Communities", report.partition.community_count.to_string())?;
    writeln!(w)?;
    for (label, members) in report.partition.groups().iter().enumerate() {
        writeln!(w, "[{label}] {}", members.join(", "))?;
    }
    Ok(())
}
