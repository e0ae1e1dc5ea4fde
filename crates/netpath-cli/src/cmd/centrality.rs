//! `netpath centrality`: nodes ranked by degree centrality.

use std::io::{self, Write};

use clap::Args;
use netpath_analysis::{RankedNode, ranked_by_centrality};
use serde::Serialize;

use super::NetworkArgs;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `netpath centrality`.
#[derive(Args, Debug, Default)]
pub struct CentralityArgs {
    /// Show only the N most central nodes.
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CentralityReport {
    pub network: String,
    pub nodes: Vec<RankedNode>,
}

/// Execute `netpath centrality`.
pub fn run_centrality(
    args: &CentralityArgs,
    selection: &NetworkArgs,
    output: OutputMode,
) -> anyhow::Result<()> {
    let network = selection.load(output)?;

    let mut nodes = ranked_by_centrality(&network.graph);
    if let Some(top) = args.top {
        nodes.truncate(top);
    }

    let report = CentralityReport {
        network: network.name,
        nodes,
    };
    render_mode(output, &report, render_text, render_pretty)
}

fn render_text(report: &CentralityReport, w: &mut dyn Write) -> io::Result<()> {
    for n in &report.nodes {
        writeln!(w, "{}\t{}\t{:.3}", n.id, n.degree, n.score)?;
    }
    Ok(())
}

fn render_pretty(report: &CentralityReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &format!("Degree centrality in {}", report.network))?;
    writeln!(w, "{:<4} {:<24} {:>6} {:>6}", "#", "Node", "Degree", "Score")?;
    for (rank, n) in report.nodes.iter().enumerate() {
        writeln!(
            w,
            "{:<4} {:<24} {:>6} {:>6.3}",
            rank + 1,
            format!("{} ({})", n.name, n.id),
            n.degree,
            n.score
        )?;
    }
    Ok(())
}
