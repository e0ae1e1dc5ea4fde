#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "netpath: shortest paths, centrality and communities over small networks",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (pretty, text, json). Defaults to pretty on a TTY.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(flatten)]
    network: cmd::NetworkArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Networks",
        about = "List the built-in sample networks",
        long_about = "List the built-in sample networks with their node and edge counts.",
        after_help = "EXAMPLES:\n    # List sample networks\n    netpath networks\n\n    # Emit machine-readable output\n    netpath networks --format json"
    )]
    Networks(cmd::networks::NetworksArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Find the shortest path between two nodes",
        long_about = "Find a path with the fewest hops between two nodes of the selected network.",
        after_help = "EXAMPLES:\n    # Path through the default (social) network\n    netpath path alice kate\n\n    # Path through the star topology\n    netpath --network star path node1 node3\n\n    # Emit machine-readable output\n    netpath path alice kate --format json"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Rank nodes by degree centrality",
        long_about = "Rank nodes by degree centrality (degree divided by the maximum degree).",
        after_help = "EXAMPLES:\n    # Five most connected people\n    netpath centrality --top 5\n\n    # Rank a custom network\n    netpath --file team.toml centrality"
    )]
    Centrality(cmd::centrality::CentralityArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Partition nodes into communities",
        long_about = "Partition nodes into connected components, or degree-rank buckets when the network is a single component.",
        after_help = "EXAMPLES:\n    # Communities of the organization chart\n    netpath --network organization communities\n\n    # Emit machine-readable output\n    netpath communities --format json"
    )]
    Communities(cmd::communities::CommunitiesArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Summarize the selected network",
        long_about = "Summarize size, density, degree and component structure of the selected network.",
        after_help = "EXAMPLES:\n    # Summary of the star topology\n    netpath --network star stats\n\n    # Emit machine-readable output\n    netpath stats --format json"
    )]
    Stats(cmd::stats::StatsArgs),
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays
/// parseable in every output mode.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NETPATH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "netpath=debug,info"
        } else {
            "netpath=info,warn"
        })
    });

    let format = env::var("NETPATH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    debug!(?output, "output mode resolved");

    match cli.command {
        Commands::Networks(ref args) => cmd::networks::run_networks(args, output),
        Commands::Path(ref args) => cmd::path::run_path(args, &cli.network, output),
        Commands::Centrality(ref args) => {
            cmd::centrality::run_centrality(args, &cli.network, output)
        }
        Commands::Communities(ref args) => {
            cmd::communities::run_communities(args, &cli.network, output)
        }
        Commands::Stats(ref args) => cmd::stats::run_stats(args, &cli.network, output),
    }
}
