//! `social-graph`: interactive explorer for an in-memory social network.

use std::io;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use social_graph::shell::{SamplePolicy, Shell, ShellConfig};
use social_graph::{Network, NetworkConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Social Network Graph Explorer", long_about = None)]
struct Cli {
    /// Load the demo network without asking.
    #[arg(long, env = "SOCIAL_GRAPH_SAMPLE", conflicts_with = "no_sample")]
    sample: bool,

    /// Start with an empty network without asking.
    #[arg(long)]
    no_sample: bool,

    /// Print network statistics as JSON.
    #[arg(long)]
    json_stats: bool,

    /// Expected number of users (pre-sizes the graph).
    #[arg(long, default_value_t = 0)]
    capacity: usize,

    /// Log filter directive, e.g. `social_graph=debug`.
    #[arg(long, env = "SOCIAL_GRAPH_LOG", default_value = "social_graph=warn")]
    log: String,

    /// Log line format (logs go to stderr).
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("social_graph=warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match cli.log_format {
        LogFormat::Json => registry.with(fmt::layer().json().with_ansi(false).with_writer(io::stderr)).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact().with_writer(io::stderr)).init(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let network = Network::with_config(&NetworkConfig::with_capacity(cli.capacity));
    let config = ShellConfig {
        sample: SamplePolicy::from_flags(cli.sample, cli.no_sample),
        json_stats: cli.json_stats,
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(network, stdin.lock(), io::stdout().lock(), config);
    shell.run()?;
    Ok(())
}
