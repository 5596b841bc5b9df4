//! # geonet
//!
//! Builds a random geometric network from a TOML config and command-line
//! overrides, then runs one query against it.
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `info`), so the
//! query output on stdout stays clean.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use geonet_graph::{Network, NodeId};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.network_config()?;
    debug!(?config, "Resolved network config");

    let network = Network::build(&config).context("Failed to build network")?;

    match cli.command {
        Commands::Render => print!("{}", network.graph()),
        Commands::Stats => print_stats(&network),
        Commands::Mst => print_mst(&network)?,
        Commands::Path { from, to } => print_path(&network, NodeId(from), NodeId(to))?,
    }

    Ok(())
}

fn print_stats(network: &Network) {
    let graph = network.graph();
    println!("nodes: {}", graph.node_count());
    println!("links: {}", graph.link_count());
    println!("max degree: {}", graph.max_degree());
}

fn print_mst(network: &Network) -> Result<()> {
    let tree = network
        .minimum_spanning_tree()
        .context("Failed to compute minimum spanning tree")?;

    for edge in tree.edges() {
        println!("{} - {} ({})", edge.parent, edge.child, edge.weight);
    }
    println!("total weight: {}", tree.total_weight());
    info!(edges = tree.edges().len(), "Minimum spanning tree complete");
    Ok(())
}

fn print_path(network: &Network, from: NodeId, to: NodeId) -> Result<()> {
    let route = geonet_graph::shortest_route(network.graph(), from, to)
        .with_context(|| format!("Failed to route from {from} to {to}"))?;

    match route {
        Some(route) => {
            let hops: Vec<String> = route.nodes.iter().map(|node| node.name().to_string()).collect();
            println!("{}", hops.join(" -> "));
            println!("cost: {}", route.cost);
            info!(hops = route.hops(), cost = route.cost, "Route found");
        }
        None => {
            println!("no route from {from} to {to}");
            info!(%from, %to, "Target unreachable");
        }
    }
    Ok(())
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
