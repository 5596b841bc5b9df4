//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geonet_graph::NetworkConfig;

/// geonet - random geometric networks
#[derive(Parser, Debug)]
#[command(name = "geonet")]
#[command(version)]
#[command(about = "Build random geometric networks and query spanning trees and routes")]
#[command(
    long_about = "geonet scatters nodes over a square, links every pair within a radius, and answers minimum spanning tree and shortest path queries over the result."
)]
pub struct Cli {
    /// TOML file with network settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of nodes (overrides the config file)
    #[arg(short, long, global = true)]
    pub nodes: Option<usize>,

    /// Side length of the placement square
    #[arg(long, global = true)]
    pub side: Option<f64>,

    /// Link radius
    #[arg(short, long, global = true)]
    pub radius: Option<f64>,

    /// Seed for reproducible placement
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the adjacency list of every node
    Render,

    /// Print node count, link count and maximum degree
    Stats,

    /// Print the minimum spanning tree
    Mst,

    /// Print the shortest path between two nodes
    Path {
        /// Source node id
        #[arg(long)]
        from: u64,

        /// Target node id
        #[arg(long)]
        to: u64,
    },
}

impl Cli {
    /// Resolve the network config: file values (or defaults), then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn network_config(&self) -> Result<NetworkConfig> {
        let base = match &self.config {
            Some(path) => NetworkConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => NetworkConfig::default(),
        };

        Ok(NetworkConfig {
            node_count: self.nodes.unwrap_or(base.node_count),
            side: self.side.unwrap_or(base.side),
            link_radius: self.radius.unwrap_or(base.link_radius),
            seed: self.seed.or(base.seed),
        })
    }
}
