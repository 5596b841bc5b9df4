//! # Random geometric networks
//!
//! Scatters nodes uniformly over a square and links every pair that lies
//! within a fixed Euclidean radius, weighting each link by its length.

pub mod config;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

pub use config::NetworkConfig;

use crate::algorithms::{SpanningTree, minimum_spanning_tree, shortest_path};
use crate::error::GraphResult;
use crate::graph::NetGraph;
use crate::node::{Node, NodeId};

/// Euclidean distance between two nodes
///
/// # Examples
///
/// ```
/// use geonet_graph::{Node, NodeId, euclidean_distance};
///
/// let a = Node::new(NodeId(0), "a", 0.0, 0.0);
/// let b = Node::new(NodeId(1), "b", 3.0, 4.0);
/// assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euclidean_distance(a: &Node, b: &Node) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}

/// Link every pair of nodes that lies within `radius` of each other
///
/// Pairs are visited in position order `(i, j)` with `i < j`, and each link
/// is weighted by the distance between its endpoints. Pairs that are already
/// linked keep their existing weight.
///
/// Returns the number of links added.
///
/// # Errors
///
/// Propagates errors from [`NetGraph::add_link`]; with a valid graph and a
/// finite radius none are expected.
pub fn link_within_radius(graph: &mut NetGraph, radius: f64) -> GraphResult<usize> {
    let before = graph.link_count();

    let view: &NetGraph = graph;
    let pairs: Vec<(NodeId, NodeId, f64)> = view
        .nodes()
        .enumerate()
        .flat_map(move |(i, a)| {
            view.nodes()
                .skip(i + 1)
                .map(move |b| (a.id(), b.id(), euclidean_distance(a, b)))
        })
        .filter(|(_, _, distance)| *distance <= radius)
        .collect();

    for (u, v, distance) in pairs {
        graph.add_link(u, v, distance)?;
    }

    Ok(graph.link_count().saturating_sub(before))
}

/// A randomly generated spatial network
#[derive(Debug, Clone)]
pub struct Network {
    graph: NetGraph,
}

impl Network {
    /// Build a network from a config
    ///
    /// Uses `config.seed` for reproducible placement, or entropy when no seed
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns a `Core` error wrapping `InvalidConfig` if the config does not
    /// validate.
    ///
    /// # Examples
    ///
    /// ```
    /// use geonet_graph::{Network, NetworkConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = NetworkConfig::new().with_node_count(50).with_seed(42);
    /// let first = Network::build(&config)?;
    /// let second = Network::build(&config)?;
    /// assert_eq!(first.graph().node_count(), 50);
    /// assert_eq!(first.graph().render(), second.graph().render());
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(config: &NetworkConfig) -> GraphResult<Self> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::build_with_rng(config, &mut rng)
    }

    /// Build a network drawing coordinates from `rng`
    ///
    /// Node `i` gets id `i` and name `"node i"`.
    ///
    /// # Errors
    ///
    /// Returns a `Core` error wrapping `InvalidConfig` if the config does not
    /// validate.
    pub fn build_with_rng<R: Rng>(
        config: &NetworkConfig,
        rng: &mut R,
    ) -> GraphResult<Self> {
        config.validate()?;

        let mut graph = NetGraph::new();
        for i in 0..config.node_count {
            let x = rng.gen_range(0.0..config.side);
            let y = rng.gen_range(0.0..config.side);
            graph.insert_node(NodeId(i as u64), format!("node {i}"), x, y)?;
        }
        debug!(nodes = graph.node_count(), side = config.side, "Placed nodes");

        let links = link_within_radius(&mut graph, config.link_radius)?;
        info!(
            nodes = graph.node_count(),
            links,
            max_degree = graph.max_degree(),
            radius = config.link_radius,
            "Built network"
        );

        Ok(Self { graph })
    }

    /// Wrap an existing graph
    #[must_use]
    pub const fn from_graph(graph: NetGraph) -> Self {
        Self { graph }
    }

    #[must_use]
    pub const fn graph(&self) -> &NetGraph {
        &self.graph
    }

    pub const fn graph_mut(&mut self) -> &mut NetGraph {
        &mut self.graph
    }

    #[must_use]
    pub fn into_graph(self) -> NetGraph {
        self.graph
    }

    /// Minimum spanning tree of this network
    ///
    /// # Errors
    ///
    /// Returns `DisconnectedGraph` if the network is not connected.
    pub fn minimum_spanning_tree(&self) -> GraphResult<SpanningTree> {
        minimum_spanning_tree(&self.graph)
    }

    /// Shortest path between two nodes of this network
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if either endpoint is not in the network.
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> GraphResult<Vec<&Node>> {
        shortest_path(&self.graph, source, target)
    }
}
