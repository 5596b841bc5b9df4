//! # geonet-graph
//!
//! Undirected, weighted graphs of spatial nodes, with the two classic
//! algorithms that run over them:
//!
//! - **[`NetGraph`]**: adjacency-list graph with identity-keyed node storage
//! - **[`Network`]**: random geometric network builder
//! - **[`minimum_spanning_tree`]**: Prim's algorithm, O(N²)
//! - **[`shortest_path`]**: Dijkstra's algorithm, O(E log V)
//!
//! # Example
//!
//! ```
//! use geonet_graph::{NetGraph, NodeId, minimum_spanning_tree, shortest_path};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = NetGraph::new();
//! for (id, name) in [(0, "A"), (1, "B"), (2, "C")] {
//!     graph.insert_node(NodeId(id), name, 0.0, 0.0)?;
//! }
//! graph.add_link(NodeId(0), NodeId(1), 1.0)?;
//! graph.add_link(NodeId(1), NodeId(2), 1.0)?;
//!
//! let tree = minimum_spanning_tree(&graph)?;
//! assert_eq!(tree.edges().len(), 2);
//!
//! let path = shortest_path(&graph, NodeId(0), NodeId(2))?;
//! assert_eq!(path.len(), 3);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod network;
pub mod node;

pub use algorithms::{
    Route, SpanningTree, TreeEdge, minimum_spanning_tree, shortest_path, shortest_route,
};
pub use error::{GraphError, GraphResult};
pub use graph::NetGraph;
pub use network::{Network, NetworkConfig, euclidean_distance, link_within_radius};
pub use node::{Adjacent, AdjacencyListHead, Node, NodeId};
