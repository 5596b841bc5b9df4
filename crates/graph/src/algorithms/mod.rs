//! Graph algorithms over [`NetGraph`](crate::NetGraph).
//!
//! Both algorithms read the graph through its public API and index their
//! scratch state by storage position, so node ids need not be dense.

pub mod mst;
pub mod shortest_path;

pub use mst::{SpanningTree, TreeEdge, minimum_spanning_tree};
pub use shortest_path::{Route, shortest_path, shortest_route};
