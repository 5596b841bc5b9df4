//! Graph-specific error types

use thiserror::Error;

use crate::node::NodeId;

/// Graph-specific error types
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node already exists: {0}")]
    DuplicateNode(NodeId),

    #[error("Node not found: {0}")]
    InvalidNode(NodeId),

    #[error("Self-loop rejected: {0}")]
    SelfLoop(NodeId),

    #[error("Invalid weight {weight} for link {from} -- {to}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("Graph is not connected: reached {reached} of {total} nodes")]
    DisconnectedGraph { reached: usize, total: usize },

    #[error("Index {index} out of bounds for graph with {len} nodes")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Predecessor chain from {to} does not lead back to {from}")]
    BrokenRoute { from: NodeId, to: NodeId },

    #[error(transparent)]
    Core(#[from] geonet_core::Error),
}

impl GraphError {
    pub const fn duplicate_node(id: NodeId) -> Self {
        Self::DuplicateNode(id)
    }

    pub const fn invalid_node(id: NodeId) -> Self {
        Self::InvalidNode(id)
    }

    pub const fn self_loop(id: NodeId) -> Self {
        Self::SelfLoop(id)
    }

    pub const fn invalid_weight(from: NodeId, to: NodeId, weight: f64) -> Self {
        Self::InvalidWeight { from, to, weight }
    }

    pub const fn disconnected(reached: usize, total: usize) -> Self {
        Self::DisconnectedGraph { reached, total }
    }

    pub const fn broken_route(from: NodeId, to: NodeId) -> Self {
        Self::BrokenRoute { from, to }
    }

    pub const fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
