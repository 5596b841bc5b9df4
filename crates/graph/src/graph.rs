//! # Network graph
//!
//! Undirected, weighted graph of spatial nodes stored as adjacency lists.
//!
//! Heads live in an [`IndexMap`] keyed by [`NodeId`], which gives O(1) lookup
//! by identity and keeps insertion order for positional access and rendering.
//! Every edge `(u, v, w)` is stored twice, once in each endpoint's list.

use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use petgraph::graph::UnGraph;
use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::node::{Adjacent, AdjacencyListHead, Node, NodeId};

/// Undirected weighted graph over spatial nodes.
#[derive(Debug, Clone, Default)]
pub struct NetGraph {
    /// Adjacency heads in insertion order, keyed by node identity
    heads: IndexMap<NodeId, AdjacencyListHead>,
}

impl NetGraph {
    /// Create a new empty graph
    ///
    /// # Examples
    ///
    /// ```
    /// use geonet_graph::NetGraph;
    ///
    /// let graph = NetGraph::new();
    /// assert_eq!(graph.node_count(), 0);
    /// assert_eq!(graph.link_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            heads: IndexMap::new(),
        }
    }

    /// Build a graph from prepared adjacency heads
    ///
    /// Heads keep their given order. The caller is responsible for listing
    /// each edge on both sides.
    ///
    /// # Errors
    ///
    /// * `DuplicateNode` if two heads share an id
    /// * `SelfLoop` if a head lists itself as a neighbor
    /// * `InvalidNode` if a record names a node with no head
    /// * `InvalidWeight` if a record carries a negative, infinite or NaN weight
    pub fn from_heads(heads: impl IntoIterator<Item = AdjacencyListHead>) -> GraphResult<Self> {
        let mut map = IndexMap::new();
        for head in heads {
            let id = head.node().id();
            if map.contains_key(&id) {
                return Err(GraphError::duplicate_node(id));
            }
            map.insert(id, head);
        }

        for (id, head) in &map {
            if head.contains(*id) {
                return Err(GraphError::self_loop(*id));
            }
            for adjacent in head.edges() {
                if !map.contains_key(&adjacent.neighbor()) {
                    return Err(GraphError::invalid_node(adjacent.neighbor()));
                }
                check_weight(*id, adjacent.neighbor(), adjacent.weight())?;
            }
        }

        Ok(Self { heads: map })
    }

    /// Number of nodes in the graph
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.heads.len()
    }

    /// Number of undirected links
    ///
    /// Counts every adjacency record and halves the total, which relies on
    /// each link being stored on both sides.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.heads.values().map(AdjacencyListHead::degree).sum::<usize>() / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.heads.contains_key(&id)
    }

    /// Insert a node with an empty adjacency list
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNode` if a node with this id already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use geonet_graph::{NetGraph, NodeId};
    ///
    /// let mut graph = NetGraph::new();
    /// assert!(graph.insert_node(NodeId(0), "A", 1.0, 2.0).is_ok());
    /// assert!(graph.insert_node(NodeId(0), "A again", 3.0, 4.0).is_err());
    /// assert_eq!(graph.node_count(), 1);
    /// ```
    pub fn insert_node(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        x: f64,
        y: f64,
    ) -> GraphResult<NodeId> {
        if self.heads.contains_key(&id) {
            return Err(GraphError::duplicate_node(id));
        }

        let node = Node::new(id, name, x, y);
        trace!(node = %id, name = node.name(), x, y, "Inserting node");
        self.heads.insert(id, AdjacencyListHead::new(node));
        Ok(id)
    }

    /// Link two nodes with an undirected weighted edge
    ///
    /// Each side gains a record only if it does not already list the other
    /// node, so re-linking an existing pair is a no-op that keeps the
    /// original weight.
    ///
    /// # Errors
    ///
    /// * `InvalidNode` if either endpoint is not in the graph
    /// * `SelfLoop` if `u == v`
    /// * `InvalidWeight` if `weight` is negative, infinite or NaN
    ///
    /// Nothing is modified when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use geonet_graph::{NetGraph, NodeId};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = NetGraph::new();
    /// let a = graph.insert_node(NodeId(0), "A", 0.0, 0.0)?;
    /// let b = graph.insert_node(NodeId(1), "B", 3.0, 4.0)?;
    /// graph.add_link(a, b, 5.0)?;
    /// graph.add_link(a, b, 8.0)?;
    /// assert_eq!(graph.link_count(), 1);
    /// assert_eq!(graph.degree(a)?, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_link(&mut self, u: NodeId, v: NodeId, weight: f64) -> GraphResult<()> {
        self.require(u)?;
        self.require(v)?;
        if u == v {
            return Err(GraphError::self_loop(u));
        }
        check_weight(u, v, weight)?;

        let forward = self
            .heads
            .get_mut(&u)
            .is_some_and(|head| head.push_unique(Adjacent::new(v, weight)));
        let backward = self
            .heads
            .get_mut(&v)
            .is_some_and(|head| head.push_unique(Adjacent::new(u, weight)));

        trace!(from = %u, to = %v, weight, forward, backward, "Linked nodes");
        Ok(())
    }

    /// Delete a node and every record that references it
    ///
    /// Returns the removed node.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if the node is not in the graph.
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let head = self
            .heads
            .shift_remove(&id)
            .ok_or_else(|| GraphError::invalid_node(id))?;

        for other in self.heads.values_mut() {
            other.retain_neighbors(|adjacent| adjacent.neighbor() != id);
        }

        debug!(node = %id, degree = head.degree(), "Deleted node");
        Ok(head.node().clone())
    }

    /// Remove the link between two nodes
    ///
    /// Returns `true` if a link was removed. A missing link is not an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if either endpoint is not in the graph.
    pub fn remove_link(&mut self, u: NodeId, v: NodeId) -> GraphResult<bool> {
        self.require(u)?;
        self.require(v)?;

        let forward = self
            .heads
            .get_mut(&u)
            .is_some_and(|head| head.remove_neighbor(v));
        let backward = self
            .heads
            .get_mut(&v)
            .is_some_and(|head| head.remove_neighbor(u));

        trace!(from = %u, to = %v, forward, backward, "Removed link");
        Ok(forward || backward)
    }

    /// Adjacency records of a node, in insertion order
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if the node is not in the graph.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[Adjacent]> {
        self.head(id).map(AdjacencyListHead::edges)
    }

    /// Position of a node in insertion order
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if the node is not in the graph.
    pub fn index_of(&self, id: NodeId) -> GraphResult<usize> {
        self.heads
            .get_index_of(&id)
            .ok_or_else(|| GraphError::invalid_node(id))
    }

    /// Number of links incident to a node
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if the node is not in the graph.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.head(id).map(AdjacencyListHead::degree)
    }

    /// Largest degree over all nodes, 0 for an empty graph
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.heads
            .values()
            .map(AdjacencyListHead::degree)
            .max()
            .unwrap_or(0)
    }

    /// Node at a position in insertion order, `None` when out of range
    #[must_use]
    pub fn node_at(&self, index: usize) -> Option<&Node> {
        self.heads.get_index(index).map(|(_, head)| head.node())
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.heads.get(&id).map(AdjacencyListHead::node)
    }

    /// Iterate over nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.heads.values().map(AdjacencyListHead::node)
    }

    /// Iterate over adjacency heads in insertion order
    pub fn heads(&self) -> impl Iterator<Item = &AdjacencyListHead> {
        self.heads.values()
    }

    /// Iterate over each undirected link once
    ///
    /// Yields `(u, v, weight)` with `u` positioned before `v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.heads
            .iter()
            .enumerate()
            .flat_map(move |(position, (id, head))| {
                head.edges().iter().filter_map(move |adjacent| {
                    let other = self.heads.get_index_of(&adjacent.neighbor())?;
                    (other > position).then_some((*id, adjacent.neighbor(), adjacent.weight()))
                })
            })
    }

    /// Render the adjacency list, one line per node
    ///
    /// # Examples
    ///
    /// ```
    /// use geonet_graph::{NetGraph, NodeId};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = NetGraph::new();
    /// let a = graph.insert_node(NodeId(0), "A", 0.0, 0.0)?;
    /// let b = graph.insert_node(NodeId(1), "B", 0.0, 0.0)?;
    /// graph.insert_node(NodeId(2), "C", 0.0, 0.0)?;
    /// graph.add_link(a, b, 0.5)?;
    /// assert_eq!(graph.render(), "A: {(B,0.5)}\nB: {(A,0.5)}\nC: {}\n");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Export as a petgraph undirected graph
    ///
    /// Node index `i` of the result is the node at position `i` here, and
    /// node weights carry the original ids.
    #[must_use]
    pub fn to_petgraph(&self) -> UnGraph<NodeId, f64> {
        let mut exported = UnGraph::with_capacity(self.node_count(), self.link_count());
        let indices: Vec<_> = self.heads.keys().map(|id| exported.add_node(*id)).collect();

        for (u, v, weight) in self.edges() {
            let endpoints = self
                .heads
                .get_index_of(&u)
                .and_then(|pu| indices.get(pu))
                .zip(self.heads.get_index_of(&v).and_then(|pv| indices.get(pv)));
            if let Some((a, b)) = endpoints {
                exported.add_edge(*a, *b, weight);
            }
        }

        exported
    }

    fn head(&self, id: NodeId) -> GraphResult<&AdjacencyListHead> {
        self.heads
            .get(&id)
            .ok_or_else(|| GraphError::invalid_node(id))
    }

    fn require(&self, id: NodeId) -> GraphResult<()> {
        self.head(id).map(|_| ())
    }
}

/// Link weights must be finite and non-negative
fn check_weight(u: NodeId, v: NodeId, weight: f64) -> GraphResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::invalid_weight(u, v, weight));
    }
    Ok(())
}

impl fmt::Display for NetGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for head in self.heads.values() {
            let edges = head
                .edges()
                .iter()
                .map(|adjacent| {
                    let neighbor = self.heads.get(&adjacent.neighbor()).map_or_else(
                        || adjacent.neighbor().to_string(),
                        |other| other.node().name().to_string(),
                    );
                    format!("({neighbor},{})", adjacent.weight())
                })
                .join(", ");
            writeln!(f, "{}: {{{edges}}}", head.node().name())?;
        }
        Ok(())
    }
}
