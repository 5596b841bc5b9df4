//! Node and adjacency types.
//!
//! - [`NodeId`]: identity handle for a node
//! - [`Node`]: immutable label + 2D coordinate
//! - [`Adjacent`]: one endpoint of an undirected edge
//! - [`AdjacencyListHead`]: a node and its ordered edge list

use std::fmt;

/// Node identifier.
///
/// Identity is by id alone: two nodes with equal fields but different ids are
/// different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A spatial node: id, name and position. Immutable once created.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    x: f64,
    y: f64,
}

impl Node {
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
        }
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// One endpoint of an undirected edge, stored in the other endpoint's list.
///
/// Equality compares the neighbor only; the weight is ignored. This is what
/// keeps a second `add_link` between the same pair from creating a duplicate.
#[derive(Debug, Clone, Copy)]
pub struct Adjacent {
    neighbor: NodeId,
    weight: f64,
}

impl Adjacent {
    #[must_use]
    pub const fn new(neighbor: NodeId, weight: f64) -> Self {
        Self { neighbor, weight }
    }

    #[must_use]
    pub const fn neighbor(&self) -> NodeId {
        self.neighbor
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Adjacent {
    fn eq(&self, other: &Self) -> bool {
        self.neighbor == other.neighbor
    }
}

impl Eq for Adjacent {}

/// A node together with its ordered adjacency list.
#[derive(Debug, Clone)]
pub struct AdjacencyListHead {
    node: Node,
    edges: Vec<Adjacent>,
}

impl AdjacencyListHead {
    /// Head with an empty adjacency list.
    #[must_use]
    pub const fn new(node: Node) -> Self {
        Self {
            node,
            edges: Vec::new(),
        }
    }

    /// Head with a prepared adjacency list.
    ///
    /// Records repeating an earlier neighbor are dropped, keeping the first.
    #[must_use]
    pub fn with_edges(node: Node, edges: impl IntoIterator<Item = Adjacent>) -> Self {
        let mut head = Self::new(node);
        for adjacent in edges {
            head.push_unique(adjacent);
        }
        head
    }

    #[must_use]
    pub const fn node(&self) -> &Node {
        &self.node
    }

    #[must_use]
    pub fn edges(&self) -> &[Adjacent] {
        &self.edges
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn contains(&self, neighbor: NodeId) -> bool {
        self.edges.iter().any(|adjacent| adjacent.neighbor == neighbor)
    }

    /// Append `adjacent` unless its neighbor is already listed.
    ///
    /// Returns `true` if the record was appended.
    pub(crate) fn push_unique(&mut self, adjacent: Adjacent) -> bool {
        if self.edges.contains(&adjacent) {
            return false;
        }
        self.edges.push(adjacent);
        true
    }

    /// Remove the record for `neighbor`, returning whether one was present.
    pub(crate) fn remove_neighbor(&mut self, neighbor: NodeId) -> bool {
        self.edges
            .iter()
            .position(|adjacent| adjacent.neighbor == neighbor)
            .map(|pos| self.edges.remove(pos))
            .is_some()
    }

    pub(crate) fn retain_neighbors(&mut self, keep: impl FnMut(&Adjacent) -> bool) {
        self.edges.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_equality_ignores_weight() {
        let a = Adjacent::new(NodeId(1), 3.0);
        let b = Adjacent::new(NodeId(1), 7.5);
        let c = Adjacent::new(NodeId(2), 3.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn push_unique_keeps_first_weight() {
        let mut head = AdjacencyListHead::new(Node::new(NodeId(0), "A", 0.0, 0.0));
        assert!(head.push_unique(Adjacent::new(NodeId(1), 3.0)));
        assert!(!head.push_unique(Adjacent::new(NodeId(1), 9.0)));

        assert_eq!(head.degree(), 1);
        assert!((head.edges()[0].weight() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn remove_neighbor_reports_absence() {
        let mut head = AdjacencyListHead::with_edges(
            Node::new(NodeId(0), "A", 0.0, 0.0),
            [Adjacent::new(NodeId(1), 1.0), Adjacent::new(NodeId(2), 2.0)],
        );

        assert!(head.remove_neighbor(NodeId(1)));
        assert!(!head.remove_neighbor(NodeId(1)));
        assert_eq!(head.degree(), 1);
        assert!(head.contains(NodeId(2)));
    }

    #[test]
    fn with_edges_drops_repeated_neighbors() {
        let head = AdjacencyListHead::with_edges(
            Node::new(NodeId(0), "A", 0.0, 0.0),
            [
                Adjacent::new(NodeId(1), 1.0),
                Adjacent::new(NodeId(1), 4.0),
                Adjacent::new(NodeId(2), 2.0),
            ],
        );
        assert_eq!(head.degree(), 2);
    }

    #[test]
    fn node_id_displays_inner_value() {
        assert_eq!(NodeId::new(42).to_string(), "42");
        assert_eq!(NodeId::from(7).get(), 7);
    }
}
