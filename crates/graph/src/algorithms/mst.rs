//! Prim's minimum spanning tree
//!
//! Dense O(N²) variant: each round scans every unsettled position for the
//! cheapest edge into the tree, then relaxes the new member's neighbors.
//! Scratch arrays are indexed by storage position, never by node id.
//!
//! # Complexity
//!
//! - Time: O(N² + E)
//! - Space: O(N²) for the adjacency matrix of the result

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::NetGraph;
use crate::node::NodeId;

/// A tree edge, from the parent already in the tree to the child it adopted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub weight: f64,
}

/// Result of [`minimum_spanning_tree`]
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    /// Symmetric 0/1 matrix indexed by graph position
    matrix: Vec<Vec<u8>>,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    /// Symmetric N×N matrix; `matrix[i][j] == 1` when positions `i` and `j`
    /// are joined by a tree edge
    #[must_use]
    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    #[must_use]
    pub fn into_matrix(self) -> Vec<Vec<u8>> {
        self.matrix
    }

    /// Tree edges ordered by the position of their child
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Whether positions `i` and `j` are joined in the tree
    #[must_use]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.matrix
            .get(i)
            .and_then(|row| row.get(j))
            .is_some_and(|cell| *cell == 1)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.len()
    }
}

/// Compute the minimum spanning tree of a connected graph, rooted at
/// position 0
///
/// Ties between equally cheap candidates go to the lowest position.
///
/// # Errors
///
/// Returns `DisconnectedGraph` when some node cannot be reached from
/// position 0.
///
/// # Examples
///
/// ```
/// use geonet_graph::{NetGraph, NodeId, minimum_spanning_tree};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = NetGraph::new();
/// for id in 0..3 {
///     graph.insert_node(NodeId(id), format!("n{id}"), 0.0, 0.0)?;
/// }
/// graph.add_link(NodeId(0), NodeId(1), 1.0)?;
/// graph.add_link(NodeId(1), NodeId(2), 1.0)?;
/// graph.add_link(NodeId(0), NodeId(2), 5.0)?;
///
/// let tree = minimum_spanning_tree(&graph)?;
/// assert!(tree.contains(0, 1));
/// assert!(tree.contains(1, 2));
/// assert!(!tree.contains(0, 2));
/// # Ok(())
/// # }
/// ```
pub fn minimum_spanning_tree(graph: &NetGraph) -> GraphResult<SpanningTree> {
    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<(usize, f64)>> = vec![None; n];

    if let Some(root) = distance.first_mut() {
        *root = 0.0;
    }

    for round in 0..n {
        let Some(current) = cheapest_unvisited(&distance, &visited) else {
            return Err(GraphError::disconnected(round, n));
        };
        if let Some(flag) = visited.get_mut(current) {
            *flag = true;
        }

        let id = graph
            .node_at(current)
            .map(|node| node.id())
            .ok_or_else(|| GraphError::index_out_of_bounds(current, n))?;

        for adjacent in graph.neighbors(id)? {
            let neighbor = graph.index_of(adjacent.neighbor())?;
            let settled = visited.get(neighbor).copied().unwrap_or(true);
            let improves = distance
                .get(neighbor)
                .is_some_and(|best| adjacent.weight() < *best);

            if !settled && improves {
                if let Some(best) = distance.get_mut(neighbor) {
                    *best = adjacent.weight();
                }
                if let Some(link) = parent.get_mut(neighbor) {
                    *link = Some((current, adjacent.weight()));
                }
            }
        }
    }

    let tree = assemble(graph, &parent)?;
    debug!(
        nodes = n,
        edges = tree.edges.len(),
        total_weight = tree.total_weight(),
        "Built minimum spanning tree"
    );
    Ok(tree)
}

/// Unvisited position with the smallest finite distance, first one on ties
fn cheapest_unvisited(distance: &[f64], visited: &[bool]) -> Option<usize> {
    distance
        .iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (best, seen))| !**seen && best.is_finite())
        .fold(None, |found: Option<(usize, f64)>, (position, (best, _))| {
            match found {
                Some((_, lowest)) if lowest <= *best => found,
                _ => Some((position, *best)),
            }
        })
        .map(|(position, _)| position)
}

fn assemble(graph: &NetGraph, parent: &[Option<(usize, f64)>]) -> GraphResult<SpanningTree> {
    let n = parent.len();
    let mut matrix = vec![vec![0_u8; n]; n];
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    let id_at = |position: usize| {
        graph
            .node_at(position)
            .map(|node| node.id())
            .ok_or_else(|| GraphError::index_out_of_bounds(position, n))
    };

    for (child, link) in parent.iter().enumerate().skip(1) {
        let Some((from, weight)) = *link else {
            return Err(GraphError::disconnected(child, n));
        };

        if let Some(cell) = matrix.get_mut(from).and_then(|row| row.get_mut(child)) {
            *cell = 1;
        }
        if let Some(cell) = matrix.get_mut(child).and_then(|row| row.get_mut(from)) {
            *cell = 1;
        }
        edges.push(TreeEdge {
            parent: id_at(from)?,
            child: id_at(child)?,
            weight,
        });
    }

    Ok(SpanningTree { matrix, edges })
}
