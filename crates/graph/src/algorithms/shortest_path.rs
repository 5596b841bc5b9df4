//! Dijkstra's single-pair shortest path
//!
//! Uses a binary heap with lazy deletion: a node may sit in the heap several
//! times with stale costs, and every pop after its first settlement is
//! skipped. The search stops as soon as the target is popped.
//!
//! # Complexity
//!
//! - Time: O(E log V)
//! - Space: O(V + E) for the scratch arrays and heap

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::NetGraph;
use crate::node::{Node, NodeId};

/// A shortest route and its total cost
#[derive(Debug, Clone)]
pub struct Route<'g> {
    pub nodes: Vec<&'g Node>,
    pub cost: f64,
}

impl Route<'_> {
    /// Ids along the route, source first
    #[must_use]
    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id()).collect()
    }

    /// Number of links traversed
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Heap entry, ordered so that `BinaryHeap` pops the lowest cost first
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    position: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Shortest path from `source` to `target`, both inclusive
///
/// Returns an empty path when `target` cannot be reached, and the single
/// node when `source == target`.
///
/// # Errors
///
/// Returns `InvalidNode` if either endpoint is not in the graph.
///
/// # Examples
///
/// ```
/// use geonet_graph::{NetGraph, NodeId, shortest_path};
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
/// let path: Vec<NodeId> = shortest_path(&graph, NodeId(0), NodeId(2))?
///     .iter()
///     .map(|node| node.id())
///     .collect();
/// assert_eq!(path, vec![NodeId(0), NodeId(1), NodeId(2)]);
/// # Ok(())
/// # }
/// ```
pub fn shortest_path(
    graph: &NetGraph,
    source: NodeId,
    target: NodeId,
) -> GraphResult<Vec<&Node>> {
    Ok(shortest_route(graph, source, target)?
        .map(|route| route.nodes)
        .unwrap_or_default())
}

/// Shortest route from `source` to `target` with its total cost
///
/// Returns `None` when `target` cannot be reached.
///
/// # Errors
///
/// Returns `InvalidNode` if either endpoint is not in the graph.
pub fn shortest_route(
    graph: &NetGraph,
    source: NodeId,
    target: NodeId,
) -> GraphResult<Option<Route<'_>>> {
    let start = graph.index_of(source)?;
    let goal = graph.index_of(target)?;
    let n = graph.node_count();

    let mut distance = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    if let Some(d) = distance.get_mut(start) {
        *d = 0.0;
    }
    heap.push(Frontier {
        cost: 0.0,
        position: start,
    });

    while let Some(Frontier { cost, position }) = heap.pop() {
        if position == goal {
            let route = Route {
                nodes: reconstruct(graph, &previous, start, goal)?,
                cost,
            };
            debug!(
                from = %source,
                to = %target,
                hops = route.hops(),
                cost,
                "Found shortest route"
            );
            return Ok(Some(route));
        }

        match settled.get_mut(position) {
            Some(done) if !*done => *done = true,
            _ => continue,
        }

        let id = graph
            .node_at(position)
            .map(|node| node.id())
            .ok_or_else(|| GraphError::index_out_of_bounds(position, n))?;

        for adjacent in graph.neighbors(id)? {
            let next = graph.index_of(adjacent.neighbor())?;
            let candidate = cost + adjacent.weight();
            let improves = distance.get(next).is_some_and(|best| candidate < *best);

            if improves {
                if let Some(best) = distance.get_mut(next) {
                    *best = candidate;
                }
                if let Some(link) = previous.get_mut(next) {
                    *link = Some(position);
                }
                heap.push(Frontier {
                    cost: candidate,
                    position: next,
                });
            }
        }
    }

    debug!(from = %source, to = %target, "Target unreachable");
    Ok(None)
}

/// Walk predecessor links back from `goal` to `start` and return the nodes
/// source first
///
/// The walk takes at most `node_count` steps, so a chain that cycles or never
/// reaches `start` fails with `BrokenRoute` instead of growing forever.
fn reconstruct<'g>(
    graph: &'g NetGraph,
    previous: &[Option<usize>],
    start: usize,
    goal: usize,
) -> GraphResult<Vec<&'g Node>> {
    let n = graph.node_count();
    let node_at = move |position: usize| {
        graph
            .node_at(position)
            .ok_or_else(|| GraphError::index_out_of_bounds(position, n))
    };

    let mut path = Vec::new();
    let mut cursor = goal;
    for _ in 0..n {
        path.push(node_at(cursor)?);
        if cursor == start {
            path.reverse();
            return Ok(path);
        }
        match previous.get(cursor).copied().flatten() {
            Some(position) => cursor = position,
            None => break,
        }
    }

    Err(GraphError::broken_route(
        node_at(start)?.id(),
        node_at(goal)?.id(),
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn chain(count: u64) -> NetGraph {
        let mut graph = NetGraph::new();
        for id in 0..count {
            graph
                .insert_node(NodeId(id), format!("n{id}"), 0.0, 0.0)
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_reconstruct_walks_back_to_start() {
        let graph = chain(3);
        let previous = vec![None, Some(0), Some(1)];

        let path = reconstruct(&graph, &previous, 0, 2).unwrap();
        let ids: Vec<NodeId> = path.iter().map(|node| node.id()).collect();
        assert_eq!(ids, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_reconstruct_stops_on_cyclic_predecessors() {
        let graph = chain(3);
        // 1 and 2 point at each other, so walking back from 2 never reaches 0
        let previous = vec![None, Some(2), Some(1)];

        let result = reconstruct(&graph, &previous, 0, 2);
        assert!(matches!(
            result,
            Err(GraphError::BrokenRoute {
                from: NodeId(0),
                to: NodeId(2)
            })
        ));
    }

    #[test]
    fn test_reconstruct_reports_chain_that_ends_early() {
        let graph = chain(3);
        let result = reconstruct(&graph, &[None, None, Some(1)], 0, 2);
        assert!(matches!(result, Err(GraphError::BrokenRoute { .. })));
    }

    #[test]
    fn test_frontier_pops_lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        for (cost, position) in [(3.0, 0), (1.0, 1), (2.0, 2), (1.0, 3)] {
            heap.push(Frontier { cost, position });
        }

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop())
            .map(|entry| entry.position)
            .collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_route_reports_cost_and_hops() {
        let mut graph = NetGraph::new();
        for id in 0..4 {
            graph
                .insert_node(NodeId(id), format!("node {id}"), 0.0, 0.0)
                .unwrap();
        }
        graph.add_link(NodeId(0), NodeId(1), 2.0).unwrap();
        graph.add_link(NodeId(1), NodeId(3), 2.0).unwrap();
        graph.add_link(NodeId(0), NodeId(2), 1.0).unwrap();
        graph.add_link(NodeId(2), NodeId(3), 4.0).unwrap();

        let route = shortest_route(&graph, NodeId(0), NodeId(3))
            .unwrap()
            .expect("Should reach target");

        assert_eq!(route.ids(), vec![NodeId(0), NodeId(1), NodeId(3)]);
        assert_eq!(route.hops(), 2);
        assert!((route.cost - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_endpoint_is_an_error() {
        let mut graph = NetGraph::new();
        graph.insert_node(NodeId(0), "A", 0.0, 0.0).unwrap();

        let result = shortest_path(&graph, NodeId(0), NodeId(1));
        assert!(matches!(result, Err(GraphError::InvalidNode(NodeId(1)))));
    }

    #[test]
    fn test_zero_weight_links_are_followed() {
        let mut graph = NetGraph::new();
        for id in 0..3 {
            graph
                .insert_node(NodeId(id), format!("node {id}"), 0.0, 0.0)
                .unwrap();
        }
        graph.add_link(NodeId(0), NodeId(1), 0.0).unwrap();
        graph.add_link(NodeId(1), NodeId(2), 0.0).unwrap();

        let route = shortest_route(&graph, NodeId(0), NodeId(2)).unwrap().unwrap();
        assert_eq!(route.hops(), 2);
        assert!(route.cost.abs() < f64::EPSILON);
    }
}
