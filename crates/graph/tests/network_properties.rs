//! Network Property-Based Tests
//!
//! Generates random geometric networks and checks invariants that MUST hold
//! for every one of them. Spanning trees and routes are cross-checked
//! against petgraph's reference implementations.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use geonet_graph::{
    AdjacencyListHead, GraphError, NetGraph, Network, NetworkConfig, NodeId,
    minimum_spanning_tree, shortest_route,
};
use petgraph::algo::{connected_components, dijkstra, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn network(nodes: usize, side: f64, seed: u64) -> Result<NetGraph, GraphError> {
    let config = NetworkConfig::new()
        .with_node_count(nodes)
        .with_side(side)
        .with_seed(seed);
    Network::build(&config).map(Network::into_graph)
}

fn reference_mst_weight(graph: &NetGraph) -> f64 {
    min_spanning_tree(&graph.to_petgraph())
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every record has its mirror, and link_count is half the records
    #[test]
    fn prop_links_are_symmetric(
        nodes in 0usize..60,
        side in 10.0f64..120.0,
        seed in any::<u64>(),
    ) {
        let graph = network(nodes, side, seed)?;

        let records: usize = graph.heads().map(AdjacencyListHead::degree).sum();
        prop_assert_eq!(records % 2, 0);
        prop_assert_eq!(graph.link_count(), records / 2);

        for head in graph.heads() {
            let id = head.node().id();
            for adjacent in head.edges() {
                let back = graph.neighbors(adjacent.neighbor())?;
                let mirrored = back.iter().any(|other| {
                    other.neighbor() == id && (other.weight() - adjacent.weight()).abs() < TOLERANCE
                });
                prop_assert!(mirrored, "{} -> {} has no mirror", id, adjacent.neighbor());
            }
        }
    }

    /// Property: Prim agrees with petgraph, and fails exactly on disconnected networks
    #[test]
    fn prop_mst_matches_reference(
        nodes in 1usize..40,
        side in 10.0f64..90.0,
        seed in any::<u64>(),
    ) {
        let graph = network(nodes, side, seed)?;
        let components = connected_components(&graph.to_petgraph());

        match minimum_spanning_tree(&graph) {
            Ok(tree) => {
                prop_assert_eq!(components, 1);
                prop_assert_eq!(tree.edges().len(), nodes - 1);
                let expected = reference_mst_weight(&graph);
                prop_assert!(
                    (tree.total_weight() - expected).abs() < TOLERANCE,
                    "prim {} vs reference {}",
                    tree.total_weight(),
                    expected
                );
            }
            Err(GraphError::DisconnectedGraph { reached, total }) => {
                prop_assert!(components > 1);
                prop_assert!(reached < total);
            }
            Err(other) => return Err(TestCaseError::fail(other.to_string())),
        }
    }

    /// Property: Dijkstra cost agrees with petgraph and the path is a real walk
    #[test]
    fn prop_route_matches_reference(
        nodes in 1usize..50,
        side in 10.0f64..90.0,
        seed in any::<u64>(),
        target_pick in any::<prop::sample::Index>(),
    ) {
        let graph = network(nodes, side, seed)?;
        let target_position = target_pick.index(nodes);
        let target = NodeId(target_position as u64);

        let exported = graph.to_petgraph();
        let reference = dijkstra(
            &exported,
            NodeIndex::new(0),
            Some(NodeIndex::new(target_position)),
            |edge| *edge.weight(),
        );
        let expected = reference.get(&NodeIndex::new(target_position)).copied();

        match (shortest_route(&graph, NodeId(0), target)?, expected) {
            (Some(route), Some(cost)) => {
                prop_assert!((route.cost - cost).abs() < TOLERANCE);
                prop_assert_eq!(route.nodes.first().map(|node| node.id()), Some(NodeId(0)));
                prop_assert_eq!(route.nodes.last().map(|node| node.id()), Some(target));

                let mut walked = 0.0;
                for pair in route.nodes.windows(2) {
                    if let [from, to] = pair {
                        let link = graph
                            .neighbors(from.id())?
                            .iter()
                            .find(|adjacent| adjacent.neighbor() == to.id());
                        prop_assert!(link.is_some(), "{} and {} are not linked", from.id(), to.id());
                        walked += link.map_or(0.0, |adjacent| adjacent.weight());
                    }
                }
                prop_assert!((walked - route.cost).abs() < TOLERANCE);
            }
            (None, None) => {}
            (ours, theirs) => {
                return Err(TestCaseError::fail(format!(
                    "reachability disagrees: ours {:?}, reference {:?}",
                    ours.map(|route| route.cost),
                    theirs
                )));
            }
        }
    }

    /// Property: deleting a node scrubs it from every list and keeps the invariants
    #[test]
    fn prop_delete_scrubs_references(
        nodes in 1usize..40,
        seed in any::<u64>(),
        victim_pick in any::<prop::sample::Index>(),
    ) {
        let mut graph = network(nodes, 60.0, seed)?;
        let victim = NodeId(victim_pick.index(nodes) as u64);
        let degree = graph.degree(victim)?;
        let links_before = graph.link_count();

        graph.delete_node(victim)?;

        prop_assert_eq!(graph.node_count(), nodes - 1);
        prop_assert_eq!(graph.link_count(), links_before - degree);
        prop_assert!(graph.heads().all(|head| !head.contains(victim)));
        prop_assert!(matches!(graph.degree(victim), Err(GraphError::InvalidNode(_))));
    }
}
