use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{CheckError, CheckResult};

/// Node identifier as written in the graph file
pub type NodeId = i64;

/// Undirected adjacency: node -> set of neighbors. Symmetric.
pub type AdjacencyList = HashMap<NodeId, HashSet<NodeId>>;

pub fn build_adjacency_list(nodes: &HashSet<NodeId>, edges: &[(NodeId, NodeId)]) -> AdjacencyList {
    let mut adjacency_list: AdjacencyList = nodes
        .iter()
        .map(|&node| (node, HashSet::new()))
        .collect(); // degree-zero nodes still get an entry

    for &(from_node, to_node) in edges {
        if from_node == to_node {
            warn!(node = from_node, "self-loop");
        }
        for endpoint in [from_node, to_node] {
            if !nodes.contains(&endpoint) {
                warn!(node = endpoint, "edge endpoint was never declared as a node");
            }
        }
        adjacency_list.entry(from_node).or_default().insert(to_node);
        adjacency_list.entry(to_node).or_default().insert(from_node);
        // both directions; repeated edges collapse in the set
    }

    debug!(nodes = adjacency_list.len(), "adjacency list built");
    adjacency_list
}

pub fn neighbors(adjacency_list: &AdjacencyList, node: NodeId) -> CheckResult<&HashSet<NodeId>> {
    adjacency_list
        .get(&node)
        .ok_or(CheckError::UnknownNode(node))
}

pub fn degree(adjacency_list: &AdjacencyList, node: NodeId) -> CheckResult<usize> {
    neighbors(adjacency_list, node).map(HashSet::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> AdjacencyList {
        let nodes = HashSet::from([1, 2, 3, 4]);
        build_adjacency_list(&nodes, &[(1, 2), (1, 3), (2, 3), (3, 4)])
    }

    #[test]
    fn test_build_adjacency_list() {
        let adjacency = sample();
        assert_eq!(adjacency[&1], HashSet::from([2, 3]));
        assert_eq!(adjacency[&2], HashSet::from([1, 3]));
        assert_eq!(adjacency[&3], HashSet::from([1, 2, 4]));
        assert_eq!(adjacency[&4], HashSet::from([3]));
    }

    #[test]
    fn test_isolated_node_has_empty_entry() {
        let nodes = HashSet::from([1, 2, 5]);
        let adjacency = build_adjacency_list(&nodes, &[(1, 2)]);
        assert!(adjacency.contains_key(&5));
        assert!(adjacency[&5].is_empty());
        assert_eq!(degree(&adjacency, 5).unwrap(), 0);
    }

    #[test]
    fn test_repeated_edges_collapse() {
        let nodes = HashSet::from([1, 2]);
        let adjacency = build_adjacency_list(&nodes, &[(1, 2), (2, 1), (1, 2)]);
        assert_eq!(degree(&adjacency, 1).unwrap(), 1);
        assert_eq!(degree(&adjacency, 2).unwrap(), 1);
    }

    #[test]
    fn test_undeclared_endpoint_gets_entry() {
        let nodes = HashSet::from([1]);
        let adjacency = build_adjacency_list(&nodes, &[(1, 7)]);
        assert_eq!(adjacency[&7], HashSet::from([1]));
    }

    #[test]
    fn test_degree_unknown_node() {
        let adjacency = sample();
        assert!(matches!(degree(&adjacency, 99), Err(CheckError::UnknownNode(99))));
    }

    proptest! {
        #[test]
        fn prop_declared_nodes_present_and_symmetric(
            nodes in prop::collection::hash_set(0i64..30, 0..15),
            edges in prop::collection::vec((0i64..30, 0i64..30), 0..80),
        ) {
            let adjacency = build_adjacency_list(&nodes, &edges);
            for node in &nodes {
                prop_assert!(adjacency.contains_key(node));
            }
            for &(u, v) in &edges {
                prop_assert!(adjacency[&u].contains(&v));
                prop_assert!(adjacency[&v].contains(&u));
            }
            for (a, ns) in &adjacency {
                for b in ns {
                    prop_assert!(adjacency[b].contains(a));
                }
            }
        }
    }
}
