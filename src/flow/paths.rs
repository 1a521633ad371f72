//! Path enumeration
//!
//! Depth-first enumeration of every simple START→END path in the flow
//! graph. The number of paths is the product of the alternation arities
//! along the block (k sequential two-way branches give 2^k paths); all of
//! them are materialized, deliberately without a cap or streaming.

use crate::flow::Flow;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;
use std::collections::HashSet;

/// Enumerate all simple START→END paths.
///
/// Each path is rendered with the sentinels stripped; `unique_ids` controls
/// whether statements keep their `#<ordinal>` suffix.
pub fn enumerate_paths(flow: &Flow, unique_ids: bool) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Vec::new();
    walk(flow, flow.start, &mut visited, &mut current, &mut paths, unique_ids);
    paths
}

fn walk(
    flow: &Flow,
    node: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
    current: &mut Vec<NodeIndex>,
    paths: &mut Vec<Vec<String>>,
    unique_ids: bool,
) {
    visited.insert(node);
    current.push(node);

    if node == flow.end {
        paths.push(render(flow, current, unique_ids));
    } else {
        for succ in flow.graph.neighbors_directed(node, Direction::Outgoing) {
            if !visited.contains(&succ) {
                walk(flow, succ, visited, current, paths, unique_ids);
            }
        }
    }

    current.pop();
    visited.remove(&node);
}

fn render(flow: &Flow, nodes: &[NodeIndex], unique_ids: bool) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|&node| flow.graph.node_weight(node))
        .filter_map(|weight| weight.render(unique_ids))
        .collect()
}
