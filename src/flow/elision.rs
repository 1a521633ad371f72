//! Empty-node elision
//!
//! Leaves with empty text mark structure with no observable effect, e.g. an
//! omitted else branch. They must not appear in path output, but every path
//! routed through them has to survive, so each one is removed after wiring
//! its predecessors directly to its successors.

use crate::error::{Error, Result};
use crate::flow::{Flow, FlowNode};
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

/// Remove every empty-text statement node from the flow graph.
///
/// The candidate set is recomputed after each removal: rewiring one empty
/// node can move edges onto another, so chains of adjacent empty nodes drain
/// one at a time. A node missing predecessors or successors contributes no
/// replacement edges on that side but is still removed. Sentinels carry no
/// text and are never candidates.
pub fn elide_empty_nodes(flow: &mut Flow) {
    while let Some(node) = find_empty_node(flow) {
        let preds: Vec<NodeIndex> = flow
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .collect();
        let succs: Vec<NodeIndex> = flow
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        log::debug!(
            "eliding empty node {:?} ({} predecessors, {} successors)",
            node,
            preds.len(),
            succs.len()
        );
        for &pred in &preds {
            for &succ in &succs {
                flow.graph.update_edge(pred, succ, ());
            }
        }
        flow.graph.remove_node(node);
    }
}

fn find_empty_node(flow: &Flow) -> Option<NodeIndex> {
    flow.graph.node_indices().find(|&node| {
        matches!(
            flow.graph.node_weight(node),
            Some(FlowNode::Stmt(stmt)) if stmt.text.is_empty()
        )
    })
}

/// Re-verify the connectivity invariant after elision: every node except
/// START has at least one predecessor and every node except END at least one
/// successor. A violation is a programming-contract breach, not bad input.
pub fn verify_connectivity(flow: &Flow) -> Result<()> {
    for node in flow.graph.node_indices() {
        if node != flow.start
            && flow
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .next()
                .is_none()
        {
            return Err(Error::internal(format!(
                "node {:?} has no predecessor after elision",
                node
            )));
        }
        if node != flow.end
            && flow
                .graph
                .neighbors_directed(node, Direction::Outgoing)
                .next()
                .is_none()
        {
            return Err(Error::internal(format!(
                "node {:?} has no successor after elision",
                node
            )));
        }
    }
    Ok(())
}
