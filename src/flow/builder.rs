//! Flow graph builder
//!
//! Turns a tagged root block into the graph of "may-execute-before" edges.
//! Every structural node exposes an entry frontier (the nodes at which its
//! execution may begin) and an exit frontier (the nodes at which it may
//! complete); connecting two structural neighbors adds one edge per
//! exit-frontier × entry-frontier combination. A leaf is its own frontier on
//! both sides, a sequence exposes its first/last child's frontiers after
//! wiring each adjacent pair internally, and an alternation exposes the
//! union of its alternatives' frontiers.

use crate::error::{Error, Result};
use crate::flow::{Flow, FlowGraph, FlowNode};
use crate::structure::{TaggedBlock, Tree};
use petgraph::stable_graph::NodeIndex;

/// Entry/exit frontier of a structural node
struct Frontier {
    entry: Vec<NodeIndex>,
    exit: Vec<NodeIndex>,
}

/// Build the flow graph for one tagged root block.
///
/// The block is bracketed by fresh START and END sentinels wired like a
/// three-element sequence, so START precedes every entry-frontier node of
/// the block and every exit-frontier node precedes END.
pub fn build_flow(block: &TaggedBlock) -> Result<Flow> {
    let mut graph = FlowGraph::new();
    let start = graph.add_node(FlowNode::Start);
    let end = graph.add_node(FlowNode::End);

    let frontier = wire(&mut graph, block)?;
    connect(&mut graph, &[start], &frontier.entry);
    connect(&mut graph, &frontier.exit, &[end]);

    Ok(Flow { graph, start, end })
}

/// Recursively add a structural node's statements to the graph and return
/// its frontier.
fn wire(graph: &mut FlowGraph, node: &TaggedBlock) -> Result<Frontier> {
    match node {
        Tree::Leaf(stmt) => {
            let index = graph.add_node(FlowNode::Stmt(stmt.clone()));
            Ok(Frontier {
                entry: vec![index],
                exit: vec![index],
            })
        }
        Tree::Sequence(children) => wire_sequence(graph, children),
        Tree::Alternation(alts) => {
            if alts.is_empty() {
                return Err(Error::structure("alternation with no alternatives"));
            }
            let mut entry = Vec::new();
            let mut exit = Vec::new();
            for alt in alts {
                let frontier = wire_sequence(graph, alt)?;
                entry.extend(frontier.entry);
                exit.extend(frontier.exit);
            }
            Ok(Frontier { entry, exit })
        }
    }
}

/// Wire each adjacent pair of a sequence and expose the first element's
/// entry frontier and the last element's exit frontier.
fn wire_sequence(graph: &mut FlowGraph, children: &[TaggedBlock]) -> Result<Frontier> {
    if children.is_empty() {
        return Err(Error::structure("empty sequence"));
    }
    let frontiers = children
        .iter()
        .map(|child| wire(graph, child))
        .collect::<Result<Vec<_>>>()?;
    for pair in frontiers.windows(2) {
        connect(graph, &pair[0].exit, &pair[1].entry);
    }
    Ok(Frontier {
        entry: frontiers[0].entry.clone(),
        exit: frontiers[frontiers.len() - 1].exit.clone(),
    })
}

/// Add one edge per from × to combination, collapsing duplicates
fn connect(graph: &mut FlowGraph, from: &[NodeIndex], to: &[NodeIndex]) {
    for &a in from {
        for &b in to {
            graph.update_edge(a, b, ());
        }
    }
}
