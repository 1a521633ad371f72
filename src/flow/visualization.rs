//! Flow graph visualization
//!
//! DOT export for inspecting a root block's flow graph.

use crate::flow::Flow;

/// Generate a DOT representation of a flow graph
pub fn generate_dot(flow: &Flow) -> String {
    let mut dot = String::new();
    dot.push_str("digraph flow {\n");
    dot.push_str("  rankdir=TB;\n");
    dot.push_str("  node [shape=box];\n\n");

    for node in flow.graph().node_indices() {
        if let Some(weight) = flow.graph().node_weight(node) {
            dot.push_str(&format!(
                "  {} [label=\"{}\"];\n",
                node.index(),
                escape_label(&weight.to_string())
            ));
        }
    }

    dot.push('\n');

    for edge in flow.graph().edge_indices() {
        if let Some((tail, head)) = flow.graph().edge_endpoints(edge) {
            dot.push_str(&format!("  {} -> {};\n", tail.index(), head.index()));
        }
    }

    dot.push_str("}\n");
    dot
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
