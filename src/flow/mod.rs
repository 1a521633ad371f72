//! Flow graph module
//!
//! This module handles building and analyzing the "may-execute-before" graph
//! of a tagged root block: construction from the structural tree, removal of
//! empty placeholder nodes, and enumeration of all execution paths.

pub mod builder;
pub mod elision;
pub mod paths;
pub mod visualization;

pub use builder::build_flow;
pub use elision::{elide_empty_nodes, verify_connectivity};
pub use paths::enumerate_paths;

use crate::structure::Statement;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::fmt;

/// Node in the flow graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowNode {
    /// Synthetic entry sentinel bracketing a root block
    Start,
    /// Synthetic exit sentinel bracketing a root block
    End,
    /// A tagged statement occurrence
    Stmt(Statement),
}

impl FlowNode {
    /// Whether this node is one of the START/END sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self, FlowNode::Start | FlowNode::End)
    }

    /// Render this node for path output; sentinels are stripped.
    ///
    /// With `unique_ids` the text carries a `#<ordinal>` suffix so that
    /// occurrences with identical text stay distinguishable.
    pub fn render(&self, unique_ids: bool) -> Option<String> {
        match self {
            FlowNode::Stmt(stmt) if unique_ids => Some(format!("{}#{}", stmt.text, stmt.id)),
            FlowNode::Stmt(stmt) => Some(stmt.text.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for FlowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowNode::Start => write!(f, "START"),
            FlowNode::End => write!(f, "END"),
            FlowNode::Stmt(stmt) => write!(f, "{}#{}", stmt.text, stmt.id),
        }
    }
}

/// The underlying graph. Edges mean "may immediately execute before".
///
/// A stable graph keeps node indices valid across removals, which elision
/// relies on; node identity is the index, never the rendered text.
pub type FlowGraph = StableDiGraph<FlowNode, ()>;

/// Flow graph of one root block, bracketed by its START/END sentinels
pub struct Flow {
    pub(crate) graph: FlowGraph,
    pub(crate) start: NodeIndex,
    pub(crate) end: NodeIndex,
}

impl Flow {
    /// Get the underlying graph
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// Get the START sentinel node
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Get the END sentinel node
    pub fn end(&self) -> NodeIndex {
        self.end
    }

    /// Number of nodes, sentinels included
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
