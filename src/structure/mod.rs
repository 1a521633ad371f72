//! Structural block model
//!
//! This module handles parsing the nested structural literal produced by the
//! external parser process and tagging its statements with occurrence ids.

pub mod parser;
pub mod tagger;

pub use parser::parse_blocks;
pub use tagger::assign_ids;

use serde::{Deserialize, Serialize};

/// One node of a structural block.
///
/// A block mixes sequential statements with mutually exclusive branch
/// alternatives (if/else, switch/case, try/catch). The classification is
/// decided once, at parse time: inside a sequence a nested list whose first
/// element is itself a list is an alternation, anything else is a nested
/// sequence; every element of an alternation is one alternative sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree<L> {
    /// Atomic statement token. Empty text marks a structurally required but
    /// semantically absent placeholder (e.g. an omitted else branch).
    Leaf(L),
    /// Strict left-to-right composition of nodes.
    Sequence(Vec<Tree<L>>),
    /// Mutually exclusive alternatives; exactly one is taken in any real
    /// execution. Each alternative is itself a sequence of nodes.
    Alternation(Vec<Vec<Tree<L>>>),
}

impl<L> Tree<L> {
    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Sequence(children) => children.iter().map(Tree::leaf_count).sum(),
            Tree::Alternation(alts) => alts
                .iter()
                .map(|alt| alt.iter().map(Tree::leaf_count).sum::<usize>())
                .sum(),
        }
    }
}

/// A statement leaf after identifier assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Occurrence id, unique across the entire run
    pub id: u64,
    /// Statement text as produced by the external parser
    pub text: String,
}

/// A parsed root block, statements still untagged
pub type Block = Tree<String>;

/// A root block after identifier assignment
pub type TaggedBlock = Tree<Statement>;
