//! Seq-extract-rs: branch-aware statement sequence extractor
//!
//! This library turns nested structural descriptions of a code block's
//! control flow (sequential statements interleaved with mutually exclusive
//! branch groups) into the complete set of linear execution orders a
//! control-flow-sensitive reader could observe, suitable for sequence-based
//! consumers such as code-representation models. It also ships the client
//! for the external parser process that produces those descriptions.

pub mod cli;
pub mod error;
pub mod extractor;
pub mod flattener;
pub mod flow;
pub mod structure;
pub mod transport;

pub use error::{Error as ExtractorError, Result as ExtractorResult};
pub use extractor::SequenceExtractor;
pub use flattener::{flatten_blocks, flatten_literal, FlattenOptions};

// Re-export commonly used types
pub use flow::{Flow, FlowGraph, FlowNode};
pub use structure::{Block, Statement, Tree};
pub use transport::{ExtractorOptions, ParserClient};
