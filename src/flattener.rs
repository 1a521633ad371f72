//! Flatten pipeline
//!
//! This module orchestrates the whole flattening of a structural literal:
//! parse the root blocks, tag each one with occurrence ids (threading the
//! counter so ids never repeat across blocks), build its flow graph, elide
//! the empty placeholder nodes, and enumerate every execution path. The
//! per-block path lists are concatenated in the order the blocks appeared.

use crate::error::Result;
use crate::flow::{build_flow, elide_empty_nodes, enumerate_paths, verify_connectivity};
use crate::structure::{assign_ids, parse_blocks, Block};
use serde::{Deserialize, Serialize};

/// Output options for the flatten pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenOptions {
    /// Attach `#<ordinal>` suffixes so identical statement texts from
    /// different occurrences stay distinguishable
    pub unique_ids: bool,
}

/// Flatten a structural literal into all of its execution paths
pub fn flatten_literal(content: &str, options: &FlattenOptions) -> Result<Vec<Vec<String>>> {
    flatten_blocks(parse_blocks(content)?, options)
}

/// Flatten already-parsed root blocks into all of their execution paths
pub fn flatten_blocks(blocks: Vec<Block>, options: &FlattenOptions) -> Result<Vec<Vec<String>>> {
    let mut all_paths = Vec::new();
    let mut counter = 0;
    for block in blocks {
        let (paths, next) = flatten_block(block, counter, options)?;
        all_paths.extend(paths);
        counter = next;
    }
    Ok(all_paths)
}

/// Flatten one root block, starting from the given occurrence id counter.
///
/// Returns the block's paths together with the updated counter, which is the
/// starting counter for the next root block.
pub fn flatten_block(
    block: Block,
    counter: u64,
    options: &FlattenOptions,
) -> Result<(Vec<Vec<String>>, u64)> {
    let (tagged, counter) = assign_ids(block, counter);
    let mut flow = build_flow(&tagged)?;
    elide_empty_nodes(&mut flow);
    verify_connectivity(&flow)?;
    Ok((enumerate_paths(&flow, options.unique_ids), counter))
}
