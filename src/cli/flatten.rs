//! `flatten` subcommand: structural literal → execution paths

use crate::cli::utils::{render_paths, write_output};
use crate::error::{Error, Result};
use crate::flattener::{flatten_blocks, FlattenOptions};
use crate::flow::{build_flow, elide_empty_nodes, verify_connectivity, visualization};
use crate::structure::{assign_ids, parse_blocks};
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the `flatten` subcommand
pub struct FlattenArgs {
    /// Input literal file; stdin when absent
    pub input: Option<PathBuf>,
    /// Attach `#<ordinal>` suffixes
    pub ids: bool,
    /// Output format (text, json)
    pub format: String,
    /// Optional DOT rendering of each root block's flow graph
    pub dot: Option<PathBuf>,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
}

/// Flatten a structural literal read from a file or stdin
pub fn flatten(args: &FlattenArgs) -> Result<()> {
    let content = read_input(args.input.as_ref())?;
    let blocks = parse_blocks(&content)?;
    log::debug!("parsed {} root blocks", blocks.len());

    if let Some(dot_path) = &args.dot {
        let mut dot = String::new();
        let mut counter = 0;
        for block in blocks.iter().cloned() {
            let (tagged, next) = assign_ids(block, counter);
            counter = next;
            let mut flow = build_flow(&tagged)?;
            elide_empty_nodes(&mut flow);
            verify_connectivity(&flow)?;
            dot.push_str(&visualization::generate_dot(&flow));
        }
        std::fs::write(dot_path, dot).map_err(Error::from)?;
    }

    let options = FlattenOptions {
        unique_ids: args.ids,
    };
    let paths = flatten_blocks(blocks, &options)?;
    let rendered = render_paths(&paths, &args.format)?;
    write_output(&rendered, args.output.as_ref())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("failed to read {}: {}", path.display(), e))),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
