//! `extract` subcommand: code snippets → execution paths via the external
//! parser process

use crate::cli::utils::{render_paths, write_output};
use crate::error::{Error, Result};
use crate::extractor::SequenceExtractor;
use crate::transport::ExtractorOptions;
use std::path::PathBuf;

/// Arguments for the `extract` subcommand
pub struct ExtractArgs {
    /// Path to the external parser jar
    pub jar: PathBuf,
    /// Snippet files to extract
    pub snippets: Vec<PathBuf>,
    /// Session options forwarded to the external process
    pub options: ExtractorOptions,
    /// Output format (text, json)
    pub format: String,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
}

/// Extract every snippet file through one external parser session
pub fn extract(args: &ExtractArgs) -> Result<()> {
    let mut extractor = SequenceExtractor::new(&args.jar, args.options.clone())?;
    let mut all_paths = Vec::new();
    for snippet in &args.snippets {
        let source = std::fs::read_to_string(snippet)
            .map_err(|e| Error::Io(format!("failed to read {}: {}", snippet.display(), e)))?;
        let paths = extractor.parse_snippet(&source)?;
        log::info!("{}: {} paths", snippet.display(), paths.len());
        all_paths.extend(paths);
    }
    extractor.close()?;

    let rendered = render_paths(&all_paths, &args.format)?;
    write_output(&rendered, args.output.as_ref())
}
