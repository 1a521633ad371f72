//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands.

pub mod extract;
pub mod flatten;

/// Common CLI utilities
pub mod utils {
    use crate::error::{Error, Result};
    use std::path::PathBuf;

    /// Render a path set as text (one path per line) or JSON
    pub fn render_paths(paths: &[Vec<String>], format: &str) -> Result<String> {
        if format == "json" {
            serde_json::to_string_pretty(paths)
                .map_err(|e| Error::internal(format!("failed to serialize paths: {}", e)))
        } else {
            Ok(paths
                .iter()
                .map(|path| path.join(" "))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    /// Write output to file or stdout
    pub fn write_output(content: &str, output_path: Option<&PathBuf>) -> Result<()> {
        match output_path {
            Some(path) => std::fs::write(path, content).map_err(Error::from),
            None => {
                println!("{}", content);
                Ok(())
            }
        }
    }
}
