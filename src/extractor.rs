//! End-to-end sequence extraction
//!
//! This module ties the external parser transport to the flatten pipeline:
//! a code snippet goes out over the wire, the structural literal comes back,
//! and the flattener turns it into branch-resolved statement sequences.

use crate::error::Result;
use crate::flattener::{flatten_literal, FlattenOptions};
use crate::transport::{ExtractorOptions, ParserClient};
use std::path::Path;

/// Extracts statement sequences from code snippets via the external parser
pub struct SequenceExtractor {
    client: ParserClient,
    flatten: FlattenOptions,
}

impl SequenceExtractor {
    /// Start an extraction session against the parser jar
    pub fn new(jar: &Path, options: ExtractorOptions) -> Result<Self> {
        let flatten = FlattenOptions {
            unique_ids: options.add_unique_ids,
        };
        let client = ParserClient::for_jar(jar, &options)?;
        Ok(SequenceExtractor { client, flatten })
    }

    /// Wrap an already-connected client (e.g. a custom parser command)
    pub fn with_client(client: ParserClient, flatten: FlattenOptions) -> Self {
        SequenceExtractor { client, flatten }
    }

    /// Parse one code snippet and return all of its execution paths
    pub fn parse_snippet(&mut self, source: &str) -> Result<Vec<Vec<String>>> {
        let literal = self.client.extract(source)?;
        flatten_literal(&literal, &self.flatten)
    }

    /// Raw structural literal for one snippet, without flattening
    pub fn parse_snippet_raw(&mut self, source: &str) -> Result<String> {
        self.client.extract(source)
    }

    /// Close the extraction session. Must be called after use; dropping the
    /// extractor without closing kills the external process instead of
    /// shutting it down cleanly.
    pub fn close(self) -> Result<()> {
        self.client.close()
    }
}
