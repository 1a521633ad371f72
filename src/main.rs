use clap::{Parser, Subcommand};
use miette::{miette, Result};
use std::path::PathBuf;

use seq_extract_rs::cli;
use seq_extract_rs::transport::ExtractorOptions;

#[derive(Parser)]
#[command(name = "seq-extract-rs")]
#[command(about = "Branch-aware statement sequence extractor for code snippets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a structural literal into execution paths
    Flatten {
        /// Input literal file (defaults to stdin)
        input: Option<PathBuf>,

        /// Attach #ordinal suffixes to statements
        #[arg(long)]
        ids: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write a DOT rendering of each root block's flow graph
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract execution paths from code snippets via the external parser
    Extract {
        /// Path to the external parser jar
        #[arg(long)]
        jar: PathBuf,

        /// Snippet files to extract
        #[arg(required = true)]
        snippets: Vec<PathBuf>,

        /// Retain function call types
        #[arg(long)]
        keep_call_types: bool,

        /// Retain literals (primitives)
        #[arg(long)]
        keep_literals: bool,

        /// Drop branch alternatives instead of keeping all of them
        #[arg(long)]
        drop_branches: bool,

        /// Request tree output instead of sequences
        #[arg(long)]
        tree: bool,

        /// Request unflattened output
        #[arg(long)]
        no_flatten: bool,

        /// Attach #ordinal suffixes to statements
        #[arg(long)]
        ids: bool,

        /// Restart the parser process after this many messages
        #[arg(long, default_value_t = 10_000)]
        restart_threshold: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Flatten {
            input,
            ids,
            format,
            dot,
            output,
        } => {
            let args = cli::flatten::FlattenArgs {
                input,
                ids,
                format,
                dot,
                output,
            };
            cli::flatten::flatten(&args).map_err(|e| miette!("{}", e))
        }
        Commands::Extract {
            jar,
            snippets,
            keep_call_types,
            keep_literals,
            drop_branches,
            tree,
            no_flatten,
            ids,
            restart_threshold,
            format,
            output,
        } => {
            let options = ExtractorOptions {
                keep_function_call_types: keep_call_types,
                keep_literals,
                keep_branches: !drop_branches,
                output_tree: tree,
                flatten_output: !no_flatten,
                add_unique_ids: ids,
                restart_threshold,
            };
            let args = cli::extract::ExtractArgs {
                jar,
                snippets,
                options,
                format,
                output,
            };
            cli::extract::extract(&args).map_err(|e| miette!("{}", e))
        }
    }
}
