//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// treeform - Turn structured outlines into project trees
#[derive(Parser)]
#[command(name = "treeform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a file (or stdin) into a tree
    Parse {
        /// Input file, `-` or omitted for stdin
        file: Option<PathBuf>,

        /// Input format id (json, html, markdown, yaml)
        #[arg(short, long)]
        format: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// List the available input formats
    Formats,

    /// Print the example document for a format
    Example {
        /// Format id
        format: String,
    },

    /// Print the syntax help for a format
    Syntax {
        /// Format id
        format: String,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// How the parse command prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The tree as JSON
    #[default]
    Json,
    /// Node counts and highlighted items
    Summary,
}
