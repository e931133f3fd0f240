/*!
 * Configuration handling for CopyLS
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{CopyLsError, Result};

/// Command-line arguments for CopyLS
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "copyls",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy a directory tree and its file contents to the clipboard",
    long_about = "Walks one or more directories, renders a tree diagram alongside the contents of every readable text file, and places the combined report on the system clipboard."
)]
pub struct Args {
    /// Root directories to collect
    #[clap(default_value = ".")]
    pub directories: Vec<String>,

    /// Print the report to stdout instead of copying it to the clipboard
    #[clap(long)]
    pub print: bool,

    /// Only include the tree diagram, without file contents
    #[clap(long)]
    pub structure_only: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directories to collect, in argument order
    pub roots: Vec<PathBuf>,

    /// Write the report to stdout instead of the clipboard
    pub print: bool,

    /// Skip file contents and emit only the tree diagram
    pub structure_only: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            roots: args.directories.iter().map(PathBuf::from).collect(),
            print: args.print,
            structure_only: args.structure_only,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(CopyLsError::Config("no root directory given".to_string()));
        }

        for root in &self.roots {
            if !root.exists() || !root.is_dir() {
                return Err(CopyLsError::RootNotFound(root.display().to_string()));
            }
        }

        Ok(())
    }
}
