//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

use crate::tree::Value;

/// Binary tree toolkit: path-based construction, YAML persistence, and visual rendering
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    /// Debug verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a tree file holding a single root node
    New {
        /// Root value (YAML scalar)
        value: Value,

        /// Tree file to write
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Insert a node at an L/R path and save the tree
    Insert {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Direction path from the root, e.g. LR
        path: String,

        /// Value for the new node (YAML scalar)
        value: Value,

        /// Write here instead of updating the file in place
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Render a tree file in the visual text format
    Render {
        /// Tree file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Build the sample tree, round-trip it through YAML, render both
    Demo,
}
