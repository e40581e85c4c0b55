//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Organization chart viewer: hierarchical JSON documents, terminal rendering, zoom and search
#[derive(Parser, Debug)]
#[command(name = "orgview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the hierarchy document and print the chart
    Show {
        /// Document location: URL or file path (default: from settings)
        source: Option<String>,
    },

    /// Highlight nodes matching a term and scroll to the first match
    Search {
        /// Search term (case-insensitive substring)
        term: String,
        /// Document location: URL or file path (default: from settings)
        source: Option<String>,
    },

    /// Interactive session: zoom and search the rendered chart
    View {
        /// Document location: URL or file path (default: from settings)
        source: Option<String>,
    },

    /// Generate a hierarchy document from a flat people listing
    Build {
        /// People listing: JSON array of person records
        people: PathBuf,
        /// Root person (default: the unique person without supervisors)
        #[arg(short, long)]
        root: Option<String>,
        /// Wrap the tree under an umbrella root: NAME or NAME:TITLE
        #[arg(short, long)]
        wrap: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show status
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
