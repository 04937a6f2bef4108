//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --directed

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphwalk_core::format::OutputFormat;
pub use args::MetricArg;
use parse::parse_output_format;

/// Graphwalk - graph algorithms over plain-text network files
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json; defaults to the config file, then human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events, including timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read each edge line as a one-way edge from the first vertex to the second
    #[arg(long, global = true)]
    pub directed: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a network file
    Info {
        /// Network file
        file: PathBuf,
    },

    /// Print the adjacency list with weights
    Adjacency {
        /// Network file
        file: PathBuf,
    },

    /// Breadth-first traversal order
    Bfs {
        /// Network file
        file: PathBuf,

        /// Vertex to start from
        #[arg(long)]
        from: u32,
    },

    /// Depth-first traversal order
    Dfs {
        /// Network file
        file: PathBuf,

        /// Vertex to start from
        #[arg(long)]
        from: u32,
    },

    /// Best route between two vertices
    Path {
        /// Network file
        file: PathBuf,

        /// Vertex to start from
        #[arg(long)]
        from: u32,

        /// Destination vertex (defaults to the file's target)
        #[arg(long)]
        to: Option<u32>,

        /// What the route minimizes: total weight or highest edge
        #[arg(long, value_enum, default_value = "total")]
        metric: MetricArg,
    },

    /// Count simple paths between two vertices
    Paths {
        /// Network file
        file: PathBuf,

        /// Vertex to start from
        #[arg(long)]
        from: u32,

        /// Destination vertex
        #[arg(long)]
        to: u32,
    },

    /// Check whether a cycle is reachable from a vertex
    Cycle {
        /// Network file
        file: PathBuf,

        /// Vertex to start from
        #[arg(long)]
        from: u32,
    },

    /// Topological order of the vertices
    Topo {
        /// Network file
        file: PathBuf,
    },

    /// Minimum spanning tree
    Mst {
        /// Network file
        file: PathBuf,
    },
}

impl Commands {
    /// Network file every subcommand reads
    pub fn file(&self) -> &PathBuf {
        match self {
            Commands::Info { file }
            | Commands::Adjacency { file }
            | Commands::Bfs { file, .. }
            | Commands::Dfs { file, .. }
            | Commands::Path { file, .. }
            | Commands::Paths { file, .. }
            | Commands::Cycle { file, .. }
            | Commands::Topo { file }
            | Commands::Mst { file } => file,
        }
    }
}
