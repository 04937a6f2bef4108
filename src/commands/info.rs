//! `graphwalk info` command - summarize a network file

use std::path::Path;

use serde::Serialize;

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::network::Network;

use crate::commands::Output;

/// Summary of a loaded network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub file: String,
    pub vertices: usize,
    /// Directed edge records; each undirected edge counts twice
    pub edge_records: usize,
    pub declared_vertices: usize,
    pub declared_edges: usize,
    pub target: u32,
    pub disconnected: bool,
}

impl NetworkSummary {
    pub fn new(file: &Path, network: &Network) -> Self {
        NetworkSummary {
            file: file.display().to_string(),
            vertices: network.graph.vertex_count(),
            edge_records: network.graph.edge_count(),
            declared_vertices: network.declared_vertices,
            declared_edges: network.declared_edges,
            target: network.target,
            disconnected: network.graph.is_disconnected(),
        }
    }
}

/// Execute the info command
pub fn execute(output: Output, file: &Path, network: &Network) -> Result<()> {
    let summary = NetworkSummary::new(file, network);

    match output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            if !output.quiet {
                println!("{}", summary.file);
            }
            println!(
                "vertices: {} (declared {})",
                summary.vertices, summary.declared_vertices
            );
            println!(
                "edges: {} directed records (declared {} undirected)",
                summary.edge_records, summary.declared_edges
            );
            println!("target: {}", summary.target);
            println!(
                "disconnected: {}",
                if summary.disconnected { "yes" } else { "no" }
            );
        }
    }

    Ok(())
}
