//! CLI commands for graphwalk

pub mod adjacency;
pub mod cycle;
pub mod dispatch;
pub mod info;
pub mod mst;
pub mod path;
pub mod paths;
pub mod topo;
pub mod traverse;

use graphwalk_core::bail_unknown_vertex;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Graph, Vertex};

/// Output settings resolved from flags and configuration
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Resolve a vertex id given on the command line
pub fn lookup(graph: &Graph<u32>, id: u32) -> Result<Vertex<u32>> {
    let vertex = Vertex::new(id);
    if !graph.contains(&vertex) {
        bail_unknown_vertex!(id);
    }
    Ok(vertex)
}

/// Space-separated vertex ids
pub fn join_ids(vertices: &[Vertex<u32>]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
