//! `graphwalk paths` command - count simple paths between two vertices

use graphwalk_core::config::LimitsConfig;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::network::Network;

use crate::commands::{lookup, Output};

/// Execute the paths command
pub fn execute(
    output: Output,
    network: &Network,
    limits: &LimitsConfig,
    from: u32,
    to: u32,
) -> Result<()> {
    let graph = &network.graph;
    let source = lookup(graph, from)?;
    let destination = lookup(graph, to)?;

    // Exhaustive enumeration: refuse graphs past the configured size
    if graph.vertex_count() > limits.max_path_count_vertices {
        return Err(GraphError::LimitExceeded {
            context: "path counting vertex".to_string(),
            actual: graph.vertex_count(),
            max: limits.max_path_count_vertices,
        });
    }

    let count = graph.number_of_paths_from(&source, &destination)?;

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "from": from,
                "to": to,
                "count": count,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if output.quiet {
                println!("{}", count);
            } else {
                println!("{} simple paths from {} to {}", count, from, to);
            }
        }
    }

    Ok(())
}
