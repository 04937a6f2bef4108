//! `graphwalk mst` command - minimum spanning tree

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Edge, Prim};
use graphwalk_core::network::Network;

use crate::commands::Output;

/// Execute the mst command
pub fn execute(output: Output, network: &Network) -> Result<()> {
    let (total, tree) = Prim::new().produce_minimum_spanning_tree_for(&network.graph)?;

    // Each tree edge is stored in both directions; keep one of each pair
    let edges: Vec<&Edge<u32>> = tree
        .adjacencies()
        .values()
        .flatten()
        .filter(|edge| edge.source < edge.destination)
        .collect();

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "total": total,
                "spanning": !tree.is_disconnected(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            for edge in &edges {
                println!("{} - {} ({})", edge.source, edge.destination, edge.weight);
            }
            println!("total: {}", total);
        }
    }

    Ok(())
}
