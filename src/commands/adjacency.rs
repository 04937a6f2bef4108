//! `graphwalk adjacency` command - print the adjacency list

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::network::Network;

use crate::commands::Output;

/// Execute the adjacency command
pub fn execute(output: Output, network: &Network) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            let vertices: Vec<_> = network
                .graph
                .adjacencies()
                .iter()
                .map(|(vertex, edges)| {
                    serde_json::json!({
                        "vertex": vertex,
                        "edges": edges,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&vertices)?);
        }
        OutputFormat::Human => {
            print!("{}", network.graph);
        }
    }

    Ok(())
}
