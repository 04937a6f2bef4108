//! `graphwalk topo` command - topological order

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::network::Network;

use crate::commands::{join_ids, Output};

/// Execute the topo command
pub fn execute(output: Output, network: &Network) -> Result<()> {
    let graph = &network.graph;
    let order = graph.topological_sort();
    // An empty order is only a cycle when there was something to order
    let acyclic = !order.is_empty() || graph.is_empty();

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "acyclic": acyclic,
                "order": order,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if acyclic {
                println!("{}", join_ids(&order));
            } else {
                println!("cyclic");
            }
        }
    }

    Ok(())
}
