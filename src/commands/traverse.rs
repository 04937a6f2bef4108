//! `graphwalk bfs` / `graphwalk dfs` commands - traversal order from a vertex

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::network::Network;

use crate::commands::{join_ids, lookup, Output};

/// Which traversal to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Breadth,
    Depth,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::Breadth => "bfs",
            Order::Depth => "dfs",
        }
    }
}

/// Execute a traversal command
pub fn execute(output: Output, network: &Network, from: u32, order: Order) -> Result<()> {
    let graph = &network.graph;
    let start = lookup(graph, from)?;

    let visited = match order {
        Order::Breadth => graph.breadth_first_search_from(&start)?,
        Order::Depth => graph.depth_first_search_from(&start)?,
    };

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "traversal": order.name(),
                "from": from,
                "order": visited,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("{}", join_ids(&visited));
        }
    }

    Ok(())
}
