//! `graphwalk cycle` command - cycle reachable from a vertex
//!
//! Without `--directed` every edge is a directed pair, so any vertex with a
//! neighbour reports a cycle.

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::network::Network;

use crate::commands::{lookup, Output};

/// Execute the cycle command
pub fn execute(output: Output, network: &Network, from: u32) -> Result<()> {
    let start = lookup(&network.graph, from)?;
    let has_cycle = network.graph.has_cycle(&start)?;

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "from": from,
                "has_cycle": has_cycle,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            let answer = if has_cycle { "yes" } else { "no" };
            if output.quiet {
                println!("{}", answer);
            } else {
                println!("cycle reachable from {}: {}", from, answer);
            }
        }
    }

    Ok(())
}
